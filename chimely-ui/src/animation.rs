//! Tweening between successive render targets.
//!
//! ## Usage
//!
//! Components compute *target* visuals from their inputs. When the target
//! changes, the host keeps the previous target, measures the time since the
//! change and asks [`animate`] for the value to draw right now.
//!
//! ```
//! use chimely_ui::{AnimationSpec, animate};
//!
//! let spec = AnimationSpec::EaseOut { duration: 0.5 };
//! assert_eq!(animate(&0.0_f32, &1.0, 0.0, spec), 0.0);
//! assert_eq!(animate(&0.0_f32, &1.0, 0.5, spec), 1.0);
//! let halfway = animate(&0.0_f32, &1.0, 0.25, spec);
//! assert!(halfway > 0.5 && halfway < 1.0);
//! ```

use std::f32::consts::TAU;

use crate::{Color, Dp, DpPosition};

/// Residual displacement at which a spring counts as settled.
const SPRING_SETTLE_THRESHOLD: f32 = 0.001;

fn cubic_bezier(t: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    let u = 1.0 - t;
    (u * u * u * a) + (3.0 * u * u * t * b) + (3.0 * u * t * t * c) + (t * t * t * d)
}

fn cubic_bezier_easing(progress: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let x = unit(progress);
    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut t = x;

    for _ in 0..16 {
        let mid = (lo + hi) * 0.5;
        let mid_x = cubic_bezier(mid, 0.0, x1, x2, 1.0);
        if mid_x < x {
            lo = mid;
        } else {
            hi = mid;
        }
        t = mid;
    }

    cubic_bezier(t, 0.0, y1, y2, 1.0).clamp(0.0, 1.0)
}

fn unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Identity curve.
pub fn linear(progress: f32) -> f32 {
    unit(progress)
}

/// Decelerating curve, `cubic-bezier(0, 0, 0.58, 1)`.
pub fn ease_out(progress: f32) -> f32 {
    let p = unit(progress);
    if p <= 0.0 || p >= 1.0 {
        p
    } else {
        cubic_bezier_easing(p, 0.0, 0.0, 0.58, 1.0)
    }
}

/// Symmetric curve, `cubic-bezier(0.42, 0, 0.58, 1)`.
pub fn ease_in_out(progress: f32) -> f32 {
    let p = unit(progress);
    if p <= 0.0 || p >= 1.0 {
        p
    } else {
        cubic_bezier_easing(p, 0.42, 0.0, 0.58, 1.0)
    }
}

/// Step response of a damped spring released at rest from 0 towards 1.
///
/// `response` is the undamped period in seconds and `damping_fraction` the
/// damping ratio. Under-damped springs overshoot, so the result may exceed
/// `1.0` for a while.
pub fn spring_progress(elapsed: f32, response: f32, damping_fraction: f32) -> f32 {
    if elapsed <= 0.0 || elapsed.is_nan() {
        return 0.0;
    }
    if response <= 0.0 {
        return 1.0;
    }

    let omega = TAU / response;
    let zeta = damping_fraction.max(0.0);
    if zeta < 1.0 {
        let damped = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega * elapsed).exp();
        1.0 - envelope
            * ((damped * elapsed).cos() + (zeta * omega / damped) * (damped * elapsed).sin())
    } else {
        let envelope = (-omega * elapsed).exp();
        1.0 - envelope * (1.0 + omega * elapsed)
    }
}

fn spring_settle_time(response: f32, damping_fraction: f32) -> f32 {
    if response <= 0.0 {
        return 0.0;
    }
    let decay = TAU / response * damping_fraction.clamp(0.0, 1.0);
    if decay <= 0.0 {
        return f32::INFINITY;
    }
    // Critically damped springs carry an extra linear factor, allow it twice the time.
    let base = -SPRING_SETTLE_THRESHOLD.ln() / decay;
    if damping_fraction >= 1.0 { base * 2.0 } else { base }
}

/// How a value travels from its previous target to a new one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationSpec {
    /// Jump straight to the new target.
    #[default]
    None,
    /// Decelerating curve over `duration` seconds.
    EaseOut {
        /// Length of the transition in seconds.
        duration: f32,
    },
    /// Symmetric curve over `duration` seconds.
    EaseInOut {
        /// Length of the transition in seconds.
        duration: f32,
    },
    /// Damped spring.
    Spring {
        /// Undamped period in seconds.
        response: f32,
        /// Damping ratio, `1.0` is critically damped.
        damping_fraction: f32,
    },
}

impl AnimationSpec {
    /// Fraction of the way to the target after `elapsed` seconds.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if elapsed.is_nan() || elapsed <= 0.0 {
            return match self {
                AnimationSpec::None => 1.0,
                _ => 0.0,
            };
        }
        match *self {
            AnimationSpec::None => 1.0,
            AnimationSpec::EaseOut { duration } => timed(elapsed, duration, ease_out),
            AnimationSpec::EaseInOut { duration } => timed(elapsed, duration, ease_in_out),
            AnimationSpec::Spring {
                response,
                damping_fraction,
            } => {
                if self.is_finished(elapsed) {
                    1.0
                } else {
                    spring_progress(elapsed, response, damping_fraction)
                }
            }
        }
    }

    /// Whether the transition has reached its target after `elapsed` seconds.
    pub fn is_finished(&self, elapsed: f32) -> bool {
        match *self {
            AnimationSpec::None => true,
            AnimationSpec::EaseOut { duration } | AnimationSpec::EaseInOut { duration } => {
                elapsed >= duration
            }
            AnimationSpec::Spring {
                response,
                damping_fraction,
            } => elapsed >= spring_settle_time(response, damping_fraction),
        }
    }
}

fn timed(elapsed: f32, duration: f32, curve: fn(f32) -> f32) -> f32 {
    if duration <= 0.0 || elapsed >= duration {
        1.0
    } else {
        curve(elapsed / duration)
    }
}

/// Values that can be blended towards another value of the same type.
///
/// `t` is usually within `[0.0, 1.0]` but spring curves overshoot; numeric
/// implementations extrapolate, colors clamp.
pub trait Lerp {
    /// Blend `self` towards `target` by `t`.
    fn lerp(&self, target: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, t: f32) -> Self {
        self + (target - self) * t
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, t: f32) -> Self {
        self + (target - self) * t as f64
    }
}

impl Lerp for Dp {
    fn lerp(&self, target: &Self, t: f32) -> Self {
        Dp(Lerp::lerp(&self.0, &target.0, t))
    }
}

impl Lerp for DpPosition {
    fn lerp(&self, target: &Self, t: f32) -> Self {
        DpPosition::new(self.x.lerp(&target.x, t), self.y.lerp(&target.y, t))
    }
}

impl Lerp for Color {
    fn lerp(&self, target: &Self, t: f32) -> Self {
        Color::lerp(*self, *target, t)
    }
}

/// The value to draw `elapsed` seconds after the target moved from
/// `previous` to `target`.
///
/// A finished transition returns `target` unchanged, so settled frames are
/// bit-identical to the target.
pub fn animate<T>(previous: &T, target: &T, elapsed: f32, spec: AnimationSpec) -> T
where
    T: Lerp + Clone,
{
    if spec.is_finished(elapsed) {
        return target.clone();
    }
    previous.lerp(target, spec.progress(elapsed))
}
