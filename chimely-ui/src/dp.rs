//! # Density-Independent Lengths (Dp)
//!
//! All indicator geometry is expressed in [`Dp`], a logical length unit that
//! the host converts to physical pixels with a global scale factor.
//!
//! ## Usage
//!
//! ```
//! use chimely_ui::{Dp, DpPosition};
//!
//! let ring_radius = Dp(137.25);
//! let center = DpPosition::new(Dp(150.0), Dp(150.0));
//!
//! // 12 o'clock is straight up in a y-down coordinate system.
//! let top = DpPosition::on_circle(center, ring_radius, 0.0);
//! assert!((top.y.0 - 12.75).abs() < 1e-9);
//! ```

use std::{
    ops::{Add, Div, Mul, Neg, Sub},
    sync::OnceLock,
};

use parking_lot::RwLock;
use tracing::debug;

/// Global scale factor for converting between dp and physical pixels.
///
/// Read on every conversion and defaults to `1.0` until
/// [`set_scale_factor`] is called.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Updates the global dp-to-pixel scale factor.
pub fn set_scale_factor(scale_factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = scale_factor;
    debug!(scale_factor, "dp scale factor updated");
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent length.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f64);

impl Dp {
    /// Zero length.
    pub const ZERO: Dp = Dp(0.0);

    /// Creates a new `Dp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// The larger of two lengths.
    ///
    /// Mirrors [`f64::max`], so a NaN operand yields the other operand.
    pub fn max(self, other: Dp) -> Dp {
        Dp(self.0.max(other.0))
    }

    /// The smaller of two lengths.
    pub fn min(self, other: Dp) -> Dp {
        Dp(self.0.min(other.0))
    }

    /// Floors negative and non-finite lengths to zero.
    pub fn non_negative(self) -> Dp {
        if self.0.is_finite() { self.max(Dp::ZERO) } else { Dp::ZERO }
    }

    /// Converts this dp value to physical pixels as an `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Creates a `Dp` value from physical pixels specified as an `f32`.
    pub fn from_pixels_f32(value: f32) -> Self {
        Dp((value as f64) / scale_factor())
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f64) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl Div<f64> for Dp {
    type Output = Dp;

    fn div(self, rhs: f64) -> Dp {
        Dp(self.0 / rhs)
    }
}

impl Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Dp {
        Dp(-self.0)
    }
}

/// A point in dp, y growing downwards.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpPosition {
    /// Horizontal coordinate.
    pub x: Dp,
    /// Vertical coordinate.
    pub y: Dp,
}

impl DpPosition {
    /// The origin.
    pub const ZERO: DpPosition = DpPosition {
        x: Dp::ZERO,
        y: Dp::ZERO,
    };

    /// Creates a new position.
    pub const fn new(x: Dp, y: Dp) -> Self {
        Self { x, y }
    }

    /// Returns this position moved by `dx` and `dy`.
    pub fn offset(self, dx: Dp, dy: Dp) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: DpPosition) -> Dp {
        let dx = self.x.0 - other.x.0;
        let dy = self.y.0 - other.y.0;
        Dp(dx.hypot(dy))
    }

    /// Point on a circle around `center`.
    ///
    /// `angle_degrees` is measured clockwise from 12 o'clock, matching the way
    /// the rings sweep.
    pub fn on_circle(center: DpPosition, radius: Dp, angle_degrees: f64) -> Self {
        let radians = angle_degrees.to_radians();
        Self::new(
            center.x + radius * radians.sin(),
            center.y - radius * radians.cos(),
        )
    }
}
