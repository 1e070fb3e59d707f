//! Flattened draw primitives for the indicator.
//!
//! ## Usage
//!
//! Walk [`crate::timer_indicator::TimerIndicatorVisual::draw_commands`] back
//! to front and hand each command to the host's 2D renderer.

use chimely_ui::{Color, Dp, DpPosition};

use crate::halo::HaloRing;

/// Stroke cap used for arc ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ArcCap {
    /// Rounded stroke ends.
    #[default]
    Round,
    /// Flat stroke ends.
    Butt,
}

/// A color stop along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GradientStop {
    /// Position of the stop in `[0.0, 1.0]`.
    pub offset: f32,
    /// Color at the stop.
    pub color: Color,
}

/// Three evenly spaced stops at offsets 0, 0.5 and 1.
pub fn three_stops(colors: [Color; 3]) -> [GradientStop; 3] {
    let [first, middle, last] = colors;
    [
        GradientStop {
            offset: 0.0,
            color: first,
        },
        GradientStop {
            offset: 0.5,
            color: middle,
        },
        GradientStop {
            offset: 1.0,
            color: last,
        },
    ]
}

/// Gradient that varies with the angle around `center`.
///
/// Offsets map onto a full turn starting at `start_angle_degrees`, so offset
/// 0.5 sits half a turn after the start whatever the stroked arc covers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AngularGradient {
    /// Pivot of the gradient.
    pub center: DpPosition,
    /// Angle of offset 0, 0° at 3 o'clock, clockwise.
    pub start_angle_degrees: f64,
    /// Color stops.
    pub stops: [GradientStop; 3],
}

/// Gradient that varies with the distance from `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RadialGradient {
    /// Center of the gradient.
    pub center: DpPosition,
    /// Distance at which offset 0 is reached.
    pub start_radius: Dp,
    /// Distance at which offset 1 is reached.
    pub end_radius: Dp,
    /// Color stops.
    pub stops: [GradientStop; 3],
}

/// Blurred copy of a shape drawn below it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DropShadow {
    /// Shadow color including its alpha.
    pub color: Color,
    /// Blur radius.
    pub radius: Dp,
    /// Offset from the shape.
    pub offset: DpPosition,
}

/// One primitive of the indicator, in back-to-front order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DrawCommand {
    /// Full circle outline.
    StrokeCircle {
        /// Center of the circle.
        center: DpPosition,
        /// Radius of the stroke path.
        radius: Dp,
        /// Width of the stroke.
        stroke_width: Dp,
        /// Stroke color.
        color: Color,
    },
    /// Gradient-stroked arc.
    StrokeArc {
        /// Center of the arc.
        center: DpPosition,
        /// Radius of the stroke path.
        radius: Dp,
        /// Width of the stroke.
        stroke_width: Dp,
        /// Start angle, 0° at 3 o'clock, clockwise.
        start_angle_degrees: f64,
        /// Clockwise extent of the arc.
        sweep_angle_degrees: f64,
        /// Stroke cap at both ends.
        cap: ArcCap,
        /// Stroke gradient.
        gradient: AngularGradient,
    },
    /// Solid disc.
    FillCircle {
        /// Center of the disc.
        center: DpPosition,
        /// Diameter of the disc.
        diameter: Dp,
        /// Fill color.
        color: Color,
        /// Layer opacity applied on top of the color's alpha.
        opacity: f32,
    },
    /// Shadow under a disc.
    Shadow {
        /// Center of the casting disc.
        center: DpPosition,
        /// Diameter of the casting disc before `scale`.
        diameter: Dp,
        /// Shadow parameters.
        shadow: DropShadow,
        /// Scale applied around `center`.
        scale: f32,
    },
    /// Disc filled with a radial gradient.
    FillRadialGradientCircle {
        /// Center of the disc.
        center: DpPosition,
        /// Diameter of the disc before `scale`.
        diameter: Dp,
        /// Fill gradient.
        gradient: RadialGradient,
        /// Scale applied around `center`.
        scale: f32,
    },
    /// Centered text.
    Label {
        /// Center of the text box.
        center: DpPosition,
        /// Text to draw.
        text: &'static str,
        /// Text color.
        color: Color,
        /// Scale applied around `center`.
        scale: f32,
    },
    /// Halo outline around the button.
    HaloRing(HaloRing),
}

impl DrawCommand {
    /// Whether the command leaves the canvas untouched.
    ///
    /// Zero-size shapes and fully transparent layers are skipped by hosts that
    /// cull before submitting.
    pub fn is_invisible(&self) -> bool {
        match self {
            DrawCommand::StrokeCircle {
                stroke_width,
                color,
                ..
            } => stroke_width.0 <= 0.0 || color.a <= 0.0,
            DrawCommand::StrokeArc {
                sweep_angle_degrees,
                ..
            } => *sweep_angle_degrees <= 0.0,
            DrawCommand::FillCircle {
                diameter,
                color,
                opacity,
                ..
            } => diameter.0 <= 0.0 || color.a <= 0.0 || *opacity <= 0.0,
            DrawCommand::Shadow {
                diameter,
                shadow,
                scale,
                ..
            } => diameter.0 <= 0.0 || *scale <= 0.0 || shadow.color.a <= 0.0,
            DrawCommand::FillRadialGradientCircle {
                diameter, scale, ..
            } => diameter.0 <= 0.0 || *scale <= 0.0,
            DrawCommand::Label { text, color, .. } => text.is_empty() || color.a <= 0.0,
            DrawCommand::HaloRing(ring) => {
                ring.diameter.0 <= 0.0 || ring.opacity <= 0.0 || ring.stroke_color.a <= 0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_stops_are_evenly_spaced() {
        let stops = three_stops([Color::BLACK, Color::WHITE, Color::TRANSPARENT]);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[1].offset, 0.5);
        assert_eq!(stops[2].offset, 1.0);
        assert_eq!(stops[1].color, Color::WHITE);
    }

    #[test]
    fn faded_halo_ring_is_invisible() {
        use crate::{halo::pulse_halo, palette::TimerPalette};

        let palette = TimerPalette::default();
        let center = DpPosition::new(Dp(150.0), Dp(150.0));
        let active = pulse_halo(center, Dp(151.92), true, &palette);
        let resting = pulse_halo(center, Dp(151.92), false, &palette);

        assert!(active.rings.map(DrawCommand::HaloRing).iter().all(DrawCommand::is_invisible));
        assert!(!resting.rings.map(DrawCommand::HaloRing).iter().any(DrawCommand::is_invisible));
    }

    #[test]
    fn empty_sweep_is_invisible() {
        let arc = |sweep_angle_degrees| DrawCommand::StrokeArc {
            center: DpPosition::ZERO,
            radius: Dp(100.0),
            stroke_width: Dp(10.0),
            start_angle_degrees: -90.0,
            sweep_angle_degrees,
            cap: ArcCap::Round,
            gradient: AngularGradient {
                center: DpPosition::ZERO,
                start_angle_degrees: -90.0,
                stops: three_stops([Color::BLACK, Color::WHITE, Color::BLACK]),
            },
        };
        assert!(arc(0.0).is_invisible());
        assert!(!arc(126.0).is_invisible());
    }

    #[test]
    fn collapsed_shadow_is_invisible() {
        let shadow = |scale| DrawCommand::Shadow {
            center: DpPosition::ZERO,
            diameter: Dp(40.0),
            shadow: DropShadow {
                color: Color::BLACK.with_alpha(0.3),
                radius: Dp(8.0),
                offset: DpPosition::new(Dp(0.0), Dp(4.0)),
            },
            scale,
        };
        assert!(shadow(0.0).is_invisible());
        assert!(!shadow(0.92).is_invisible());
    }

    #[test]
    fn zero_size_disc_is_invisible() {
        let command = DrawCommand::FillCircle {
            center: DpPosition::ZERO,
            diameter: Dp::ZERO,
            color: Color::WHITE,
            opacity: 1.0,
        };
        assert!(command.is_invisible());
    }
}
