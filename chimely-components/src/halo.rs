//! Breathing halo around the primary button.
//!
//! ## Usage
//!
//! The caller alternates [`PulsePhase`] to make the halo breathe. The active
//! target is the expanded, fully faded ring; the resting target shows the
//! rings slightly shrunk at their configured opacity, so each toggle plays an
//! outward expand-and-fade or an inward return.

use chimely_ui::{AnimationSpec, Color, Dp, DpPosition, Lerp};

use crate::{
    palette::TimerPalette,
    primary_button::{PrimaryButtonState, PulsePhase},
};

/// Reference values for the halo.
pub struct HaloDefaults;

impl HaloDefaults {
    /// `(diameter multiplier, opacity)` of the inner and outer halo ring.
    pub const RINGS: [(f64, f32); 2] = [(1.25, 0.18), (1.55, 0.12)];
    /// Extra scale on the multiplier while active.
    pub const ACTIVE_SCALE: f64 = 1.05;
    /// Extra scale on the multiplier while at rest.
    pub const INACTIVE_SCALE: f64 = 0.85;
    /// Transition between the two targets.
    pub const TRANSITION: AnimationSpec = AnimationSpec::EaseOut { duration: 0.6 };
}

/// Whether the halo targets its active (expanded, faded) state.
///
/// A running timer never breathes.
pub fn halo_is_active(
    should_pulse: bool,
    state: PrimaryButtonState,
    phase: PulsePhase,
) -> bool {
    let can_pulse = should_pulse && state != PrimaryButtonState::Stop;
    can_pulse && phase == PulsePhase::Breathing
}

/// One halo outline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HaloRing {
    /// Center, shared with the button.
    pub center: DpPosition,
    /// Outer diameter of the stroke path.
    pub diameter: Dp,
    /// Stroke color, already carrying the ring's configured opacity.
    pub stroke_color: Color,
    /// Stroke width.
    pub stroke_width: Dp,
    /// Blur radius.
    pub blur_radius: Dp,
    /// Layer opacity on top of `stroke_color`.
    pub opacity: f32,
}

impl Lerp for HaloRing {
    fn lerp(&self, target: &Self, t: f32) -> Self {
        Self {
            center: self.center.lerp(&target.center, t),
            diameter: self.diameter.lerp(&target.diameter, t),
            stroke_color: Lerp::lerp(&self.stroke_color, &target.stroke_color, t),
            stroke_width: self.stroke_width.lerp(&target.stroke_width, t),
            blur_radius: self.blur_radius.lerp(&target.blur_radius, t),
            opacity: Lerp::lerp(&self.opacity, &target.opacity, t).clamp(0.0, 1.0),
        }
    }
}

/// Target visual of the halo.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HaloVisual {
    /// Whether this is the active target.
    pub active: bool,
    /// Inner and outer ring.
    pub rings: [HaloRing; 2],
}

impl Lerp for HaloVisual {
    fn lerp(&self, target: &Self, t: f32) -> Self {
        Self {
            active: target.active,
            rings: [
                self.rings[0].lerp(&target.rings[0], t),
                self.rings[1].lerp(&target.rings[1], t),
            ],
        }
    }
}

/// Computes the halo target around a button of `button_diameter`.
pub fn pulse_halo(
    center: DpPosition,
    button_diameter: Dp,
    active: bool,
    palette: &TimerPalette,
) -> HaloVisual {
    let scale = if active {
        HaloDefaults::ACTIVE_SCALE
    } else {
        HaloDefaults::INACTIVE_SCALE
    };
    let rings = HaloDefaults::RINGS.map(|(multiplier, opacity)| HaloRing {
        center,
        diameter: button_diameter.non_negative() * (multiplier * scale),
        stroke_color: palette
            .halo_color
            .with_alpha(palette.halo_color.a * opacity),
        stroke_width: palette.halo_stroke_width,
        blur_radius: palette.halo_blur_radius,
        opacity: if active { 0.0 } else { opacity },
    });

    HaloVisual { active, rings }
}
