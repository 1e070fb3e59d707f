//! Colors and layout ratios for the timer indicator.
//!
//! ## Usage
//!
//! Start from [`TimerPalette::default`] and override individual entries to
//! restyle the rings or the primary button.
//!
//! ```
//! use chimely_components::palette::TimerPalette;
//! use chimely_ui::Color;
//!
//! let palette = TimerPalette::default().label_color(Color::BLACK);
//! assert_eq!(palette.label_color, Color::BLACK);
//! ```

use chimely_ui::{Color, Dp, DpPosition};
use derive_setters::Setters;

use crate::ring::RingStyle;

/// Reference values for the timer indicator.
pub struct TimerPaletteDefaults;

impl TimerPaletteDefaults {
    /// First color of the duration ring gradient.
    pub const DURATION_START: Color = Color::from_rgb_u8(123, 98, 255);
    /// Last color of the duration ring gradient, also its track and marker color.
    pub const DURATION_END: Color = Color::from_rgb_u8(107, 77, 255);
    /// First color of the interval ring gradient.
    pub const INTERVAL_START: Color = Color::from_rgb_u8(214, 187, 255);
    /// Last color of the interval ring gradient, also its track color.
    pub const INTERVAL_END: Color = Color::from_rgb_u8(199, 166, 255);
    /// Opacity of the full-circle track behind each ring.
    pub const TRACK_OPACITY: f32 = 0.20;
    /// Opacity of the periodic marker on the duration ring.
    pub const PERIODIC_MARKER_OPACITY: f32 = 0.8;
    /// Ring stroke width as a fraction of the indicator side.
    pub const LINE_WIDTH_RATIO: f64 = 0.085;
    /// Lower bound for the ring stroke width.
    pub const MINIMUM_LINE_WIDTH: Dp = Dp(4.0);
    /// Base ratio of the gap between the rings, scaled by [`Self::GAP_MULTIPLIER`].
    pub const GAP_BASE_RATIO: f64 = 0.12;
    /// Scale applied to both the gap ratio and the gap floor.
    pub const GAP_MULTIPLIER: f64 = 0.32;

    /// Button fill for both inactive states.
    pub const BUTTON_INACTIVE: Color = Color::from_rgb(0.55, 0.55, 0.56);
    /// Button fill when a start is armed.
    pub const BUTTON_START_ACTIVE: Color = Color::from_rgb(0.27, 0.66, 0.20);
    /// Button fill while running.
    pub const BUTTON_STOP: Color = Color::from_rgb(0.87, 0.06, 0.00);
    /// Inner stop of the schedule-active gradient.
    pub const BUTTON_SCHEDULE_ACTIVE_TOP: Color = Color::from_rgb(1.0, 0.96, 0.78);
    /// Middle stop of the schedule-active gradient.
    pub const BUTTON_SCHEDULE_ACTIVE_MID: Color = Color::from_rgb(1.0, 0.84, 0.20);
    /// Outer stop of the schedule-active gradient.
    pub const BUTTON_SCHEDULE_ACTIVE_BOTTOM: Color = Color::from_rgb(1.0, 0.55, 0.05);
    /// Label color on every button state.
    pub const LABEL_COLOR: Color = Color::WHITE;
    /// Button drop shadow color.
    pub const SHADOW_COLOR: Color = Color::BLACK.with_alpha(0.3);
    /// Button drop shadow blur radius.
    pub const SHADOW_RADIUS: Dp = Dp(8.0);
    /// Button drop shadow offset.
    pub const SHADOW_OFFSET: DpPosition = DpPosition::new(Dp(0.0), Dp(4.0));

    /// Base color of the halo strokes, before the per-ring opacity.
    pub const HALO_COLOR: Color = Color::WHITE;
    /// Halo stroke width.
    pub const HALO_STROKE_WIDTH: Dp = Dp(3.0);
    /// Halo blur radius.
    pub const HALO_BLUR_RADIUS: Dp = Dp(1.2);
}

/// Every tunable color and ratio of the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Setters)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TimerPalette {
    /// First color of the duration ring gradient.
    pub duration_start: Color,
    /// Last color of the duration ring gradient.
    pub duration_end: Color,
    /// First color of the interval ring gradient.
    pub interval_start: Color,
    /// Last color of the interval ring gradient.
    pub interval_end: Color,
    /// Opacity of the ring tracks.
    pub track_opacity: f32,
    /// Opacity of the periodic marker.
    pub periodic_marker_opacity: f32,
    /// Ring stroke width as a fraction of the indicator side.
    pub line_width_ratio: f64,
    /// Lower bound for the ring stroke width.
    pub minimum_line_width: Dp,
    /// Base ratio of the gap between the rings.
    pub gap_base_ratio: f64,
    /// Scale applied to the gap ratio and to the gap floor.
    pub gap_multiplier: f64,
    /// Button fill for both inactive states.
    pub button_inactive: Color,
    /// Button fill when a start is armed.
    pub button_start_active: Color,
    /// Button fill while running.
    pub button_stop: Color,
    /// Inner stop of the schedule-active gradient.
    pub button_schedule_active_top: Color,
    /// Middle stop of the schedule-active gradient.
    pub button_schedule_active_mid: Color,
    /// Outer stop of the schedule-active gradient.
    pub button_schedule_active_bottom: Color,
    /// Label color.
    pub label_color: Color,
    /// Button drop shadow color.
    pub shadow_color: Color,
    /// Button drop shadow blur radius.
    pub shadow_radius: Dp,
    /// Button drop shadow offset.
    pub shadow_offset: DpPosition,
    /// Base color of the halo strokes.
    pub halo_color: Color,
    /// Halo stroke width.
    pub halo_stroke_width: Dp,
    /// Halo blur radius.
    pub halo_blur_radius: Dp,
}

impl Default for TimerPalette {
    fn default() -> Self {
        Self {
            duration_start: TimerPaletteDefaults::DURATION_START,
            duration_end: TimerPaletteDefaults::DURATION_END,
            interval_start: TimerPaletteDefaults::INTERVAL_START,
            interval_end: TimerPaletteDefaults::INTERVAL_END,
            track_opacity: TimerPaletteDefaults::TRACK_OPACITY,
            periodic_marker_opacity: TimerPaletteDefaults::PERIODIC_MARKER_OPACITY,
            line_width_ratio: TimerPaletteDefaults::LINE_WIDTH_RATIO,
            minimum_line_width: TimerPaletteDefaults::MINIMUM_LINE_WIDTH,
            gap_base_ratio: TimerPaletteDefaults::GAP_BASE_RATIO,
            gap_multiplier: TimerPaletteDefaults::GAP_MULTIPLIER,
            button_inactive: TimerPaletteDefaults::BUTTON_INACTIVE,
            button_start_active: TimerPaletteDefaults::BUTTON_START_ACTIVE,
            button_stop: TimerPaletteDefaults::BUTTON_STOP,
            button_schedule_active_top: TimerPaletteDefaults::BUTTON_SCHEDULE_ACTIVE_TOP,
            button_schedule_active_mid: TimerPaletteDefaults::BUTTON_SCHEDULE_ACTIVE_MID,
            button_schedule_active_bottom: TimerPaletteDefaults::BUTTON_SCHEDULE_ACTIVE_BOTTOM,
            label_color: TimerPaletteDefaults::LABEL_COLOR,
            shadow_color: TimerPaletteDefaults::SHADOW_COLOR,
            shadow_radius: TimerPaletteDefaults::SHADOW_RADIUS,
            shadow_offset: TimerPaletteDefaults::SHADOW_OFFSET,
            halo_color: TimerPaletteDefaults::HALO_COLOR,
            halo_stroke_width: TimerPaletteDefaults::HALO_STROKE_WIDTH,
            halo_blur_radius: TimerPaletteDefaults::HALO_BLUR_RADIUS,
        }
    }
}

impl TimerPalette {
    /// `(start, end)` gradient colors of a ring.
    pub fn ring_colors(&self, style: RingStyle) -> (Color, Color) {
        match style {
            RingStyle::Duration => (self.duration_start, self.duration_end),
            RingStyle::Interval => (self.interval_start, self.interval_end),
        }
    }

    /// Ring gap as a fraction of the indicator side.
    pub fn gap_ratio(&self) -> f64 {
        self.gap_base_ratio * self.gap_multiplier
    }

    /// Smallest gap between the rings.
    pub fn minimum_gap(&self) -> Dp {
        self.minimum_line_width * self.gap_multiplier
    }
}
