//! Progress rings: track, gradient sweep, leading dot and periodic marker.
//!
//! ## Usage
//!
//! Render the outer duration ring and the inner interval ring of the timer
//! indicator from clamped progress fractions.

use chimely_ui::{Color, Dp, DpPosition, Lerp};
use derive_setters::Setters;
use smallvec::SmallVec;
use tracing::trace;

use crate::{
    draw::{AngularGradient, ArcCap, DrawCommand, three_stops},
    palette::TimerPalette,
};

/// Angle of 12 o'clock with 0° at 3 o'clock and clockwise angles.
pub const TWELVE_O_CLOCK_DEGREES: f64 = -90.0;

/// Which of the two rings is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RingStyle {
    /// Outer ring, progress through the whole countdown.
    Duration,
    /// Inner ring, progress through the current chime interval.
    Interval,
}

impl RingStyle {
    /// Only the duration ring shows where the current interval cycle is.
    pub fn supports_periodic_marker(self) -> bool {
        matches!(self, RingStyle::Duration)
    }

    /// First gradient color.
    pub fn start_color(self, palette: &TimerPalette) -> Color {
        palette.ring_colors(self).0
    }

    /// Last gradient color, also used for the track and the periodic marker.
    pub fn end_color(self, palette: &TimerPalette) -> Color {
        palette.ring_colors(self).1
    }

    /// Middle gradient stop.
    pub fn mid_color(self, palette: &TimerPalette) -> Color {
        let (start, end) = palette.ring_colors(self);
        start.midpoint(end)
    }

    /// Gradient color at `fraction` of the sweep.
    pub fn interpolated_color(self, palette: &TimerPalette, fraction: f64) -> Color {
        let (start, end) = palette.ring_colors(self);
        start.lerp(end, clamp_progress(fraction) as f32)
    }
}

/// Clamps a progress fraction to `[0.0, 1.0]`, NaN counts as `0.0`.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Position within the current chime cycle for a given overall progress.
///
/// Returns `None` when either duration is non-positive or not finite, which
/// disables the periodic marker.
///
/// ```
/// use chimely_components::ring::periodic_marker_fraction;
///
/// // 60% of 30 minutes is 18 minutes, 3 minutes into the fourth 5 minute cycle.
/// let fraction = periodic_marker_fraction(1800.0, 300.0, 0.6).unwrap_or_default();
/// assert!((fraction - 0.6).abs() < 1e-9);
/// assert_eq!(periodic_marker_fraction(0.0, 300.0, 0.6), None);
/// ```
pub fn periodic_marker_fraction(
    total_duration: f64,
    chime_interval: f64,
    progress: f64,
) -> Option<f64> {
    let usable = |seconds: f64| seconds.is_finite() && seconds > 0.0;
    if !usable(total_duration) || !usable(chime_interval) {
        return None;
    }
    let elapsed = clamp_progress(progress) * total_duration;
    let remainder = elapsed % chime_interval;
    Some(remainder / chime_interval)
}

/// Full circle behind a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrackStroke {
    /// Stroke color with the track opacity applied.
    pub color: Color,
    /// Stroke width.
    pub stroke_width: Dp,
}

/// A dot riding on a ring's stroke path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarkerDot {
    /// Center of the ring the dot orbits.
    pub orbit_center: DpPosition,
    /// Radius of the orbit.
    pub orbit_radius: Dp,
    /// Position along the ring in `[0.0, 1.0]`.
    pub fraction: f64,
    /// Clockwise angle from 12 o'clock.
    pub angle_degrees: f64,
    /// Center of the dot.
    pub center: DpPosition,
    /// Diameter of the dot.
    pub diameter: Dp,
    /// Fill color.
    pub color: Color,
    /// Layer opacity.
    pub opacity: f32,
}

impl MarkerDot {
    fn on_ring(
        orbit_center: DpPosition,
        orbit_radius: Dp,
        fraction: f64,
        diameter: Dp,
        color: Color,
        opacity: f32,
    ) -> Self {
        let angle_degrees = fraction * 360.0;
        Self {
            orbit_center,
            orbit_radius,
            fraction,
            angle_degrees,
            center: DpPosition::on_circle(orbit_center, orbit_radius, angle_degrees),
            diameter,
            color,
            opacity,
        }
    }

    fn draw_command(&self) -> DrawCommand {
        DrawCommand::FillCircle {
            center: self.center,
            diameter: self.diameter,
            color: self.color,
            opacity: self.opacity,
        }
    }
}

/// Moves the dot by rotating it around its orbit, the way a rotation
/// animation would, rather than cutting across the ring.
impl Lerp for MarkerDot {
    fn lerp(&self, target: &Self, t: f32) -> Self {
        let angle_degrees = Lerp::lerp(&self.angle_degrees, &target.angle_degrees, t);
        let orbit_center = self.orbit_center.lerp(&target.orbit_center, t);
        let orbit_radius = self.orbit_radius.lerp(&target.orbit_radius, t);
        Self {
            orbit_center,
            orbit_radius,
            fraction: angle_degrees / 360.0,
            angle_degrees,
            center: DpPosition::on_circle(orbit_center, orbit_radius, angle_degrees),
            diameter: self.diameter.lerp(&target.diameter, t),
            color: Lerp::lerp(&self.color, &target.color, t),
            opacity: Lerp::lerp(&self.opacity, &target.opacity, t),
        }
    }
}

/// The colored part of a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArcSweep {
    /// Start angle, always 12 o'clock.
    pub start_angle_degrees: f64,
    /// Clockwise extent, `360 × progress`.
    pub sweep_angle_degrees: f64,
    /// Stroke width.
    pub stroke_width: Dp,
    /// Stroke cap.
    pub cap: ArcCap,
    /// Start → mid → end gradient around the ring.
    pub gradient: AngularGradient,
}

/// Arguments for [`render_ring`].
#[derive(Clone, Debug, Setters)]
pub struct RingArgs {
    /// Which ring to draw.
    pub style: RingStyle,
    /// Raw progress; clamped before use.
    pub progress: f64,
    /// Stroke width.
    pub line_width: Dp,
    /// Center of the ring.
    pub center: DpPosition,
    /// Radius of the stroke path.
    pub radius: Dp,
    /// Periodic marker position, only honored on rings that support it.
    #[setters(strip_option)]
    pub periodic_marker: Option<f64>,
    /// Colors and opacities.
    pub palette: TimerPalette,
}

impl RingArgs {
    /// Arguments for `style` with zero progress and no marker.
    pub fn new(style: RingStyle) -> Self {
        Self {
            style,
            progress: 0.0,
            line_width: Dp::ZERO,
            center: DpPosition::ZERO,
            radius: Dp::ZERO,
            periodic_marker: None,
            palette: TimerPalette::default(),
        }
    }
}

/// Target visual of one ring.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RingVisual {
    /// Which ring this is.
    pub style: RingStyle,
    /// Center of the ring.
    pub center: DpPosition,
    /// Radius of the stroke path.
    pub radius: Dp,
    /// Clamped progress the ring shows.
    pub progress: f64,
    /// Background track.
    pub track: TrackStroke,
    /// Position within the current chime cycle.
    pub periodic_marker: Option<MarkerDot>,
    /// Colored sweep, absent at zero progress.
    pub sweep: Option<ArcSweep>,
    /// Dot at the end of the sweep, absent at zero progress.
    pub leading_dot: Option<MarkerDot>,
}

impl RingVisual {
    /// Draw commands in back-to-front order.
    pub fn draw_commands(&self) -> SmallVec<[DrawCommand; 4]> {
        let mut commands = SmallVec::new();
        commands.push(DrawCommand::StrokeCircle {
            center: self.center,
            radius: self.radius,
            stroke_width: self.track.stroke_width,
            color: self.track.color,
        });
        if let Some(marker) = &self.periodic_marker {
            commands.push(marker.draw_command());
        }
        if let Some(sweep) = &self.sweep {
            commands.push(DrawCommand::StrokeArc {
                center: self.center,
                radius: self.radius,
                stroke_width: sweep.stroke_width,
                start_angle_degrees: sweep.start_angle_degrees,
                sweep_angle_degrees: sweep.sweep_angle_degrees,
                cap: sweep.cap,
                gradient: sweep.gradient,
            });
        }
        if let Some(dot) = &self.leading_dot {
            commands.push(dot.draw_command());
        }
        commands
    }
}

/// Computes the target visual of one ring.
///
/// ```
/// use chimely_components::ring::{RingArgs, RingStyle, render_ring};
/// use chimely_ui::Dp;
///
/// let ring = render_ring(&RingArgs::new(RingStyle::Interval).progress(0.35).line_width(Dp(8.0)));
/// let sweep = ring.sweep.map(|sweep| sweep.sweep_angle_degrees).unwrap_or_default();
/// assert!((sweep - 126.0).abs() < 1e-9);
/// ```
pub fn render_ring(args: &RingArgs) -> RingVisual {
    let palette = &args.palette;
    let progress = clamp_progress(args.progress);
    if progress != args.progress {
        trace!(style = ?args.style, raw = args.progress, progress, "ring progress clamped");
    }
    let (start, end) = palette.ring_colors(args.style);

    let track = TrackStroke {
        color: end.with_alpha(end.a * palette.track_opacity),
        stroke_width: args.line_width,
    };

    let periodic_marker = args
        .periodic_marker
        .filter(|_| args.style.supports_periodic_marker())
        .map(|fraction| {
            MarkerDot::on_ring(
                args.center,
                args.radius,
                clamp_progress(fraction),
                args.line_width,
                end,
                palette.periodic_marker_opacity,
            )
        });

    let (sweep, leading_dot) = if progress > 0.0 {
        let sweep = ArcSweep {
            start_angle_degrees: TWELVE_O_CLOCK_DEGREES,
            sweep_angle_degrees: 360.0 * progress,
            stroke_width: args.line_width,
            cap: ArcCap::Round,
            gradient: AngularGradient {
                center: args.center,
                start_angle_degrees: TWELVE_O_CLOCK_DEGREES,
                stops: three_stops([start, start.midpoint(end), end]),
            },
        };
        let dot = MarkerDot::on_ring(
            args.center,
            args.radius,
            progress,
            args.line_width,
            args.style.interpolated_color(palette, progress),
            1.0,
        );
        (Some(sweep), Some(dot))
    } else {
        (None, None)
    };

    RingVisual {
        style: args.style,
        center: args.center,
        radius: args.radius,
        progress,
        track,
        periodic_marker,
        sweep,
        leading_dot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn duration_ring(progress: f64) -> RingArgs {
        RingArgs::new(RingStyle::Duration)
            .progress(progress)
            .line_width(Dp(25.5))
            .center(DpPosition::new(Dp(150.0), Dp(150.0)))
            .radius(Dp(137.25))
    }

    #[test]
    fn marker_resets_every_interval() {
        let fraction = periodic_marker_fraction(1800.0, 300.0, 0.5);
        assert_eq!(fraction, Some(0.0));
    }

    #[test]
    fn marker_tracks_position_inside_cycle() {
        let fraction = periodic_marker_fraction(1800.0, 300.0, 0.6);
        assert!(fraction.is_some_and(|f| approx_eq(f, 0.6)));
        let ring = render_ring(&duration_ring(0.6).periodic_marker(0.6));
        let marker = ring.periodic_marker.map(|m| m.angle_degrees);
        assert!(marker.is_some_and(|angle| approx_eq(angle, 216.0)));
    }

    #[test]
    fn marker_disabled_by_non_positive_durations() {
        assert_eq!(periodic_marker_fraction(0.0, 300.0, 0.5), None);
        assert_eq!(periodic_marker_fraction(1800.0, 0.0, 0.5), None);
        assert_eq!(periodic_marker_fraction(-1.0, 300.0, 0.5), None);
        assert_eq!(periodic_marker_fraction(1800.0, -300.0, 0.5), None);
        assert_eq!(periodic_marker_fraction(f64::NAN, 300.0, 0.5), None);
    }

    #[test]
    fn marker_uses_clamped_progress() {
        // 1.4 clamps to 1.0, 1800 mod 300 == 0.
        assert_eq!(periodic_marker_fraction(1800.0, 300.0, 1.4), Some(0.0));
        assert_eq!(periodic_marker_fraction(1800.0, 300.0, -0.2), Some(0.0));
    }

    #[test]
    fn interval_ring_ignores_marker() {
        let ring = render_ring(&RingArgs::new(RingStyle::Interval).periodic_marker(0.3));
        assert!(ring.periodic_marker.is_none());
    }

    #[test]
    fn sweep_angle_follows_progress() {
        let ring = render_ring(&duration_ring(0.65));
        let sweep = ring.sweep.map(|s| s.sweep_angle_degrees);
        assert!(sweep.is_some_and(|angle| approx_eq(angle, 234.0)));
        assert_eq!(
            ring.sweep.map(|s| s.start_angle_degrees),
            Some(TWELVE_O_CLOCK_DEGREES)
        );
        assert_eq!(ring.sweep.map(|s| s.cap), Some(ArcCap::Round));
    }

    #[test]
    fn zero_progress_draws_only_track_and_marker() {
        let ring = render_ring(&duration_ring(0.0).periodic_marker(0.25));
        assert!(ring.sweep.is_none());
        assert!(ring.leading_dot.is_none());
        assert!(ring.periodic_marker.is_some());
        assert_eq!(ring.draw_commands().len(), 2);
    }

    #[test]
    fn negative_progress_is_zero_progress() {
        let ring = render_ring(&duration_ring(-0.3));
        assert_eq!(ring.progress, 0.0);
        assert!(ring.sweep.is_none());
    }

    #[test]
    fn overfull_progress_is_a_full_turn() {
        let ring = render_ring(&duration_ring(3.0));
        assert_eq!(ring.sweep.map(|s| s.sweep_angle_degrees), Some(360.0));
        let palette = TimerPalette::default();
        assert_eq!(ring.leading_dot.map(|d| d.color), Some(palette.duration_end));
    }

    #[test]
    fn leading_dot_matches_gradient_at_sweep_end() {
        let palette = TimerPalette::default();
        let ring = render_ring(&duration_ring(0.65));
        let expected = palette.duration_start.lerp(palette.duration_end, 0.65);
        let dot = ring.leading_dot.map(|d| (d.color, d.angle_degrees, d.diameter));
        assert!(dot.is_some_and(|(color, angle, diameter)| {
            color == expected && approx_eq(angle, 234.0) && diameter == Dp(25.5)
        }));
    }

    #[test]
    fn track_uses_end_color_at_track_opacity() {
        let palette = TimerPalette::default();
        let ring = render_ring(&duration_ring(0.1));
        assert_eq!(ring.track.color, palette.duration_end.with_alpha(0.2));
        assert_eq!(ring.track.stroke_width, Dp(25.5));
    }

    #[test]
    fn gradient_runs_start_mid_end() {
        let palette = TimerPalette::default();
        let ring = render_ring(&duration_ring(0.5));
        let stops = ring.sweep.map(|s| s.gradient.stops.map(|stop| stop.color));
        assert_eq!(
            stops,
            Some([
                palette.duration_start,
                palette.duration_start.midpoint(palette.duration_end),
                palette.duration_end,
            ])
        );
    }

    #[test]
    fn marker_dot_sits_on_ring_radius() {
        let ring = render_ring(&duration_ring(0.0).periodic_marker(0.0));
        let center = ring.periodic_marker.map(|m| m.center);
        assert_eq!(center, Some(DpPosition::new(Dp(150.0), Dp(12.75))));
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let args = duration_ring(0.42).periodic_marker(0.17);
        assert_eq!(render_ring(&args), render_ring(&args));
    }
}
