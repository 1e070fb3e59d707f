//! Dual-ring countdown indicator with a breathing primary button.
//!
//! ## Usage
//!
//! Feed the timer's progress and button state in every frame, draw the
//! returned commands, and route pointer input through
//! [`PrimaryButtonInteraction`](crate::primary_button::PrimaryButtonInteraction).

use chimely_ui::{AnimationSpec, Callback, Dp, animate};
use derive_setters::Setters;
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::{
    draw::DrawCommand,
    geometry::IndicatorGeometry,
    halo::{HaloDefaults, HaloVisual, halo_is_active, pulse_halo},
    palette::TimerPalette,
    primary_button::{
        PrimaryButtonDefaults, PrimaryButtonState, PrimaryButtonVisual, PulsePhase, primary_button,
    },
    ring::{RingArgs, RingStyle, RingVisual, periodic_marker_fraction, render_ring},
};

/// Transition of the periodic marker when it jumps to a new position.
pub const PERIODIC_MARKER_ANIMATION: AnimationSpec = AnimationSpec::EaseInOut { duration: 0.25 };

/// Arguments for [`timer_indicator`].
#[derive(Clone, Debug, Setters)]
pub struct TimerIndicatorArgs {
    /// Progress through the whole countdown, clamped to `[0.0, 1.0]` on use.
    pub duration_progress: f64,
    /// Progress through the current chime interval, clamped on use.
    pub interval_progress: f64,
    /// Length of the countdown in seconds, non-positive hides the periodic marker.
    pub total_duration: f64,
    /// Length of one chime interval in seconds, non-positive hides the periodic marker.
    pub chime_interval: f64,
    /// Action the central button offers.
    pub primary_button_state: PrimaryButtonState,
    /// Whether the halo may breathe.
    pub should_breathe_primary_button: bool,
    /// Current breathing phase, alternated by the caller.
    pub pulse_phase: PulsePhase,
    /// Whether a pointer is currently held on the button.
    pub primary_button_pressed: bool,
    /// Runs once per activation of the central button.
    #[setters(into)]
    pub on_primary_action: Callback,
    /// Colors and ratios.
    pub palette: TimerPalette,
}

impl Default for TimerIndicatorArgs {
    fn default() -> Self {
        Self {
            duration_progress: 0.0,
            interval_progress: 0.0,
            total_duration: 0.0,
            chime_interval: 0.0,
            primary_button_state: PrimaryButtonState::default(),
            should_breathe_primary_button: false,
            pulse_phase: PulsePhase::default(),
            primary_button_pressed: false,
            on_primary_action: Callback::noop(),
            palette: TimerPalette::default(),
        }
    }
}

/// Target visual of the whole indicator for one set of inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimerIndicatorVisual {
    /// Derived layout.
    pub geometry: IndicatorGeometry,
    /// Outer ring.
    pub duration_ring: RingVisual,
    /// Inner ring.
    pub interval_ring: RingVisual,
    /// Central button.
    pub button: PrimaryButtonVisual,
    /// Halo around the button.
    pub halo: HaloVisual,
}

impl TimerIndicatorVisual {
    /// Every primitive in back-to-front order.
    pub fn draw_commands(&self) -> SmallVec<[DrawCommand; 16]> {
        let mut commands: SmallVec<[DrawCommand; 16]> = SmallVec::new();
        commands.extend(self.duration_ring.draw_commands());
        commands.extend(self.interval_ring.draw_commands());

        let button = &self.button;
        commands.push(DrawCommand::Shadow {
            center: button.center,
            diameter: button.diameter,
            shadow: button.shadow,
            scale: button.press_scale,
        });
        commands.push(DrawCommand::FillRadialGradientCircle {
            center: button.center,
            diameter: button.diameter,
            gradient: button.gradient,
            scale: button.press_scale,
        });
        commands.push(DrawCommand::Label {
            center: button.center,
            text: button.label,
            color: button.label_color,
            scale: button.press_scale,
        });
        commands.extend(self.halo.rings.iter().copied().map(DrawCommand::HaloRing));
        commands
    }
}

/// Computes the indicator for a drawing area of `width` × `height`.
///
/// The indicator occupies the largest square that fits, anchored at the
/// area's top-left corner.
///
/// ```
/// use chimely_components::{
///     primary_button::{PrimaryButtonState, PulsePhase},
///     timer_indicator::{TimerIndicatorArgs, timer_indicator},
/// };
/// use chimely_ui::Dp;
///
/// let args = TimerIndicatorArgs::default()
///     .duration_progress(0.65)
///     .interval_progress(0.35)
///     .total_duration(1800.0)
///     .chime_interval(300.0)
///     .primary_button_state(PrimaryButtonState::StartActive)
///     .should_breathe_primary_button(true)
///     .pulse_phase(PulsePhase::Breathing);
/// let visual = timer_indicator(&args, Dp(300.0), Dp(300.0));
///
/// assert_eq!(visual.button.label, "Start");
/// assert!(visual.halo.active);
/// ```
#[instrument(level = "debug", skip(args))]
pub fn timer_indicator(args: &TimerIndicatorArgs, width: Dp, height: Dp) -> TimerIndicatorVisual {
    let palette = &args.palette;
    let geometry = IndicatorGeometry::compute_with(width.min(height), palette);
    let center = geometry.center();

    let mut duration_args = RingArgs::new(RingStyle::Duration)
        .progress(args.duration_progress)
        .line_width(geometry.line_width)
        .center(center)
        .radius(geometry.duration_ring_radius())
        .palette(*palette);
    if let Some(fraction) = periodic_marker_fraction(
        args.total_duration,
        args.chime_interval,
        args.duration_progress,
    ) {
        duration_args = duration_args.periodic_marker(fraction);
    }
    let duration_ring = render_ring(&duration_args);

    let interval_ring = render_ring(
        &RingArgs::new(RingStyle::Interval)
            .progress(args.interval_progress)
            .line_width(geometry.line_width)
            .center(center)
            .radius(geometry.interval_ring_radius())
            .palette(*palette),
    );

    let button = primary_button(
        args.primary_button_state,
        center,
        geometry.button_diameter,
        args.primary_button_pressed,
        palette,
    );

    let active = halo_is_active(
        args.should_breathe_primary_button,
        args.primary_button_state,
        args.pulse_phase,
    );
    let halo = pulse_halo(center, geometry.button_diameter, active, palette);

    debug!(
        size = geometry.size.0,
        button_diameter = geometry.button_diameter.0,
        halo_active = active,
        "timer indicator laid out"
    );

    TimerIndicatorVisual {
        geometry,
        duration_ring,
        interval_ring,
        button,
        halo,
    }
}

/// Blends from the previously drawn visual to a new target.
///
/// Only the properties that move smoothly on screen animate: the periodic
/// marker orbits to its new angle, the halo expands or contracts, and the
/// press scale springs. Sweeps, colors, labels and layout snap to the target.
pub fn sample_transition(
    previous: &TimerIndicatorVisual,
    target: &TimerIndicatorVisual,
    elapsed: f32,
) -> TimerIndicatorVisual {
    let mut current = *target;

    if let (Some(from), Some(to)) = (
        previous.duration_ring.periodic_marker,
        target.duration_ring.periodic_marker,
    ) {
        current.duration_ring.periodic_marker =
            Some(animate(&from, &to, elapsed, PERIODIC_MARKER_ANIMATION));
    }

    current.halo = animate(&previous.halo, &target.halo, elapsed, HaloDefaults::TRANSITION);

    current.button.press_scale = animate(
        &previous.button.press_scale,
        &target.button.press_scale,
        elapsed,
        PrimaryButtonDefaults::PRESS_ANIMATION,
    );

    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{draw::ArcCap, halo::HaloRing};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn reference_args() -> TimerIndicatorArgs {
        TimerIndicatorArgs::default()
            .duration_progress(0.65)
            .interval_progress(0.35)
            .total_duration(1800.0)
            .chime_interval(300.0)
            .primary_button_state(PrimaryButtonState::StartActive)
            .should_breathe_primary_button(true)
            .pulse_phase(PulsePhase::Breathing)
    }

    #[test]
    fn reference_scene() {
        let args = reference_args();
        let visual = timer_indicator(&args, Dp(300.0), Dp(300.0));
        let palette = TimerPalette::default();

        assert!(approx_eq(visual.geometry.line_width.0, 25.5));
        let duration_sweep = visual.duration_ring.sweep.map(|s| s.sweep_angle_degrees);
        assert!(duration_sweep.is_some_and(|angle| approx_eq(angle, 234.0)));
        let interval_sweep = visual.interval_ring.sweep.map(|s| s.sweep_angle_degrees);
        assert!(interval_sweep.is_some_and(|angle| approx_eq(angle, 126.0)));

        // 0.65 * 1800 = 1170, 1170 mod 300 = 270.
        let marker = visual.duration_ring.periodic_marker.map(|m| m.fraction);
        assert!(marker.is_some_and(|fraction| approx_eq(fraction, 0.9)));
        assert!(visual.interval_ring.periodic_marker.is_none());

        assert!(visual.halo.active);
        assert_eq!(visual.button.label, "Start");
        assert_eq!(
            visual.button.gradient.stops.map(|stop| stop.color),
            PrimaryButtonState::StartActive.gradient(&palette)
        );
        assert!(approx_eq(visual.button.diameter.0, 151.92));
    }

    #[test]
    fn half_way_marker_sits_at_cycle_start() {
        let args = reference_args().duration_progress(0.5);
        let visual = timer_indicator(&args, Dp(300.0), Dp(300.0));
        let marker = visual.duration_ring.periodic_marker.map(|m| m.angle_degrees);
        assert_eq!(marker, Some(0.0));
    }

    #[test]
    fn uses_shorter_side_of_the_area() {
        let wide = timer_indicator(&reference_args(), Dp(500.0), Dp(300.0));
        let square = timer_indicator(&reference_args(), Dp(300.0), Dp(300.0));
        assert_eq!(wide, square);
    }

    #[test]
    fn stop_state_never_breathes() {
        let args = reference_args().primary_button_state(PrimaryButtonState::Stop);
        let visual = timer_indicator(&args, Dp(300.0), Dp(300.0));
        assert!(!visual.halo.active);
        assert_eq!(visual.button.label, "Stop");
    }

    #[test]
    fn disabled_marker_when_durations_missing() {
        let args = reference_args().chime_interval(0.0);
        let visual = timer_indicator(&args, Dp(300.0), Dp(300.0));
        assert!(visual.duration_ring.periodic_marker.is_none());
    }

    #[test]
    fn infinite_area_collapses_to_an_empty_square() {
        let target = timer_indicator(&reference_args(), Dp(f64::NAN), Dp(f64::INFINITY));
        assert_eq!(target.geometry.size, Dp::ZERO);
        assert_eq!(target.geometry.line_width, Dp(4.0));

        let idle = timer_indicator(&TimerIndicatorArgs::default(), Dp(300.0), Dp(300.0));
        let frame = sample_transition(&idle, &target, 0.3);
        assert!(frame.halo.rings.iter().all(|ring| {
            ring.center.x.0.is_finite() && ring.center.y.0.is_finite() && ring.diameter.0.is_finite()
        }));
    }

    #[test]
    fn pressed_button_layers_share_one_scale() {
        let visual = timer_indicator(
            &reference_args().primary_button_pressed(true),
            Dp(300.0),
            Dp(300.0),
        );
        let scales: Vec<(Dp, f32)> = visual
            .draw_commands()
            .iter()
            .filter_map(|command| match *command {
                DrawCommand::Shadow {
                    diameter, scale, ..
                }
                | DrawCommand::FillRadialGradientCircle {
                    diameter, scale, ..
                } => Some((diameter, scale)),
                DrawCommand::Label { scale, .. } => Some((visual.button.diameter, scale)),
                _ => None,
            })
            .collect();

        assert_eq!(scales.len(), 3);
        assert!(
            scales
                .iter()
                .all(|&(diameter, scale)| diameter == visual.button.diameter && scale == 0.92)
        );
    }

    #[test]
    fn degenerate_area_still_renders() {
        let visual = timer_indicator(&reference_args(), Dp(-20.0), Dp(0.0));
        assert_eq!(visual.button.diameter, Dp::ZERO);
        assert!(visual.halo.rings.iter().all(|ring| ring.diameter == Dp::ZERO));
        assert!(!visual.draw_commands().is_empty());
    }

    #[test]
    fn draw_order_is_back_to_front() {
        let visual = timer_indicator(&reference_args(), Dp(300.0), Dp(300.0));
        let commands = visual.draw_commands();

        // Duration ring: track, marker, arc, dot. Interval ring: track, arc, dot.
        // Button: shadow, disc, label. Halo: two rings.
        assert_eq!(commands.len(), 4 + 3 + 3 + 2);
        assert!(matches!(commands[0], DrawCommand::StrokeCircle { .. }));
        assert!(matches!(
            commands[2],
            DrawCommand::StrokeArc {
                cap: ArcCap::Round,
                ..
            }
        ));
        assert!(matches!(commands[7], DrawCommand::Shadow { .. }));
        assert!(matches!(
            commands[9],
            DrawCommand::Label { text: "Start", .. }
        ));
        assert!(matches!(commands[11], DrawCommand::HaloRing(HaloRing { .. })));
    }

    #[test]
    fn activation_callback_is_carried_through_args() {
        use std::sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        };

        use crate::primary_button::{PointerEvent, PrimaryButtonInteraction};

        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let args = reference_args().on_primary_action(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let mut interaction = PrimaryButtonInteraction::new();

        // Pulse phases keep alternating while the pointer is down.
        let mut visual = timer_indicator(&args, Dp(300.0), Dp(300.0));
        interaction.handle(
            PointerEvent::Press(visual.button.center),
            &visual.button,
            &args.on_primary_action,
        );
        for phase in [PulsePhase::None, PulsePhase::Breathing, PulsePhase::None] {
            let frame_args = args
                .clone()
                .pulse_phase(phase)
                .primary_button_pressed(interaction.is_pressed());
            visual = timer_indicator(&frame_args, Dp(300.0), Dp(300.0));
            assert_eq!(visual.button.press_scale, 0.92);
        }
        interaction.handle(
            PointerEvent::Release(visual.button.center),
            &visual.button,
            &args.on_primary_action,
        );

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn transition_starts_at_previous_and_settles_on_target() {
        let before = timer_indicator(
            &reference_args().duration_progress(0.5),
            Dp(300.0),
            Dp(300.0),
        );
        let after = timer_indicator(
            &reference_args()
                .duration_progress(0.6)
                .pulse_phase(PulsePhase::None),
            Dp(300.0),
            Dp(300.0),
        );

        let start = sample_transition(&before, &after, 0.0);
        assert_eq!(
            start.duration_ring.periodic_marker,
            before.duration_ring.periodic_marker
        );
        assert_eq!(start.halo.rings, before.halo.rings);
        assert_eq!(start.duration_ring.sweep, after.duration_ring.sweep);

        let midway = sample_transition(&before, &after, 0.125);
        let angle = midway
            .duration_ring
            .periodic_marker
            .map(|m| m.angle_degrees)
            .unwrap_or_default();
        assert!(angle > 0.0 && angle < 216.0);

        let settled = sample_transition(&before, &after, 2.0);
        assert_eq!(settled, after);
    }

    #[test]
    fn identical_inputs_are_bit_identical() {
        let args = reference_args();
        assert_eq!(
            timer_indicator(&args, Dp(280.0), Dp(320.0)),
            timer_indicator(&args, Dp(280.0), Dp(320.0))
        );
    }
}
