//! The central action button of the timer indicator.
//!
//! ## Usage
//!
//! The timer controller picks a [`PrimaryButtonState`] every frame; this
//! module turns it into a label, a radial gradient and press feedback, and
//! tracks pointer input so the action fires once per press-and-release.

use chimely_ui::{AnimationSpec, Callback, Color, Dp, DpPosition};
use tracing::debug;

use crate::{
    draw::{DropShadow, RadialGradient, three_stops},
    palette::TimerPalette,
};

/// What the central button offers to do next.
///
/// Transitions between states belong to the timer controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PrimaryButtonState {
    /// Start is offered but not armed.
    #[default]
    StartInactive,
    /// Start is armed.
    StartActive,
    /// The timer is running.
    Stop,
    /// Scheduling is offered but not armed.
    ScheduleInactive,
    /// Scheduling is armed.
    ScheduleActive,
}

impl PrimaryButtonState {
    /// Every state, in declaration order.
    pub const ALL: [PrimaryButtonState; 5] = [
        PrimaryButtonState::StartInactive,
        PrimaryButtonState::StartActive,
        PrimaryButtonState::Stop,
        PrimaryButtonState::ScheduleInactive,
        PrimaryButtonState::ScheduleActive,
    ];

    /// Button label.
    pub fn title(self) -> &'static str {
        match self {
            PrimaryButtonState::StartInactive | PrimaryButtonState::StartActive => "Start",
            PrimaryButtonState::Stop => "Stop",
            PrimaryButtonState::ScheduleInactive | PrimaryButtonState::ScheduleActive => {
                "Schedule"
            }
        }
    }

    /// Inner, middle and outer colors of the button's radial gradient.
    pub fn gradient(self, palette: &TimerPalette) -> [Color; 3] {
        match self {
            PrimaryButtonState::StartInactive | PrimaryButtonState::ScheduleInactive => {
                let base = palette.button_inactive;
                [base.with_alpha(0.8), base, base.with_alpha(0.9)]
            }
            PrimaryButtonState::StartActive => {
                let base = palette.button_start_active;
                [base.with_alpha(0.6), base, base.with_alpha(0.8)]
            }
            PrimaryButtonState::Stop => {
                let base = palette.button_stop;
                [base.with_alpha(0.6), base, base.with_alpha(0.75)]
            }
            PrimaryButtonState::ScheduleActive => [
                palette.button_schedule_active_top,
                palette.button_schedule_active_mid,
                palette.button_schedule_active_bottom,
            ],
        }
    }

    /// The button accepts activation in every state.
    pub fn is_interactable(self) -> bool {
        true
    }
}

/// Caller-driven phase of the breathing halo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PulsePhase {
    /// Halo at rest.
    #[default]
    None,
    /// Halo expanded and faded.
    Breathing,
}

/// Reference values for the primary button.
pub struct PrimaryButtonDefaults;

impl PrimaryButtonDefaults {
    /// Scale while a pointer is held down on the button.
    pub const PRESSED_SCALE: f32 = 0.92;
    /// Scale at rest.
    pub const RELEASED_SCALE: f32 = 1.0;
    /// Transition of the press scale.
    pub const PRESS_ANIMATION: AnimationSpec = AnimationSpec::Spring {
        response: 0.18,
        damping_fraction: 0.7,
    };
    /// Radial gradient start radius as a fraction of the diameter.
    pub const GRADIENT_START_RADIUS_RATIO: f64 = 0.1;
    /// Radial gradient end radius as a fraction of the diameter.
    pub const GRADIENT_END_RADIUS_RATIO: f64 = 0.5;
}

/// Target visual of the central button.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrimaryButtonVisual {
    /// State the visual was built from.
    pub state: PrimaryButtonState,
    /// Center of the button.
    pub center: DpPosition,
    /// Diameter before the press scale, may be zero.
    pub diameter: Dp,
    /// Label text.
    pub label: &'static str,
    /// Label color.
    pub label_color: Color,
    /// Disc fill.
    pub gradient: RadialGradient,
    /// Shadow under the disc.
    pub shadow: DropShadow,
    /// Press feedback scale applied to disc and label.
    pub press_scale: f32,
    /// Whether activation is accepted.
    pub interactable: bool,
}

impl PrimaryButtonVisual {
    /// Whether `point` falls on the button.
    ///
    /// A zero-size button never receives input.
    pub fn hit_test(&self, point: DpPosition) -> bool {
        let radius = self.diameter / 2.0;
        radius > Dp::ZERO && self.center.distance_to(point) <= radius
    }
}

/// Computes the target visual of the central button.
pub fn primary_button(
    state: PrimaryButtonState,
    center: DpPosition,
    diameter: Dp,
    pressed: bool,
    palette: &TimerPalette,
) -> PrimaryButtonVisual {
    let diameter = diameter.non_negative();
    let press_scale = if pressed {
        PrimaryButtonDefaults::PRESSED_SCALE
    } else {
        PrimaryButtonDefaults::RELEASED_SCALE
    };

    PrimaryButtonVisual {
        state,
        center,
        diameter,
        label: state.title(),
        label_color: palette.label_color,
        gradient: RadialGradient {
            center,
            start_radius: diameter * PrimaryButtonDefaults::GRADIENT_START_RADIUS_RATIO,
            end_radius: diameter * PrimaryButtonDefaults::GRADIENT_END_RADIUS_RATIO,
            stops: three_stops(state.gradient(palette)),
        },
        shadow: DropShadow {
            color: palette.shadow_color,
            radius: palette.shadow_radius,
            offset: palette.shadow_offset,
        },
        press_scale,
        interactable: state.is_interactable(),
    }
}

/// Pointer input delivered to the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A pointer went down at a position.
    Press(DpPosition),
    /// The pointer went up at a position.
    Release(DpPosition),
    /// The platform took the gesture away.
    Cancel,
}

/// Press tracking for the central button.
///
/// The action fires on release, and only when the release lands on the
/// button after a press that started there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrimaryButtonInteraction {
    pressed: bool,
}

impl PrimaryButtonInteraction {
    /// A tracker with no active press.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press is in progress, feed this back as the `pressed` input.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Applies `event` and runs `on_activate` when it completes an activation.
    ///
    /// Returns whether the callback ran.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        button: &PrimaryButtonVisual,
        on_activate: &Callback,
    ) -> bool {
        match event {
            PointerEvent::Press(position) => {
                self.pressed = button.interactable && button.hit_test(position);
                false
            }
            PointerEvent::Release(position) => {
                let was_pressed = std::mem::take(&mut self.pressed);
                if was_pressed && button.hit_test(position) {
                    debug!(state = ?button.state, "primary action activated");
                    on_activate.call();
                    true
                } else {
                    false
                }
            }
            PointerEvent::Cancel => {
                self.pressed = false;
                false
            }
        }
    }
}
