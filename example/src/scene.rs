use std::{fs, path::Path};

use chimely_components::{
    palette::TimerPalette,
    primary_button::{PrimaryButtonState, PulsePhase},
    timer_indicator::TimerIndicatorArgs,
};
use chimely_ui::Dp;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scene file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// One frame of timer state plus the area it is drawn into.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub duration_progress: f64,
    pub interval_progress: f64,
    pub total_duration: f64,
    pub chime_interval: f64,
    pub primary_button_state: PrimaryButtonState,
    pub should_breathe_primary_button: bool,
    pub pulse_phase: PulsePhase,
    pub primary_button_pressed: bool,
    pub palette: TimerPalette,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
            duration_progress: 0.0,
            interval_progress: 0.0,
            total_duration: 0.0,
            chime_interval: 0.0,
            primary_button_state: PrimaryButtonState::default(),
            should_breathe_primary_button: false,
            pulse_phase: PulsePhase::default(),
            primary_button_pressed: false,
            palette: TimerPalette::default(),
        }
    }
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: display.clone(),
            source,
        })?;
        Self::parse(&content).map_err(|source| SceneError::Parse {
            path: display,
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn area(&self) -> (Dp, Dp) {
        (Dp(self.width), Dp(self.height))
    }

    pub fn indicator_args(&self) -> TimerIndicatorArgs {
        TimerIndicatorArgs::default()
            .duration_progress(self.duration_progress)
            .interval_progress(self.interval_progress)
            .total_duration(self.total_duration)
            .chime_interval(self.chime_interval)
            .primary_button_state(self.primary_button_state)
            .should_breathe_primary_button(self.should_breathe_primary_button)
            .pulse_phase(self.pulse_phase)
            .primary_button_pressed(self.primary_button_pressed)
            .palette(self.palette)
            .on_primary_action(|| tracing::info!("primary action"))
    }
}
