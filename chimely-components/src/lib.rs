//! The dual-ring countdown indicator, computed as renderer-agnostic targets.
//!
//! # Usage
//!
//! Build a [`TimerIndicatorArgs`](timer_indicator::TimerIndicatorArgs) from
//! the timer's current state, compute the target visual for the available
//! area, then either draw its commands directly or blend from the previous
//! frame with [`sample_transition`](timer_indicator::sample_transition).
//!
//! ```
//! use chimely_components::{
//!     primary_button::PrimaryButtonState,
//!     timer_indicator::{TimerIndicatorArgs, sample_transition, timer_indicator},
//! };
//! use chimely_ui::Dp;
//!
//! let idle = timer_indicator(&TimerIndicatorArgs::default(), Dp(240.0), Dp(240.0));
//! let running = timer_indicator(
//!     &TimerIndicatorArgs::default()
//!         .duration_progress(0.1)
//!         .primary_button_state(PrimaryButtonState::Stop),
//!     Dp(240.0),
//!     Dp(240.0),
//! );
//!
//! let frame = sample_transition(&idle, &running, 0.1);
//! for command in frame.draw_commands() {
//!     // Hand each primitive to the renderer.
//!     let _ = command;
//! }
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod draw;
pub mod geometry;
pub mod halo;
pub mod palette;
pub mod primary_button;
pub mod ring;
pub mod timer_indicator;
