//! chimely-ui holds the renderer-agnostic primitives the timer indicator is
//! built from.
//!
//! # Overview
//!
//! - [`Color`] is a plain channel quadruple with linear interpolation, so
//!   gradient math never touches a platform color handle.
//! - [`Dp`] and [`DpPosition`] describe lengths and points in logical units.
//! - [`animation`] turns a pair of target values and an elapsed time into the
//!   value to draw this frame.
//! - [`Callback`] carries the host's activation handler.
//!
//! ```
//! use chimely_ui::Color;
//!
//! let start = Color::from_rgb(0.0, 0.0, 0.0);
//! let end = Color::from_rgb(1.0, 1.0, 1.0);
//! assert_eq!(start.midpoint(end), Color::from_rgb(0.5, 0.5, 0.5));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod color;
pub mod dp;
pub mod logging;
pub mod prop;

pub use crate::{
    animation::{AnimationSpec, Lerp, animate},
    color::Color,
    dp::{Dp, DpPosition},
    prop::Callback,
};
