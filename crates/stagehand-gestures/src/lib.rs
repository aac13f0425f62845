//! Gesture layer for Stagehand.
//!
//! Turns normalized actions into concrete pointer-event sequences:
//!
//! - [`GridMapper`] - 0-1000 logical grid to device pixels
//! - [`synth`] - pure gesture construction (tap, swipe, pinch, rotate, ...)
//! - [`ActionExecutor`] - dispatches actions against a device session

mod executor;
mod grid;
pub mod synth;

pub use executor::ActionExecutor;
pub use grid::{clamp_grid, GridMapper};
