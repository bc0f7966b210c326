//! Glitch module: the two passes that change cell state.
//!
//! - [`MutationEngine`]: on a fixed cadence, reassigns glyph and target
//!   color on a random handful of cells
//! - [`ColorTweener`]: every frame, moves in-flight cells toward their target

mod mutation;
mod tween;

pub use mutation::MutationEngine;
pub use tween::ColorTweener;
