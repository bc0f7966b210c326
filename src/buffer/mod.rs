//! Buffer module: the terminal backing store.
//!
//! This module contains:
//! - [`Cell`]: One terminal cell (glyph plus colors)
//! - [`Buffer`]: A grid of cells representing the terminal screen
//! - [`Rgb`]: True-color representation, parsing and interpolation

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use cell::{Cell, Rgb};
pub use buffer::Buffer;
