//! Layout module: container geometry.
//!
//! The viewport is observed once at mount and again every time the
//! container settles after a resize. Nothing here is recomputed per frame.

mod viewport;

pub use viewport::{Size, Viewport};
