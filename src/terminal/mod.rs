//! Terminal host: frame encoding, the terminal surface, and viewport queries.

mod output;
mod surface;

pub use output::OutputBuffer;
pub use surface::{RenderStats, TerminalSurface};

use crate::field::Pitch;
use crate::layout::{Size, Viewport};
use crossterm::terminal;
use std::io;

/// Viewport of a terminal with `columns × rows` cells, one glyph slot per
/// cell. `pixel_width` is the window width in device pixels, or 0 when the
/// terminal does not report it.
pub fn viewport_for(columns: u16, rows: u16, pixel_width: u16, pitch: Pitch) -> Viewport {
    let logical = Size::new(
        f32::from(columns) * pitch.width,
        f32::from(rows) * pitch.height,
    );
    let ratio = if pixel_width > 0 && logical.width > 0.0 {
        f32::from(pixel_width) / logical.width
    } else {
        1.0
    };
    Viewport::new(logical, ratio)
}

/// Query the current terminal viewport.
///
/// Falls back to the plain cell count when the platform cannot report the
/// window's pixel size.
///
/// # Errors
///
/// Returns an error if the terminal size cannot be read at all.
pub fn current_viewport(pitch: Pitch) -> io::Result<Viewport> {
    match terminal::window_size() {
        Ok(size) if size.columns > 0 && size.rows > 0 => {
            Ok(viewport_for(size.columns, size.rows, size.width, pitch))
        }
        _ => {
            let (columns, rows) = terminal::size()?;
            Ok(viewport_for(columns, rows, 0, pitch))
        }
    }
}
