//! Surface trait: the 2D drawing context the renderer paints onto.

use crate::buffer::Rgb;
use crate::layout::Viewport;
use std::io;

/// Where a glyph sits relative to its `y` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Baseline {
    /// `y` is the top of the glyph box.
    #[default]
    Top,
    /// `y` is the alphabetic baseline.
    Alphabetic,
}

/// Font used for every glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Font size in logical pixels.
    pub size_px: f32,
    /// Vertical anchoring.
    pub baseline: Baseline,
}

/// 16 px monospace, anchored at the top of the slot.
pub const GLYPH_FONT: FontSpec = FontSpec {
    size_px: 16.0,
    baseline: Baseline::Top,
};

/// A drawing surface with a backing store.
///
/// Coordinates passed to [`Surface::draw_glyph`] are logical pixels; the
/// surface owns the transform to its physical backing store.
pub trait Surface {
    /// Re-scale the backing store and coordinate transform for a viewport.
    fn configure(&mut self, viewport: Viewport);

    /// Select the font for subsequent glyph draws.
    fn set_font(&mut self, _font: FontSpec) {}

    /// Clear the whole surface to the background.
    fn clear(&mut self);

    /// Draw one glyph with its top-left corner at `(x, y)`.
    fn draw_glyph(&mut self, x: f32, y: f32, glyph: char, color: Rgb);

    /// Make the frame visible.
    fn present(&mut self) -> io::Result<()>;
}
