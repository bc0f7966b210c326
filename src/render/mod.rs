//! Render module: projecting the glitch field onto a drawing surface.
//!
//! Every pass is a full repaint: clear, draw every cell at its slot, then
//! present. There is no dirty tracking; the field changes somewhere on
//! almost every frame anyway.

mod recording;
mod surface;
mod vignette;

pub use recording::{GlyphDraw, RecordingSurface};
pub use surface::{Baseline, FontSpec, Surface, GLYPH_FONT};
pub use vignette::Vignette;

use crate::field::GlyphField;
use crate::layout::Viewport;
use std::io;

/// Paints a [`GlyphField`] onto an optional surface.
///
/// Without a surface the renderer is "not ready" and every call is a no-op.
#[derive(Debug)]
pub struct Renderer<S> {
    surface: Option<S>,
    viewport: Viewport,
    vignette: Vignette,
}

impl<S: Surface> Renderer<S> {
    /// Create a renderer with no surface attached.
    pub fn new(vignette: Vignette) -> Self {
        Self {
            surface: None,
            viewport: Viewport::default(),
            vignette,
        }
    }

    /// Attach a surface, configuring it for the last known viewport.
    pub fn attach(&mut self, mut surface: S) {
        surface.configure(self.viewport);
        self.surface = Some(surface);
    }

    /// Detach and return the surface.
    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// The attached surface, if any.
    pub const fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access to the attached surface.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Whether a surface is attached.
    pub const fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    /// The viewport the surface was last configured for.
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Re-scale the surface's backing store for `viewport`.
    pub fn configure(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(surface) = self.surface.as_mut() {
            surface.configure(viewport);
        }
    }

    /// Repaint the whole field. Returns whether a frame was presented.
    pub fn render(&mut self, field: &GlyphField) -> io::Result<bool> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(false);
        };

        surface.clear();
        surface.set_font(GLYPH_FONT);

        let grid = field.grid();
        let (width, height) = (self.viewport.logical.width, self.viewport.logical.height);
        let (half_w, half_h) = (grid.pitch.width / 2.0, grid.pitch.height / 2.0);

        for (index, cell) in field.cells().iter().enumerate() {
            let (x, y) = grid.origin_of(index);
            let shade = self.vignette.factor(x + half_w, y + half_h, width, height);
            let color = if shade < 1.0 { cell.color().scale(shade) } else { cell.color() };
            surface.draw_glyph(x, y, cell.glyph(), color);
        }

        surface.present()?;
        Ok(true)
    }
}
