//! `RecordingSurface`: an in-memory surface that remembers what was drawn.
//!
//! Used by tests and benchmarks in place of a real terminal.

use super::surface::{FontSpec, Surface};
use crate::buffer::Rgb;
use crate::layout::Viewport;
use std::io;

/// One recorded glyph draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphDraw {
    /// Logical x of the slot's top-left corner.
    pub x: f32,
    /// Logical y of the slot's top-left corner.
    pub y: f32,
    /// Glyph drawn.
    pub glyph: char,
    /// Color drawn with.
    pub color: Rgb,
}

/// Surface that records calls instead of painting.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    viewport: Option<Viewport>,
    backing: (u32, u32),
    font: Option<FontSpec>,
    /// Draws since the last clear.
    draws: Vec<GlyphDraw>,
    clears: usize,
    presents: usize,
    configures: usize,
    total_draws: usize,
    fail_present: bool,
}

impl RecordingSurface {
    /// Create an unconfigured surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `present` fail with an I/O error.
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.fail_present = true;
        self
    }

    /// Last viewport passed to `configure`.
    pub const fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Backing-store size in physical pixels.
    pub const fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    /// Last font selected.
    pub const fn font(&self) -> Option<FontSpec> {
        self.font
    }

    /// Glyph draws since the last clear.
    pub fn draws(&self) -> &[GlyphDraw] {
        &self.draws
    }

    /// Number of clears.
    pub const fn clears(&self) -> usize {
        self.clears
    }

    /// Number of presents.
    pub const fn presents(&self) -> usize {
        self.presents
    }

    /// Number of configures.
    pub const fn configures(&self) -> usize {
        self.configures
    }

    /// Glyph draws over the surface's lifetime.
    pub const fn total_draws(&self) -> usize {
        self.total_draws
    }
}

impl Surface for RecordingSurface {
    fn configure(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        self.backing = viewport.physical();
        self.configures += 1;
    }

    fn set_font(&mut self, font: FontSpec) {
        self.font = Some(font);
    }

    fn clear(&mut self) {
        self.draws.clear();
        self.clears += 1;
    }

    fn draw_glyph(&mut self, x: f32, y: f32, glyph: char, color: Rgb) {
        self.draws.push(GlyphDraw { x, y, glyph, color });
        self.total_draws += 1;
    }

    fn present(&mut self) -> io::Result<()> {
        if self.fail_present {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "surface detached"));
        }
        self.presents += 1;
        Ok(())
    }
}
