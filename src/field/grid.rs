//! Grid sizing: how many glyph slots cover a container.

use crate::layout::Size;

/// Glyph slot size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pitch {
    /// Slot width.
    pub width: f32,
    /// Slot height.
    pub height: f32,
}

impl Pitch {
    /// Create a pitch.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self::new(10.0, 20.0)
    }
}

/// Derived sizing metadata for a glitch field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Glyph columns.
    pub columns: usize,
    /// Glyph rows.
    pub rows: usize,
    /// Slot size.
    pub pitch: Pitch,
}

impl Grid {
    /// A grid with no cells.
    pub const fn empty(pitch: Pitch) -> Self {
        Self {
            columns: 0,
            rows: 0,
            pitch,
        }
    }

    /// Size a grid so it covers `size` completely.
    ///
    /// Partial slots at the right and bottom edges count, so
    /// `columns = ceil(width / pitch.width)` and likewise for rows.
    /// An empty or non-finite size yields an empty grid.
    pub fn covering(size: Size, pitch: Pitch) -> Self {
        if size.is_empty() || !size.width.is_finite() || !size.height.is_finite() {
            return Self::empty(pitch);
        }
        Self {
            columns: (size.width / pitch.width).ceil() as usize,
            rows: (size.height / pitch.height).ceil() as usize,
            pitch,
        }
    }

    /// Number of cells.
    #[inline]
    pub const fn len(&self) -> usize {
        self.columns * self.rows
    }

    /// Whether the grid has no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid position `(column, row)` of a flat index.
    #[inline]
    pub const fn position(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    /// Top-left corner of a slot in logical pixels.
    #[inline]
    pub fn origin_of(&self, index: usize) -> (f32, f32) {
        let (col, row) = self.position(index);
        (col as f32 * self.pitch.width, row as f32 * self.pitch.height)
    }
}
