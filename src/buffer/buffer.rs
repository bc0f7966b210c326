//! Buffer: A grid of cells backing the terminal surface.
//!
//! The buffer uses contiguous memory allocation for cache efficiency.
//! Cells are stored in row-major order.

use super::cell::Cell;

/// A grid of cells representing the terminal screen.
///
/// Access is in row-major order: `index = y * width + x`. Unlike a layout
/// buffer, a zero-sized buffer is valid: it is what a zero-area terminal
/// window maps to.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

impl Buffer {
    /// Create a new buffer with the given dimensions, filled with empty cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub const fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Clear the entire buffer (fill with empty cells).
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Reallocate the buffer at a new size.
    ///
    /// Content is discarded: every cell of the new buffer is empty.
    pub fn reset_to(&mut self, new_width: u16, new_height: u16) {
        let new_size = (new_width as usize) * (new_height as usize);
        self.cells.clear();
        self.cells.resize(new_size, Cell::EMPTY);
        self.width = new_width;
        self.height = new_height;
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; an empty buffer simply has no rows.
        self.cells.chunks(self.width.max(1) as usize)
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;

    #[test]
    fn test_buffer_new() {
        let buffer = Buffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.len(), 80 * 24);
    }

    #[test]
    fn test_buffer_zero_size_is_valid() {
        let buffer = Buffer::new(0, 24);
        assert!(buffer.is_empty());
        assert_eq!(buffer.rows().count(), 0);
        assert!(buffer.get(0, 0).is_none());
    }

    #[test]
    fn test_buffer_get_set() {
        let mut buffer = Buffer::new(80, 24);
        assert!(buffer.set(5, 10, Cell::new('X')));
        assert_eq!(buffer.get(5, 10).unwrap().glyph(), 'X');
        assert!(!buffer.set(80, 0, Cell::new('Y')));
    }

    #[test]
    fn test_buffer_bounds() {
        let buffer = Buffer::new(80, 24);
        assert!(buffer.get(79, 23).is_some());
        assert!(buffer.get(80, 23).is_none());
        assert!(buffer.get(79, 24).is_none());
        assert_eq!(buffer.index_of(5, 10), Some(10 * 80 + 5));
    }

    #[test]
    fn test_buffer_clear() {
        let mut buffer = Buffer::new(10, 10);
        buffer.set(5, 5, Cell::new('X').with_fg(Rgb::new(1, 2, 3)));
        buffer.clear();
        assert_eq!(buffer.get(5, 5), Some(&Cell::EMPTY));
    }

    #[test]
    fn test_buffer_reset_to_discards_content() {
        let mut buffer = Buffer::new(10, 10);
        buffer.set(1, 1, Cell::new('X'));

        buffer.reset_to(20, 5);
        assert_eq!(buffer.width(), 20);
        assert_eq!(buffer.height(), 5);
        assert_eq!(buffer.len(), 100);
        assert!(buffer.cells().iter().all(|c| *c == Cell::EMPTY));
    }

    #[test]
    fn test_buffer_rows() {
        let buffer = Buffer::new(4, 3);
        let rows: Vec<_> = buffer.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 4));
    }
}
