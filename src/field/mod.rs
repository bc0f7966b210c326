//! Field module: the cell model and its grid.
//!
//! A [`GlyphField`] owns a flat, row-major sequence of [`GlyphCell`]s sized
//! exactly `columns × rows`. Index `i` sits at `(i % columns, i / columns)`.
//! The sequence is rebuilt from scratch whenever the container size
//! settles; within a run cells are only ever mutated in place.

mod glyph;
mod grid;

pub use glyph::{random_glyph, GlyphCell, ALPHABET};
pub use grid::{Grid, Pitch};

use crate::config::Palette;
use crate::layout::Size;
use rand::Rng;

/// The glitch field: grid metadata plus one cell per slot.
#[derive(Debug, Clone)]
pub struct GlyphField {
    grid: Grid,
    cells: Vec<GlyphCell>,
}

impl GlyphField {
    /// An empty field with the given pitch.
    pub const fn new(pitch: Pitch) -> Self {
        Self {
            grid: Grid::empty(pitch),
            cells: Vec::new(),
        }
    }

    /// Resize the grid to cover `size` and repopulate every cell.
    ///
    /// The previous cells are discarded; each new one gets a random glyph,
    /// independently random initial and target colors, and no pending
    /// tween.
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, size: Size, palette: &Palette, rng: &mut R) {
        self.grid = Grid::covering(size, self.grid.pitch);
        let len = self.grid.len();
        self.cells = (0..len).map(|_| GlyphCell::random(rng, palette)).collect();

        tracing::debug!(
            columns = self.grid.columns,
            rows = self.grid.rows,
            cells = len,
            "glitch field reinitialized"
        );
    }

    /// Grid metadata.
    #[inline]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[GlyphCell] {
        &self.cells
    }

    /// Mutable access for the mutation and tween passes.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [GlyphCell] {
        &mut self.cells
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reinitialize_fills_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = GlyphField::new(Pitch::new(10.0, 20.0));
        field.reinitialize(Size::new(100.0, 40.0), &Palette::default(), &mut rng);

        assert_eq!(field.grid().columns, 10);
        assert_eq!(field.grid().rows, 2);
        assert_eq!(field.len(), 20);
        assert!(field.cells().iter().all(|c| !c.is_transitioning()));
    }

    #[test]
    fn test_reinitialize_same_size_keeps_dimensions() {
        let mut rng = StdRng::seed_from_u64(2);
        let palette = Palette::default();
        let mut field = GlyphField::new(Pitch::default());

        field.reinitialize(Size::new(640.0, 480.0), &palette, &mut rng);
        let first = *field.grid();
        field.reinitialize(Size::new(640.0, 480.0), &palette, &mut rng);

        assert_eq!(*field.grid(), first);
        assert_eq!(field.len(), first.len());
    }

    #[test]
    fn test_reinitialize_discards_previous_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let palette = Palette::default();
        let mut field = GlyphField::new(Pitch::default());

        field.reinitialize(Size::new(200.0, 200.0), &palette, &mut rng);
        field.cells_mut()[0].retarget('A', palette.colors()[0]);
        field.reinitialize(Size::new(50.0, 40.0), &palette, &mut rng);

        assert_eq!(field.len(), 5 * 2);
        assert!(field.cells().iter().all(|c| !c.is_transitioning()));
    }

    #[test]
    fn test_reinitialize_zero_size() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut field = GlyphField::new(Pitch::default());
        field.reinitialize(Size::new(300.0, 300.0), &Palette::default(), &mut rng);
        field.reinitialize(Size::ZERO, &Palette::default(), &mut rng);
        assert!(field.is_empty());
        assert!(field.grid().is_empty());
    }
}
