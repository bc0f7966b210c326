//! Mutation engine: the glitch pass.

use crate::config::Palette;
use crate::field::{random_glyph, GlyphField};
use rand::Rng;

/// Reassigns glyph and target color on a random subset of cells.
#[derive(Debug, Clone, Copy)]
pub struct MutationEngine {
    fraction: f32,
    smooth: bool,
}

impl MutationEngine {
    /// Create an engine touching `fraction` of the cells per pass.
    pub const fn new(fraction: f32, smooth: bool) -> Self {
        Self { fraction, smooth }
    }

    /// Whether passes start tweens (`true`) or snap colors.
    #[inline]
    pub const fn smooth(&self) -> bool {
        self.smooth
    }

    /// How many picks a pass makes over `cell_count` cells.
    ///
    /// Always at least one, so tiny grids still flicker.
    pub fn picks_for(&self, cell_count: usize) -> usize {
        ((cell_count as f64 * f64::from(self.fraction)).floor() as usize).max(1)
    }

    /// Run one glitch pass. Returns the number of picks made (0 for an
    /// empty field).
    ///
    /// Cells are drawn uniformly *with replacement*: a cell may be picked
    /// several times in one pass (the last assignment wins) while others
    /// are never touched. That unevenness is part of the look.
    pub fn pass<R: Rng + ?Sized>(
        &self,
        field: &mut GlyphField,
        palette: &Palette,
        rng: &mut R,
    ) -> usize {
        let len = field.len();
        if len == 0 {
            return 0;
        }

        let picks = self.picks_for(len);
        let cells = field.cells_mut();
        for _ in 0..picks {
            let index = rng.random_range(0..len);
            let glyph = random_glyph(rng);
            let target = palette.pick(rng);
            let cell = &mut cells[index];
            if self.smooth {
                cell.retarget(glyph, target);
            } else {
                cell.snap_to(glyph, target);
            }
        }

        tracing::trace!(picks, cells = len, smooth = self.smooth, "glitch pass");
        picks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Pitch;
    use crate::layout::Size;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(w: f32, h: f32, rng: &mut StdRng) -> GlyphField {
        let mut field = GlyphField::new(Pitch::new(10.0, 20.0));
        field.reinitialize(Size::new(w, h), &Palette::default(), rng);
        field
    }

    #[test]
    fn test_picks_for() {
        let engine = MutationEngine::new(0.05, true);
        assert_eq!(engine.picks_for(1), 1);
        assert_eq!(engine.picks_for(19), 1);
        assert_eq!(engine.picks_for(20), 1);
        assert_eq!(engine.picks_for(40), 2);
        assert_eq!(engine.picks_for(1000), 50);
        assert_eq!(engine.picks_for(1999), 99);
    }

    #[test]
    fn test_pass_on_empty_field() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut field = field(0.0, 0.0, &mut rng);
        let engine = MutationEngine::new(0.05, true);
        assert_eq!(engine.pass(&mut field, &Palette::default(), &mut rng), 0);
    }

    #[test]
    fn test_smooth_pass_starts_tweens_without_moving_color() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = field(800.0, 600.0, &mut rng);
        let before: Vec<_> = field.cells().to_vec();
        let palette = Palette::default();

        let engine = MutationEngine::new(0.05, true);
        let picks = engine.pass(&mut field, &palette, &mut rng);
        assert_eq!(picks, 120);

        let touched: Vec<_> = field
            .cells()
            .iter()
            .zip(&before)
            .filter(|(after, _)| after.is_transitioning())
            .collect();
        assert!(!touched.is_empty());
        assert!(touched.len() <= picks);
        for (after, before) in touched {
            assert!(after.progress().abs() < f32::EPSILON);
            assert_eq!(after.color(), before.color());
            assert!(palette.colors().contains(&after.target()));
        }
    }

    #[test]
    fn test_snap_pass_settles_immediately() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut field = field(800.0, 600.0, &mut rng);
        let before: Vec<_> = field.cells().to_vec();

        let engine = MutationEngine::new(0.05, false);
        engine.pass(&mut field, &Palette::default(), &mut rng);

        assert!(field.cells().iter().all(|c| !c.is_transitioning()));
        let changed = field
            .cells()
            .iter()
            .zip(&before)
            .filter(|(after, before)| after != before)
            .count();
        assert!(changed > 0);
        for (after, before) in field.cells().iter().zip(&before) {
            if after != before {
                assert_eq!(after.color(), after.target());
            }
        }
    }

    #[test]
    fn test_single_cell_grid_always_hit() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut field = field(5.0, 5.0, &mut rng);
        assert_eq!(field.len(), 1);

        let engine = MutationEngine::new(0.05, true);
        assert_eq!(engine.pass(&mut field, &Palette::default(), &mut rng), 1);
        assert!(field.cells()[0].is_transitioning());
    }
}
