//! Color tweener: per-frame interpolation of pending transitions.

use crate::field::GlyphField;

/// Advances every in-flight transition by a fixed step per frame.
///
/// The step does not depend on frame duration, so the perceived tween
/// speed follows the frame rate.
#[derive(Debug, Clone, Copy)]
pub struct ColorTweener {
    step: f32,
}

impl ColorTweener {
    /// Create a tweener adding `step` progress per tick.
    pub const fn new(step: f32) -> Self {
        Self { step }
    }

    /// Progress added per tick.
    #[inline]
    pub const fn step(&self) -> f32 {
        self.step
    }

    /// Run one tick. Returns whether any cell changed.
    pub fn tick(&self, field: &mut GlyphField) -> bool {
        let mut changed = false;
        for cell in field.cells_mut() {
            changed |= cell.advance(self.step);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;
    use crate::config::Palette;
    use crate::field::Pitch;
    use crate::layout::Size;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settled_field() -> GlyphField {
        let mut rng = StdRng::seed_from_u64(21);
        let mut field = GlyphField::new(Pitch::new(10.0, 20.0));
        field.reinitialize(Size::new(100.0, 40.0), &Palette::default(), &mut rng);
        field
    }

    #[test]
    fn test_tick_on_settled_field_is_noop() {
        let mut field = settled_field();
        let before = field.cells().to_vec();
        assert!(!ColorTweener::new(0.05).tick(&mut field));
        assert_eq!(field.cells(), before.as_slice());
    }

    #[test]
    fn test_three_ticks_reach_point_fifteen() {
        let mut field = settled_field();
        field.cells_mut()[3].retarget('X', Rgb::new(0x61, 0xdc, 0xa3));

        let tweener = ColorTweener::new(0.05);
        for _ in 0..3 {
            assert!(tweener.tick(&mut field));
        }

        let cell = field.cells()[3];
        assert!((cell.progress() - 0.15).abs() < 1e-5);
        assert!(cell.is_transitioning());
    }

    #[test]
    fn test_progress_is_monotonic_and_converges() {
        let mut field = settled_field();
        let from = Rgb::new(0, 0, 0);
        let to = Rgb::new(255, 128, 7);
        field.cells_mut()[0] = crate::field::GlyphCell::settled('A', from, from);
        field.cells_mut()[0].retarget('B', to);

        let tweener = ColorTweener::new(0.05);
        let mut last = field.cells()[0].progress();
        let mut ticks = 0;
        while field.cells()[0].is_transitioning() {
            assert!(tweener.tick(&mut field));
            let now = field.cells()[0].progress();
            assert!(now > last);
            assert!(now <= 1.0);
            last = now;
            ticks += 1;
            assert!(ticks <= 21, "tween did not converge");
        }

        assert!(ticks >= 20);
        // No drift: the final color is exactly the target.
        assert_eq!(field.cells()[0].color(), to);
        assert!(!tweener.tick(&mut field));
    }

    #[test]
    fn test_large_step_clamps() {
        let mut field = settled_field();
        field.cells_mut()[1].retarget('B', Rgb::WHITE);
        ColorTweener::new(3.0).tick(&mut field);
        let cell = field.cells()[1];
        assert!((cell.progress() - 1.0).abs() < f32::EPSILON);
        assert_eq!(cell.color(), Rgb::WHITE);
    }
}
