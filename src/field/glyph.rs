//! Glyph cells: the per-position state of the glitch field.

use crate::buffer::Rgb;
use crate::config::Palette;
use rand::Rng;

/// Characters a cell may show.
///
/// `}` is listed twice, which makes it twice as likely as any other glyph.
pub const ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', //
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', //
    '!', '@', '#', '$', '&', '*', '(', '}', ')', '-', '_', '+', '=', '/', //
    '[', ']', '{', '}', ';', ':', '<', '>', ',', '0', '1', '2', '3', //
    '4', '5', '6', '7', '8', '9',
];

/// Pick a glyph uniformly from [`ALPHABET`].
#[inline]
pub fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())]
}

/// One grid position.
///
/// `origin` is the color the current transition started from. Tweening
/// always interpolates `origin -> target`, never from the already-moved
/// `color`, so repeated ticks do not drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphCell {
    glyph: char,
    color: Rgb,
    origin: Rgb,
    target: Rgb,
    progress: f32,
}

impl GlyphCell {
    /// A settled cell: no transition pending.
    pub const fn settled(glyph: char, color: Rgb, target: Rgb) -> Self {
        Self {
            glyph,
            color,
            origin: color,
            target,
            progress: 1.0,
        }
    }

    /// A fresh cell with a random glyph and independently drawn initial
    /// and target colors.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, palette: &Palette) -> Self {
        let glyph = random_glyph(rng);
        let color = palette.pick(rng);
        let target = palette.pick(rng);
        Self::settled(glyph, color, target)
    }

    /// The glyph shown.
    #[inline]
    pub const fn glyph(&self) -> char {
        self.glyph
    }

    /// The displayed color.
    #[inline]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// The color the current transition started from.
    #[inline]
    pub const fn origin(&self) -> Rgb {
        self.origin
    }

    /// The color being transitioned toward.
    #[inline]
    pub const fn target(&self) -> Rgb {
        self.target
    }

    /// Transition progress in `[0, 1]`.
    #[inline]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether a tween is in flight.
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.progress < 1.0
    }

    /// Assign a new glyph and target and jump straight to it.
    pub const fn snap_to(&mut self, glyph: char, target: Rgb) {
        self.glyph = glyph;
        self.target = target;
        self.color = target;
        self.origin = target;
        self.progress = 1.0;
    }

    /// Assign a new glyph and target and start tweening from the color
    /// currently displayed.
    pub const fn retarget(&mut self, glyph: char, target: Rgb) {
        self.glyph = glyph;
        self.target = target;
        self.origin = self.color;
        self.progress = 0.0;
    }

    /// Advance the tween by `step`.
    ///
    /// Returns `false` (and changes nothing) when no tween is pending.
    pub fn advance(&mut self, step: f32) -> bool {
        if !self.is_transitioning() {
            return false;
        }
        self.progress = (self.progress + step).min(1.0);
        self.color = self.origin.lerp(self.target, self.progress);
        if !self.is_transitioning() {
            self.origin = self.target;
        }
        true
    }
}
