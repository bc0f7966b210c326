//! Vignette: static radial darkening composited over the glyphs.
//!
//! Both overlays are circles centered on the surface whose radius reaches
//! the farthest corner:
//!
//! - outer: transparent up to 60% of the radius, ramping to opaque black at 100%
//! - center: 80% black at the center, ramping to transparent at 60%

use bitflags::bitflags;

bitflags! {
    /// Which overlays are composited.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Vignette: u8 {
        /// Darken toward the edges.
        const OUTER = 0b0000_0001;
        /// Darken the center.
        const CENTER = 0b0000_0010;
    }
}

impl std::fmt::Debug for Vignette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

const OUTER_START: f32 = 0.6;
const CENTER_END: f32 = 0.6;
const CENTER_ALPHA: f32 = 0.8;

impl Vignette {
    /// Brightness factor in `[0, 1]` at `(x, y)` on a `width × height`
    /// surface. 1 means untouched.
    pub fn factor(self, x: f32, y: f32, width: f32, height: f32) -> f32 {
        if self.is_empty() || !(width > 0.0 && height > 0.0) {
            return 1.0;
        }

        let (cx, cy) = (width / 2.0, height / 2.0);
        let radius = cx.hypot(cy);
        let t = ((x - cx).hypot(y - cy) / radius).clamp(0.0, 1.0);

        let mut factor = 1.0;
        if self.contains(Self::OUTER) && t > OUTER_START {
            factor *= 1.0 - (t - OUTER_START) / (1.0 - OUTER_START);
        }
        if self.contains(Self::CENTER) && t < CENTER_END {
            factor *= 1.0 - CENTER_ALPHA * (1.0 - t / CENTER_END);
        }
        factor.clamp(0.0, 1.0)
    }
}
