//! Viewport: the container size in logical and physical pixel space.

/// A size in logical (device-independent) pixels.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero-sized area.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Check if the area is empty (or not a usable number).
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl std::fmt::Debug for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Size({}x{})", self.width, self.height)
    }
}

/// The observed container: its logical size plus the device pixel ratio.
///
/// The logical size drives grid sizing; the physical size is what a surface
/// allocates for its backing store.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    /// Layout size in logical pixels.
    pub logical: Size,
    /// Physical pixels per logical pixel.
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::ZERO, 1.0)
    }
}

impl Viewport {
    /// Create a viewport. A ratio that is not a positive finite number is
    /// treated as 1.
    pub fn new(logical: Size, pixel_ratio: f32) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            logical,
            pixel_ratio,
        }
    }

    /// Backing-store size in physical pixels (rounded, never negative).
    pub fn physical(&self) -> (u32, u32) {
        let scale = |v: f32| (v.max(0.0) * self.pixel_ratio).round() as u32;
        (scale(self.logical.width), scale(self.logical.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(10.0, 0.0).is_empty());
        assert!(Size::new(f32::NAN, 5.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_viewport_physical_scales_by_ratio() {
        let vp = Viewport::new(Size::new(100.0, 40.0), 2.0);
        assert_eq!(vp.physical(), (200, 80));

        let vp = Viewport::new(Size::new(101.0, 41.0), 1.5);
        assert_eq!(vp.physical(), (152, 62));
    }

    #[test]
    fn test_viewport_rejects_bad_ratio() {
        assert!((Viewport::new(Size::ZERO, 0.0).pixel_ratio - 1.0).abs() < f32::EPSILON);
        assert!((Viewport::new(Size::ZERO, f32::NAN).pixel_ratio - 1.0).abs() < f32::EPSILON);
        assert!((Viewport::new(Size::ZERO, -2.0).pixel_ratio - 1.0).abs() < f32::EPSILON);
    }
}
