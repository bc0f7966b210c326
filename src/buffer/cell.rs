//! Cell: The atomic unit of terminal display.
//!
//! # Memory Layout
//!
//! Glitch glyphs are always a single `char`, so the cell stores it directly
//! alongside its two colors:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Cell Layout (12 bytes)                      │
//! ├─────────────┬───────────┬───────────┬────────┤
//! │   glyph     │    fg     │    bg     │ padding│
//! │   char      │  [u8; 3]  │  [u8; 3]  │ 2 b    │
//! └─────────────┴───────────┴───────────┴────────┘
//! ```

/// True-color RGB representation.
///
/// Uses 3 bytes for 24-bit color depth. Palette entries, glyph colors and
/// the interpolated tween colors all live in this space.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse a CSS-style hex color.
    ///
    /// Accepts `#rrggbb` and the shorthand `#rgb`, with or without the
    /// leading `#`, in either case. Returns `None` for anything else.
    pub fn from_hex(input: &str) -> Option<Self> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, byte) in channels.iter_mut().zip(digits.bytes()) {
                    let nibble = hex_value(byte)?;
                    *slot = nibble << 4 | nibble;
                }
                Some(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_u32),
            _ => None,
        }
    }

    /// Linearly interpolate towards `to`.
    ///
    /// `t` is clamped to `[0, 1]`; each channel is rounded to the nearest
    /// integer, so `lerp(a, b, 1.0) == b` exactly.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            let from = f32::from(from);
            (from + (f32::from(to) - from) * t).round().clamp(0.0, 255.0) as u8
        };
        Self::new(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b))
    }

    /// Darken by a factor in `[0, 1]` (1 keeps the color, 0 is black).
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Self::BLACK.lerp(self, factor)
    }
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

/// A single terminal cell of the backing store.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The character shown in this cell.
    glyph: char,
    /// Foreground color.
    fg: Rgb,
    /// Background color.
    bg: Rgb,
}

const _: () = assert!(
    std::mem::size_of::<Cell>() == 12,
    "Cell must stay at 12 bytes"
);

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell: a space on the black background.
    pub const EMPTY: Self = Self {
        glyph: ' ',
        fg: Rgb::WHITE,
        bg: Rgb::BLACK,
    };

    /// Create a cell holding `glyph` with default colors.
    #[inline]
    pub const fn new(glyph: char) -> Self {
        Self {
            glyph,
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
        }
    }

    /// The character shown in this cell.
    #[inline]
    pub const fn glyph(&self) -> char {
        self.glyph
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Display width in columns (0 for control characters, 2 for wide glyphs).
    #[inline]
    pub fn display_width(&self) -> u8 {
        unicode_width::UnicodeWidthChar::width(self.glyph).map_or(0, |w| w as u8)
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Reset the cell to empty.
    #[inline]
    pub const fn reset(&mut self) {
        *self = Self::EMPTY;
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("glyph", &self.glyph)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .finish()
    }
}
