//! Configuration for a glitch animation instance.

use crate::buffer::Rgb;
use crate::field::Pitch;
use crate::render::Vignette;
use rand::Rng;
use std::fmt;
use std::time::Duration;

/// Default palette: dark green, mint and sky blue.
pub const DEFAULT_PALETTE: [&str; 3] = ["#2b4539", "#61dca3", "#61b3dc"];

/// Errors detected while building a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A palette entry is not a `#rgb` / `#rrggbb` color.
    InvalidColor {
        /// The offending input, as given.
        input: String,
    },
    /// The palette has no colors to draw from.
    EmptyPalette,
    /// A numeric parameter is out of range.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { input } => write!(f, "invalid palette color {input:?}"),
            Self::EmptyPalette => write!(f, "palette must contain at least one color"),
            Self::InvalidParameter { name, reason } => write!(f, "invalid {name}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A non-empty set of colors eligible as initial and target colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Build a palette from already-parsed colors.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Parse a palette from hex color strings.
    ///
    /// Fails on the first entry that does not parse; a bad color would
    /// otherwise corrupt every interpolation that touches it.
    pub fn parse<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = entries
            .into_iter()
            .map(|entry| {
                let entry = entry.as_ref();
                Rgb::from_hex(entry).ok_or_else(|| ConfigError::InvalidColor {
                    input: entry.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// The colors, in configuration order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of colors (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Pick a color uniformly at random.
    #[inline]
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        self.colors[rng.random_range(0..self.colors.len())]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE
                .iter()
                .filter_map(|hex| Rgb::from_hex(hex))
                .collect(),
        }
    }
}

/// Configuration for a glitch animation instance.
#[derive(Debug, Clone)]
pub struct GlitchConfig {
    /// Colors cells are drawn with.
    pub palette: Palette,
    /// Minimum time between glitch passes.
    pub mutation_interval: Duration,
    /// Tween colors instead of snapping them.
    pub smooth: bool,
    /// Static darkening overlays.
    pub vignette: Vignette,
    /// Glyph slot size in logical pixels.
    pub glyph_pitch: Pitch,
    /// Share of cells reassigned per glitch pass.
    pub mutation_fraction: f32,
    /// Tween progress added per frame.
    pub tween_step: f32,
    /// How long the container must stay unchanged before a resize applies.
    pub resize_quiet: Duration,
    /// Frame clock period used by the terminal host.
    pub frame_interval: Duration,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            mutation_interval: Duration::from_millis(50),
            smooth: true,
            vignette: Vignette::OUTER,
            glyph_pitch: Pitch::default(),
            mutation_fraction: 0.05,
            tween_step: 0.05,
            resize_quiet: Duration::from_millis(100),
            frame_interval: Duration::from_millis(16),
            seed: None,
        }
    }
}

impl GlitchConfig {
    /// Replace the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the glitch pass interval.
    #[must_use]
    pub const fn with_mutation_interval(mut self, interval: Duration) -> Self {
        self.mutation_interval = interval;
        self
    }

    /// Enable or disable color tweening.
    #[must_use]
    pub const fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Select the overlays.
    #[must_use]
    pub const fn with_vignette(mut self, vignette: Vignette) -> Self {
        self.vignette = vignette;
        self
    }

    /// Set the glyph pitch.
    #[must_use]
    pub const fn with_glyph_pitch(mut self, pitch: Pitch) -> Self {
        self.glyph_pitch = pitch;
        self
    }

    /// Set the frame clock period.
    #[must_use]
    pub const fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the numeric parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if !(self.glyph_pitch.width > 0.0 && self.glyph_pitch.height > 0.0)
            || !self.glyph_pitch.width.is_finite()
            || !self.glyph_pitch.height.is_finite()
        {
            return Err(ConfigError::InvalidParameter {
                name: "glyph_pitch",
                reason: "width and height must be positive",
            });
        }
        if !(self.mutation_fraction > 0.0 && self.mutation_fraction <= 1.0) {
            return Err(ConfigError::InvalidParameter {
                name: "mutation_fraction",
                reason: "must be in (0, 1]",
            });
        }
        if !(self.tween_step.is_finite() && self.tween_step > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "tween_step",
                reason: "must be a positive number",
            });
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::InvalidParameter {
                name: "frame_interval",
                reason: "must be non-zero",
            });
        }
        Ok(())
    }
}
