//! # Glitchfield
//!
//! A decorative "glitch" background for true-color terminals.
//!
//! The screen is tiled with a grid of monospace glyphs. Every few frames a
//! small random subset of cells is reassigned a new glyph and a new palette
//! color; with smoothing enabled the color fades toward its target over
//! several frames instead of snapping.
//!
//! ## Core Concepts
//!
//! - **Glyph field**: one [`GlyphCell`] per slot, sized to cover the viewport
//! - **Glitch pass**: time-gated random reassignment ([`MutationEngine`])
//! - **Tweening**: per-frame color interpolation ([`ColorTweener`])
//! - **Surfaces**: the [`Surface`] trait decouples drawing from the host;
//!   [`TerminalSurface`] paints terminal cells, [`RecordingSurface`] records
//! - **Debounced resize**: a burst of size changes rebuilds the grid once
//!
//! ## Example
//!
//! ```rust
//! use glitchfield::{Animation, GlitchConfig, RecordingSurface, Size, Viewport};
//! use std::time::{Duration, Instant};
//!
//! let config = GlitchConfig::default().with_seed(7);
//! let mut animation = Animation::new(config).unwrap();
//! animation.attach(RecordingSurface::new());
//!
//! let t0 = Instant::now();
//! animation.mount(Viewport::new(Size::new(800.0, 600.0), 1.0), t0);
//! assert_eq!(animation.grid().columns, 80);
//!
//! let report = animation.frame(t0 + Duration::from_millis(50));
//! assert!(report.mutated && report.rendered);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod animation;
pub mod buffer;
pub mod config;
pub mod field;
pub mod glitch;
pub mod layout;
pub mod render;
pub mod terminal;

// Re-exports for convenience
pub use actor::{Engine, EngineConfig, InputEvent, KeyCode, KeyModifiers};
pub use animation::{Animation, FrameReport};
pub use buffer::{Buffer, Cell, Rgb};
pub use config::{ConfigError, GlitchConfig, Palette, DEFAULT_PALETTE};
pub use field::{GlyphCell, GlyphField, Grid, Pitch, ALPHABET};
pub use glitch::{ColorTweener, MutationEngine};
pub use layout::{Size, Viewport};
pub use render::{RecordingSurface, Renderer, Surface, Vignette};
pub use terminal::TerminalSurface;
