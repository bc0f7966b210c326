//! Animation: one self-contained glitch background instance.
//!
//! An [`Animation`] owns its cells, its surface handle, its RNG and its
//! timers. Nothing is shared between instances and nothing is touched
//! from outside the instance, so no locking is involved: the host drives
//! it from a single thread by calling [`Animation::frame`] once per frame
//! and forwarding container size changes.
//!
//! ```text
//! notify_resize ─▶ ResizeCoordinator ─(quiet period)─▶ GlyphField::reinitialize
//!                                                          │
//! frame ─▶ LoopDriver ─▶ MutationEngine / ColorTweener ─▶ Renderer ─▶ Surface
//! ```

mod driver;
mod resize;

pub use driver::LoopDriver;
pub use resize::ResizeCoordinator;

use crate::config::{ConfigError, GlitchConfig};
use crate::field::{Grid, GlyphCell, GlyphField};
use crate::glitch::{ColorTweener, MutationEngine};
use crate::layout::Viewport;
use crate::render::{Renderer, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// What one loop iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// A glitch pass ran.
    pub mutated: bool,
    /// At least one tween advanced.
    pub tweened: bool,
    /// A frame was presented.
    pub rendered: bool,
}

/// A glitch background instance.
#[derive(Debug)]
pub struct Animation<S> {
    config: GlitchConfig,
    field: GlyphField,
    mutation: MutationEngine,
    tweener: ColorTweener,
    renderer: Renderer<S>,
    driver: LoopDriver,
    resize: ResizeCoordinator,
    rng: StdRng,
    mounted: bool,
    reinitializations: u64,
}

impl<S: Surface> Animation<S> {
    /// Build an instance from a configuration.
    pub fn new(config: GlitchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(Self {
            field: GlyphField::new(config.glyph_pitch),
            mutation: MutationEngine::new(config.mutation_fraction, config.smooth),
            tweener: ColorTweener::new(config.tween_step),
            renderer: Renderer::new(config.vignette),
            driver: LoopDriver::new(config.mutation_interval),
            resize: ResizeCoordinator::new(config.resize_quiet),
            rng,
            mounted: false,
            reinitializations: 0,
            config,
        })
    }

    /// Attach a drawing surface. Until one is attached, rendering is a no-op.
    pub fn attach(&mut self, surface: S) {
        self.renderer.attach(surface);
    }

    /// Detach the drawing surface.
    pub fn detach(&mut self) -> Option<S> {
        self.renderer.detach()
    }

    /// The attached surface.
    pub const fn surface(&self) -> Option<&S> {
        self.renderer.surface()
    }

    /// Mutable access to the attached surface.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.renderer.surface_mut()
    }

    /// The configuration this instance was built with.
    pub const fn config(&self) -> &GlitchConfig {
        &self.config
    }

    /// Current grid dimensions.
    pub const fn grid(&self) -> &Grid {
        self.field.grid()
    }

    /// Current cells in row-major order.
    pub fn cells(&self) -> &[GlyphCell] {
        self.field.cells()
    }

    /// Whether the frame loop is running.
    pub const fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Whether the instance is mounted.
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// How many times the grid has been rebuilt.
    pub const fn reinitializations(&self) -> u64 {
        self.reinitializations
    }

    /// When a pending resize will settle.
    pub fn next_resize_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    /// Size the grid for `viewport`, draw it once and start the loop.
    pub fn mount(&mut self, viewport: Viewport, now: Instant) {
        self.mounted = true;
        self.rebuild(viewport);
        self.driver.start(now);
    }

    /// Stop the loop and drop any pending resize. Idempotent.
    pub fn unmount(&mut self) {
        if self.mounted {
            tracing::debug!("glitch animation unmounted");
        }
        self.mounted = false;
        self.driver.cancel();
        self.resize.cancel();
    }

    /// Record a container size change. Ignored while unmounted.
    pub fn notify_resize(&mut self, viewport: Viewport, now: Instant) {
        if self.mounted {
            self.resize.notify(viewport, now);
        }
    }

    /// Apply a resize whose quiet period has elapsed by `now`.
    ///
    /// Returns whether the grid was rebuilt.
    pub fn poll_resize(&mut self, now: Instant) -> bool {
        let Some(viewport) = self.resize.settle(now) else {
            return false;
        };
        tracing::debug!(
            width = viewport.logical.width,
            height = viewport.logical.height,
            pixel_ratio = viewport.pixel_ratio,
            "resize settled"
        );
        self.driver.cancel();
        self.rebuild(viewport);
        self.driver.start(now);
        true
    }

    /// Run one loop iteration.
    ///
    /// A glitch pass runs when the interval has elapsed; the tween pass
    /// runs on every frame when smoothing is on. The field is repainted
    /// once if either changed anything.
    pub fn frame(&mut self, now: Instant) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.driver.is_running() {
            return report;
        }

        if self.driver.is_due(now) {
            self.mutation
                .pass(&mut self.field, &self.config.palette, &mut self.rng);
            self.driver.mark(now);
            report.mutated = true;
        }

        if self.mutation.smooth() {
            report.tweened = self.tweener.tick(&mut self.field);
        }

        if report.mutated || report.tweened {
            report.rendered = self.draw();
        }
        report
    }

    fn rebuild(&mut self, viewport: Viewport) {
        self.renderer.configure(viewport);
        self.field
            .reinitialize(viewport.logical, &self.config.palette, &mut self.rng);
        self.reinitializations += 1;
        self.draw();
    }

    fn draw(&mut self) -> bool {
        match self.renderer.render(&self.field) {
            Ok(presented) => presented,
            Err(e) => {
                tracing::warn!(error = %e, "frame dropped");
                false
            }
        }
    }
}
