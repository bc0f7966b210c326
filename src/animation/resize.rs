//! Resize coordinator: debounces container size notifications.

use crate::layout::Viewport;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct Pending {
    viewport: Viewport,
    deadline: Instant,
}

/// Collapses a burst of resize notifications into one settled viewport.
///
/// Each notification pushes the deadline out to `quiet` after itself; the
/// viewport settles only once a full quiet period passes without another.
#[derive(Debug, Clone)]
pub struct ResizeCoordinator {
    quiet: Duration,
    pending: Option<Pending>,
}

impl ResizeCoordinator {
    /// Create a coordinator with the given quiet period.
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a new container size observed at `now`.
    pub fn notify(&mut self, viewport: Viewport, now: Instant) {
        self.pending = Some(Pending {
            viewport,
            deadline: now + self.quiet,
        });
    }

    /// When the pending resize will settle, if one is pending.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Whether a resize is waiting out its quiet period.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the settled viewport if the quiet period has elapsed.
    pub fn settle(&mut self, now: Instant) -> Option<Viewport> {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                Some(pending.viewport)
            }
            _ => None,
        }
    }

    /// Drop any pending resize. Idempotent.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
