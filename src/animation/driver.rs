//! Loop driver: gates glitch passes by elapsed time.

use std::time::{Duration, Instant};

/// Run state of the per-frame loop.
///
/// The driver holds no frame source of its own: the host calls
/// [`crate::Animation::frame`] once per frame and the driver decides
/// whether this frame is due a glitch pass. Cancelling only flips the run
/// flag, so it is idempotent.
#[derive(Debug, Clone)]
pub struct LoopDriver {
    interval: Duration,
    last_mutation: Instant,
    running: bool,
}

impl LoopDriver {
    /// Create a stopped driver.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_mutation: Instant::now(),
            running: false,
        }
    }

    /// Start (or restart) the loop; the next pass is due one interval
    /// after `now`.
    pub fn start(&mut self, now: Instant) {
        self.last_mutation = now;
        self.running = true;
        tracing::debug!(interval_ms = self.interval.as_millis(), "glitch loop started");
    }

    /// Stop the loop. Stopping a stopped loop does nothing.
    pub fn cancel(&mut self) {
        if self.running {
            self.running = false;
            tracing::debug!("glitch loop cancelled");
        }
    }

    /// Whether the loop is running.
    #[inline]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Minimum time between passes.
    #[inline]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// When the last pass ran (or when the loop started).
    #[inline]
    pub const fn last_mutation(&self) -> Instant {
        self.last_mutation
    }

    /// Whether a pass is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.running && now.saturating_duration_since(self.last_mutation) >= self.interval
    }

    /// Record that a pass ran at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last_mutation = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_stopped_driver_is_never_due() {
        let driver = LoopDriver::new(50 * MS);
        assert!(!driver.is_running());
        assert!(!driver.is_due(Instant::now() + 10 * 50 * MS));
    }

    #[test]
    fn test_due_after_interval() {
        let t0 = Instant::now();
        let mut driver = LoopDriver::new(50 * MS);
        driver.start(t0);

        assert!(!driver.is_due(t0));
        assert!(!driver.is_due(t0 + 49 * MS));
        assert!(driver.is_due(t0 + 50 * MS));

        driver.mark(t0 + 60 * MS);
        assert!(!driver.is_due(t0 + 100 * MS));
        assert!(driver.is_due(t0 + 110 * MS));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let t0 = Instant::now();
        let mut driver = LoopDriver::new(50 * MS);
        driver.cancel();
        driver.start(t0);
        driver.cancel();
        driver.cancel();
        assert!(!driver.is_running());
        assert!(!driver.is_due(t0 + 500 * MS));
    }

    #[test]
    fn test_restart_resets_marker() {
        let t0 = Instant::now();
        let mut driver = LoopDriver::new(50 * MS);
        driver.start(t0);
        driver.cancel();
        driver.start(t0 + 200 * MS);
        assert_eq!(driver.last_mutation(), t0 + 200 * MS);
        assert!(!driver.is_due(t0 + 220 * MS));
    }
}
