//! Ticker Actor: the frame clock.
//!
//! Sends one [`Tick`] per frame interval. The engine treats each tick as one
//! animation frame, so simulation and drawing stay on the main thread. A
//! slow consumer never sees a backlog: ticks it could not take are counted
//! as dropped and the schedule skips ahead.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Longest single sleep, so shutdown is noticed promptly at low frame rates.
const MAX_SLEEP: Duration = Duration::from_millis(5);

/// One frame of the clock.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Frame number (monotonically increasing, counts dropped frames too).
    pub frame: u64,
    /// When the tick fired.
    pub at: Instant,
    /// Frames dropped since the previous delivered tick.
    pub dropped: u64,
}

/// Ticker actor that generates frame ticks.
pub struct TickerActor {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
    tick_rx: Receiver<Tick>,
}

impl TickerActor {
    /// Spawn a frame clock firing every `interval`.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the ticker thread.
    pub fn spawn(interval: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // One slot: a frame is either pending or it is not.
        let (tick_tx, tick_rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("glitchfield-ticker".to_string())
            .spawn(move || {
                let mut clock = FrameClock::new(interval, Instant::now());
                Self::run_loop(&tick_tx, &shutdown_clone, &mut clock);
            })
            .expect("Failed to spawn ticker thread");

        Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        }
    }

    /// The tick receiver, for use in `select!`.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(tick_tx: &Sender<Tick>, shutdown: &AtomicBool, clock: &mut FrameClock) {
        while !shutdown.load(Ordering::Relaxed) {
            let now = Instant::now();
            let Some(tick) = clock.poll(now) else {
                thread::sleep(clock.until_next(now).min(MAX_SLEEP));
                continue;
            };

            match tick_tx.try_send(tick) {
                Ok(()) => clock.delivered(),
                Err(TrySendError::Full(_)) => clock.missed(),
                Err(TrySendError::Disconnected(_)) => break,
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Fixed-rate schedule, independent of threads so it can be tested with
/// synthetic instants.
#[derive(Debug)]
struct FrameClock {
    interval: Duration,
    next: Instant,
    frame: u64,
    dropped: u64,
}

impl FrameClock {
    fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next: start + interval,
            frame: 0,
            dropped: 0,
        }
    }

    /// The tick due at `now`, if any. Advances the schedule; when more than
    /// one interval has been missed the schedule restarts from `now`.
    fn poll(&mut self, now: Instant) -> Option<Tick> {
        if now < self.next {
            return None;
        }
        let tick = Tick {
            frame: self.frame,
            at: now,
            dropped: self.dropped,
        };
        self.frame += 1;
        self.next += self.interval;
        if self.next <= now {
            let behind = now.duration_since(self.next).as_nanos() / self.interval.as_nanos().max(1);
            let skipped = u64::try_from(behind).unwrap_or(u64::MAX).saturating_add(1);
            self.frame = self.frame.saturating_add(skipped);
            self.dropped = self.dropped.saturating_add(skipped);
            self.next = now + self.interval;
        }
        Some(tick)
    }

    fn until_next(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    const fn delivered(&mut self) {
        self.dropped = 0;
    }

    const fn missed(&mut self) {
        self.dropped += 1;
    }
}
