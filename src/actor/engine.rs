//! Engine: runs a glitch animation as a full-screen terminal background.
//!
//! The engine owns the terminal (raw mode, alternate screen, hidden cursor),
//! spawns the input and ticker actors, and drives one [`Animation`] from a
//! single `select!` loop. All simulation and drawing happen on the thread
//! that calls [`Engine::run`].

use super::messages::InputEvent;
use super::ticker::{Tick, TickerActor};
use super::InputActor;
use crate::animation::Animation;
use crate::field::Pitch;
use crate::layout::Viewport;
use crate::terminal::{self as host, TerminalSurface};
use crossbeam_channel::{at, bounded, never, select, Receiver};
use crossterm::{
    cursor, execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::{Duration, Instant};

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(10),
            alternate_screen: true,
        }
    }
}

/// The terminal host for one glitch animation.
pub struct Engine {
    /// Configuration.
    config: EngineConfig,
    /// The animation being hosted.
    animation: Animation<TerminalSurface>,
    /// Glyph pitch, for viewport queries.
    pitch: Pitch,
    /// Input event receiver.
    input_rx: Receiver<InputEvent>,
    /// Frame clock receiver.
    tick_rx: Receiver<Tick>,
    /// Input actor handle.
    input_actor: Option<InputActor>,
    /// Ticker actor handle.
    ticker: Option<TickerActor>,
    /// Frames driven so far.
    frame_count: u64,
    /// Whether the engine is running.
    running: bool,
}

impl Engine {
    /// Take over the terminal and mount `animation` on it.
    ///
    /// The grid is sized and drawn before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen,
    /// size query).
    pub fn new(animation: Animation<TerminalSurface>, config: EngineConfig) -> io::Result<Self> {
        let pitch = animation.config().glyph_pitch;
        let frame_interval = animation.config().frame_interval;
        let viewport = host::current_viewport(pitch)?;

        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide, Clear(ClearType::All))?;

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let input_actor = InputActor::spawn(input_tx, config.input_poll_timeout);
        let ticker = TickerActor::spawn(frame_interval);
        let tick_rx = ticker.receiver().clone();

        let mut engine = Self {
            config,
            animation,
            pitch,
            input_rx,
            tick_rx,
            input_actor: Some(input_actor),
            ticker: Some(ticker),
            frame_count: 0,
            running: true,
        };

        engine.animation.attach(TerminalSurface::stdout(pitch));
        engine.animation.mount(viewport, Instant::now());
        tracing::info!(
            columns = engine.animation.grid().columns,
            rows = engine.animation.grid().rows,
            "engine started"
        );

        Ok(engine)
    }

    /// The hosted animation.
    pub const fn animation(&self) -> &Animation<TerminalSurface> {
        &self.animation
    }

    /// Check if the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the engine; [`Engine::run`] returns after the current event.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Get the number of frames driven so far.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run until a quit key is pressed or input shuts down.
    ///
    /// Dropped frames are logged, never returned.
    pub fn run(&mut self) {
        let input_rx = self.input_rx.clone();
        let tick_rx = self.tick_rx.clone();

        while self.running {
            let settle = self.animation.next_resize_deadline().map_or_else(never, at);

            select! {
                recv(input_rx) -> event => match event {
                    Ok(event) => self.handle_input(event),
                    Err(_) => self.running = false,
                },
                recv(tick_rx) -> tick => {
                    if let Ok(tick) = tick {
                        if tick.dropped > 0 {
                            tracing::trace!(dropped = tick.dropped, "frame clock fell behind");
                        }
                        self.animation.frame(tick.at);
                        self.frame_count += 1;
                    }
                },
                recv(settle) -> _ => {
                    self.animation.poll_resize(Instant::now());
                },
            }
        }

        self.animation.unmount();
        tracing::info!(frames = self.frame_count, "engine stopped");
    }

    /// React to one input event.
    fn handle_input(&mut self, event: InputEvent) {
        if event.is_quit() {
            self.running = false;
            return;
        }
        match event {
            InputEvent::Resize { width, height } => {
                let viewport = resized_viewport(width, height, self.pitch);
                self.animation.notify_resize(viewport, Instant::now());
            }
            InputEvent::Error(message) => {
                tracing::warn!(%message, "input error");
            }
            InputEvent::Shutdown => self.running = false,
            InputEvent::Key { .. } => {}
        }
    }
}

/// Viewport after a resize to `columns × rows`. The pixel size is re-queried
/// and only trusted when it describes the same cell grid.
fn resized_viewport(columns: u16, rows: u16, pitch: Pitch) -> Viewport {
    let pixel_width = match terminal::window_size() {
        Ok(size) if size.columns == columns && size.rows == rows => size.width,
        _ => 0,
    };
    host::viewport_for(columns, rows, pixel_width, pitch)
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.animation.unmount();

        // Stop actors
        if let Some(ticker) = self.ticker.take() {
            ticker.join();
        }
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        // Restore terminal state
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}
