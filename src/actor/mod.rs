//! Actor Model: the terminal runtime around an animation.
//!
//! Two helper threads feed the main loop over crossbeam channels:
//! - **Input Actor**: Polls terminal events (keys, resizes)
//! - **Ticker Actor**: The frame clock
//!
//! The **Engine** owns the animation and the terminal and consumes both
//! channels with `select!`, so the animation itself never crosses threads.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │    Engine    │──▶ Animation
//!                                      │  (select!)   │      │
//! ┌──────────────┐        Tick         │              │      ▼
//! │Ticker Thread │ ─────────────────▶  │              │   Terminal
//! └──────────────┘                     └──────────────┘
//! ```

mod engine;
mod input;
mod messages;
mod ticker;

pub use engine::{Engine, EngineConfig};
pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers};
pub use ticker::{Tick, TickerActor};
