//! Snapshot demo: run a seeded animation headless and print the screen a
//! terminal would show after one second.
//!
//! ```sh
//! cargo run --example snapshot
//! ```

use glitchfield::{Animation, GlitchConfig, TerminalSurface, Vignette};
use std::time::{Duration, Instant};

const COLUMNS: u16 = 60;
const ROWS: u16 = 16;

fn main() {
    let config = GlitchConfig::default()
        .with_seed(2024)
        .with_vignette(Vignette::OUTER | Vignette::CENTER);
    let pitch = config.glyph_pitch;
    let frame = config.frame_interval;

    let mut animation = match Animation::new(config) {
        Ok(animation) => animation,
        Err(e) => {
            eprintln!("bad config: {e}");
            return;
        }
    };
    animation.attach(TerminalSurface::new(Vec::new(), pitch));

    let t0 = Instant::now();
    animation.mount(
        glitchfield::terminal::viewport_for(COLUMNS, ROWS, 0, pitch),
        t0,
    );

    let mut mutations = 0;
    let mut now = t0;
    while now < t0 + Duration::from_secs(1) {
        now += frame;
        if animation.frame(now).mutated {
            mutations += 1;
        }
    }

    let Some(surface) = animation.detach() else {
        return;
    };
    let mut parser = vt100::Parser::new(ROWS, COLUMNS, 0);
    parser.process(surface.writer());

    println!("{}", parser.screen().contents());
    println!(
        "{mutations} glitch passes, {} frames presented, {} bytes written",
        surface.stats().frames,
        surface.stats().bytes_written
    );
}
