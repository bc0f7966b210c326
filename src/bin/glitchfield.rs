//! `glitchfield`: run the glitch background in the current terminal.
//!
//! Press `q`, `Esc` or `Ctrl+C` to quit.

use clap::Parser;
use glitchfield::{Animation, Engine, EngineConfig, GlitchConfig, Palette, Vignette};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glitchfield", version)]
#[command(about = "A full-screen glyph glitch background for true-color terminals", long_about = None)]
struct Args {
    /// Palette color (#rgb or #rrggbb); repeat for more colors
    #[arg(long = "color", value_name = "HEX")]
    colors: Vec<String>,

    /// Minimum milliseconds between glitch passes
    #[arg(long, value_name = "MS", default_value_t = 50)]
    speed: u64,

    /// Snap colors instead of fading them
    #[arg(long)]
    no_smooth: bool,

    /// Darken toward the edges (on by default)
    #[arg(long, overrides_with = "no_outer_vignette")]
    outer_vignette: bool,

    /// Disable the edge darkening
    #[arg(long, overrides_with = "outer_vignette")]
    no_outer_vignette: bool,

    /// Darken the middle of the screen
    #[arg(long)]
    center_vignette: bool,

    /// Fixed RNG seed for a reproducible animation
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Write logs to this file (RUST_LOG overrides the default filter)
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

impl Args {
    fn glitch_config(&self) -> Result<GlitchConfig, glitchfield::ConfigError> {
        let mut config = GlitchConfig::default()
            .with_mutation_interval(Duration::from_millis(self.speed))
            .with_smooth(!self.no_smooth)
            .with_vignette(self.vignette())
            .with_frame_interval(Duration::from_secs(1) / self.fps);

        if !self.colors.is_empty() {
            config = config.with_palette(Palette::parse(&self.colors)?);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }

    fn vignette(&self) -> Vignette {
        let mut vignette = Vignette::empty();
        vignette.set(Vignette::OUTER, self.outer_vignette || !self.no_outer_vignette);
        vignette.set(Vignette::CENTER, self.center_vignette);
        vignette
    }
}

/// Install a file logger. Nothing is installed without `--log`, so the
/// terminal screen is never written to by the subscriber.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("glitchfield=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn restore_terminal_best_effort() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(
        stdout,
        crossterm::cursor::Show,
        crossterm::terminal::LeaveAlternateScreen
    );
    let _ = crossterm::terminal::disable_raw_mode();
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    let config = args
        .glitch_config()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let animation =
        Animation::new(config).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal_best_effort();
        default_hook(info);
    }));

    let mut engine = Engine::new(animation, EngineConfig::default())?;
    engine.run();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("glitchfield").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_match_library_defaults() {
        let config = parse(&[]).glitch_config().unwrap();
        let defaults = GlitchConfig::default();
        assert_eq!(config.mutation_interval, defaults.mutation_interval);
        assert_eq!(config.smooth, defaults.smooth);
        assert_eq!(config.vignette, Vignette::OUTER);
        assert_eq!(config.palette, defaults.palette);
        assert_eq!(config.frame_interval, Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_flags_map_onto_config() {
        let config = parse(&[
            "--color",
            "#fff",
            "--color",
            "ff0000",
            "--speed",
            "120",
            "--no-smooth",
            "--center-vignette",
            "--no-outer-vignette",
            "--seed",
            "9",
        ])
        .glitch_config()
        .unwrap();

        assert_eq!(config.palette.len(), 2);
        assert_eq!(config.mutation_interval, Duration::from_millis(120));
        assert!(!config.smooth);
        assert_eq!(config.vignette, Vignette::CENTER);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_last_vignette_flag_wins() {
        let args = parse(&["--no-outer-vignette", "--outer-vignette"]);
        assert!(args.vignette().contains(Vignette::OUTER));
    }

    #[test]
    fn test_bad_color_is_config_error() {
        let err = parse(&["--color", "nope"]).glitch_config().unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_zero_fps_rejected() {
        let argv = ["glitchfield", "--fps", "0"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
