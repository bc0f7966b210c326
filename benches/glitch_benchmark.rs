//! Glitch benchmark: one frame's worth of work over a 200x60 grid.
//!
//! Target: a full frame (pass + tween + render) well under the 16ms budget

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glitchfield::{
    ColorTweener, GlyphField, MutationEngine, Palette, Pitch, RecordingSurface, Renderer, Size,
    Surface, TerminalSurface, Viewport, Vignette,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const COLUMNS: f32 = 200.0;
const ROWS: f32 = 60.0;

fn viewport() -> Viewport {
    let pitch = Pitch::default();
    Viewport::new(Size::new(COLUMNS * pitch.width, ROWS * pitch.height), 1.0)
}

fn field(rng: &mut StdRng) -> GlyphField {
    let mut field = GlyphField::new(Pitch::default());
    field.reinitialize(viewport().logical, &Palette::default(), rng);
    field
}

fn glitch_pass(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let palette = Palette::default();
    let mut field = field(&mut rng);
    let engine = MutationEngine::new(0.05, true);

    c.bench_function("glitch_pass_200x60", |b| {
        b.iter(|| engine.pass(black_box(&mut field), &palette, &mut rng))
    });
}

fn tween_tick(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let palette = Palette::default();
    let mut field = field(&mut rng);
    let engine = MutationEngine::new(1.0, true);
    let tweener = ColorTweener::new(0.05);

    c.bench_function("tween_tick_200x60", |b| {
        b.iter(|| {
            // Keep every cell in flight so each tick does real work
            engine.pass(&mut field, &palette, &mut rng);
            tweener.tick(black_box(&mut field))
        })
    });
}

fn render_recording(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let field = field(&mut rng);
    let mut renderer = Renderer::new(Vignette::OUTER | Vignette::CENTER);
    renderer.attach(RecordingSurface::new());
    renderer.configure(viewport());

    c.bench_function("render_recording_200x60", |b| {
        b.iter(|| renderer.render(black_box(&field)))
    });
}

fn render_terminal(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let field = field(&mut rng);
    let mut renderer = Renderer::new(Vignette::OUTER);
    renderer.attach(TerminalSurface::new(std::io::sink(), Pitch::default()));
    renderer.configure(viewport());

    c.bench_function("render_terminal_200x60", |b| {
        b.iter(|| renderer.render(black_box(&field)))
    });

    let stats = renderer.surface().map(|s| s.stats().clone());
    if let Some(stats) = stats {
        println!(
            "terminal frames: {}, bytes/frame: {}",
            stats.frames,
            stats.bytes_written / stats.frames.max(1)
        );
    }
}

fn surface_clear(c: &mut Criterion) {
    let mut surface = TerminalSurface::new(std::io::sink(), Pitch::default());
    surface.configure(viewport());

    c.bench_function("terminal_clear_200x60", |b| b.iter(|| surface.clear()));
}

criterion_group!(
    benches,
    glitch_pass,
    tween_tick,
    render_recording,
    render_terminal,
    surface_clear,
);
criterion_main!(benches);
