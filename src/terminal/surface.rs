//! `TerminalSurface`: paints glyph slots onto terminal cells.
//!
//! The backing store is a cell [`Buffer`] with one terminal cell per glyph
//! slot. Every present encodes the whole buffer as ANSI sequences in one
//! [`OutputBuffer`] and writes it with a single syscall.

use super::output::OutputBuffer;
use crate::buffer::{Buffer, Cell, Rgb};
use crate::field::Pitch;
use crate::layout::Viewport;
use crate::render::Surface;
use std::io::{self, Stdout, Write};
use std::time::Instant;

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    /// Total frames presented.
    pub frames: u64,
    /// Total bytes written to the terminal.
    pub bytes_written: u64,
    /// Average encode+write time in microseconds.
    pub avg_render_us: u64,
    /// Last encode+write time in microseconds.
    pub last_render_us: u64,
}

/// A [`Surface`] backed by a true-color terminal.
pub struct TerminalSurface<W: Write = Stdout> {
    /// Backing store, one cell per glyph slot.
    buffer: Buffer,
    /// Logical pixels covered by one terminal cell.
    pitch: Pitch,
    /// Pre-allocated frame encoding buffer.
    output: OutputBuffer,
    /// Destination of encoded frames.
    writer: W,
    /// Render statistics.
    stats: RenderStats,
}

impl TerminalSurface<Stdout> {
    /// A surface writing to standard output.
    pub fn stdout(pitch: Pitch) -> Self {
        Self::new(io::stdout(), pitch)
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Create a surface writing frames to `writer`.
    pub fn new(writer: W, pitch: Pitch) -> Self {
        Self {
            buffer: Buffer::new(0, 0),
            pitch,
            output: OutputBuffer::new(),
            writer,
            stats: RenderStats::default(),
        }
    }

    /// The backing store.
    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Render statistics.
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// The frame destination.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the surface, returning the frame destination.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Terminal cell containing logical point `(x, y)`.
    fn cell_at(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let col = (x / self.pitch.width).floor();
        let row = (y / self.pitch.height).floor();
        if col > f32::from(u16::MAX) || row > f32::from(u16::MAX) {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// Encode the backing store as one full-screen frame.
    fn encode_frame(&mut self) {
        self.output.clear();
        self.output.begin_sync();
        self.output.cursor_hide();
        self.output.reset_attrs();

        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;

        for (y, row) in self.buffer.rows().enumerate() {
            self.output.cursor_move(0, y as u16);
            for cell in row {
                if last_fg != Some(cell.fg()) {
                    self.output.set_fg(cell.fg());
                    last_fg = Some(cell.fg());
                }
                if last_bg != Some(cell.bg()) {
                    self.output.set_bg(cell.bg());
                    last_bg = Some(cell.bg());
                }
                if cell.display_width() == 1 {
                    self.output.write_char(cell.glyph());
                } else {
                    self.output.write_char(' ');
                }
            }
        }

        self.output.reset_attrs();
        self.output.end_sync();
    }
}

fn cells_covering(extent: f32, pitch: f32) -> u16 {
    if extent > 0.0 && extent.is_finite() {
        (extent / pitch).ceil().min(f32::from(u16::MAX)) as u16
    } else {
        0
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn configure(&mut self, viewport: Viewport) {
        // Terminal cells are the physical unit; the pixel ratio only
        // matters for how sharp the terminal draws them.
        let columns = cells_covering(viewport.logical.width, self.pitch.width);
        let rows = cells_covering(viewport.logical.height, self.pitch.height);
        self.buffer.reset_to(columns, rows);
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn draw_glyph(&mut self, x: f32, y: f32, glyph: char, color: Rgb) {
        if let Some((col, row)) = self.cell_at(x, y) {
            self.buffer.set(col, row, Cell::new(glyph).with_fg(color));
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let start = Instant::now();
        self.encode_frame();
        self.output.flush_to(&mut self.writer)?;

        let elapsed = start.elapsed();
        self.stats.frames += 1;
        self.stats.bytes_written += self.output.len() as u64;
        self.stats.last_render_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);

        // Smoothed average
        if self.stats.avg_render_us == 0 {
            self.stats.avg_render_us = self.stats.last_render_us;
        } else {
            self.stats.avg_render_us =
                (self.stats.avg_render_us * 15 + self.stats.last_render_us) / 16;
        }

        Ok(())
    }
}

impl<W: Write> std::fmt::Debug for TerminalSurface<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSurface")
            .field("buffer", &self.buffer)
            .field("pitch", &self.pitch)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Size;

    fn surface(columns: u16, rows: u16) -> TerminalSurface<Vec<u8>> {
        let pitch = Pitch::default();
        let mut surface = TerminalSurface::new(Vec::new(), pitch);
        surface.configure(Viewport::new(
            Size::new(f32::from(columns) * pitch.width, f32::from(rows) * pitch.height),
            2.0,
        ));
        surface
    }

    fn screen(bytes: &[u8], columns: u16, rows: u16) -> vt100::Parser {
        let mut parser = vt100::Parser::new(rows, columns, 0);
        parser.process(bytes);
        parser
    }

    #[test]
    fn test_configure_maps_slots_to_cells() {
        let surface = surface(80, 24);
        assert_eq!(surface.buffer().width(), 80);
        assert_eq!(surface.buffer().height(), 24);
    }

    #[test]
    fn test_draw_glyph_lands_in_slot_cell() {
        let mut surface = surface(10, 2);
        surface.draw_glyph(30.0, 20.0, 'Q', Rgb::new(1, 2, 3));
        let cell = surface.buffer().get(3, 1).unwrap();
        assert_eq!(cell.glyph(), 'Q');
        assert_eq!(cell.fg(), Rgb::new(1, 2, 3));

        // Off-surface draws are dropped.
        surface.draw_glyph(-5.0, 0.0, 'X', Rgb::WHITE);
        surface.draw_glyph(1000.0, 0.0, 'X', Rgb::WHITE);
        assert!(surface.buffer().cells().iter().all(|c| c.glyph() != 'X'));
    }

    #[test]
    fn test_present_shows_glyphs_in_true_color() {
        let mut surface = surface(10, 2);
        let green = Rgb::new(0x61, 0xdc, 0xa3);
        surface.clear();
        surface.draw_glyph(0.0, 0.0, 'A', green);
        surface.draw_glyph(90.0, 20.0, '}', green);
        surface.present().unwrap();

        let parser = screen(surface.writer(), 10, 2);
        let screen = parser.screen();
        assert_eq!(screen.cell(0, 0).unwrap().contents(), "A");
        assert_eq!(screen.cell(1, 9).unwrap().contents(), "}");
        assert_eq!(
            screen.cell(0, 0).unwrap().fgcolor(),
            vt100::Color::Rgb(0x61, 0xdc, 0xa3)
        );
        assert_eq!(screen.cell(0, 0).unwrap().bgcolor(), vt100::Color::Rgb(0, 0, 0));
        assert!(screen.hide_cursor());
    }

    #[test]
    fn test_clear_blanks_previous_frame() {
        let mut surface = surface(4, 1);
        surface.draw_glyph(0.0, 0.0, 'Z', Rgb::WHITE);
        surface.present().unwrap();
        surface.clear();
        surface.present().unwrap();

        let parser = screen(surface.writer(), 4, 1);
        assert_eq!(parser.screen().contents().trim(), "");
        assert_eq!(surface.stats().frames, 2);
    }

    #[test]
    fn test_empty_surface_presents_without_glyphs() {
        let mut surface = surface(0, 0);
        surface.clear();
        surface.present().unwrap();
        assert!(surface.buffer().is_empty());
        assert!(!surface.writer().is_empty());
    }
}
