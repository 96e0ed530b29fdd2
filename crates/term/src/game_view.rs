//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, Phase, BOARD_HEIGHT, BOARD_WIDTH};

/// Side of the square next-piece preview, in board cells
const PREVIEW_CELLS: u16 = 4;

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Terminal renderer for the playfield, next-piece preview and status panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Where the board frame lands inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        for y in 0..BOARD_HEIGHT as i32 {
            for x in 0..BOARD_WIDTH as i32 {
                let (ch, style) = match snap.cell_at(x, y) {
                    Some(color) => ('█', block_style(color)),
                    None => ('·', CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG)),
                };
                self.fill_cell(fb, frame.x + 1, frame.y + 1, x as u16, y as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase() {
            Phase::NotStarted => self.draw_overlay(fb, frame, &["PRESS ENTER", "LEVEL: 1-9"]),
            Phase::GameOver => self.draw_overlay(fb, frame, &["GAME OVER", "ENTER: AGAIN"]),
            Phase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    /// Paint one board cell (cell_w x cell_h terminal cells) at grid (x, y) from `origin`.
    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        fb.fill_rect(
            origin_x + x * self.cell_w,
            origin_y + y * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, vp: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        let preview_w = PREVIEW_CELLS * self.cell_w;
        if panel_x.saturating_add(preview_w.max(12)) > vp.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = f.y;
        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        if let Some(next) = snap.next {
            self.draw_preview(fb, panel_x, y, &next);
        }
        y += PREVIEW_CELLS * self.cell_h + 1;

        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level.get() as u32),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }
    }

    /// Fixed 4x4 preview grid with the piece in its top-left corner.
    fn draw_preview(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, piece: &PieceSnapshot) {
        let empty = CellStyle::new(Rgb::new(60, 60, 70), PLAY_BG);
        for y in 0..PREVIEW_CELLS {
            for x in 0..PREVIEW_CELLS {
                let (ch, style) = if piece.shape.is_filled(x as usize, y as usize) {
                    ('█', block_style(piece.color))
                } else {
                    (' ', empty)
                };
                self.fill_cell(fb, x0, y0, x, y, ch, style);
            }
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, f: Frame, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let top = (f.y + f.h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = f.x + f.w.saturating_sub(text_w) / 2;
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}

fn block_style(color: Color) -> CellStyle {
    CellStyle::new(color_rgb(color), PLAY_BG).bold()
}

pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
    }
}
