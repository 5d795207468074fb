//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a notice line, the framed 8x8 board with the side
//! panel to its right, and a hint line.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, GameStatus, ItemKind, PlayMode, TileKind, GRID_SIZE};

/// Shown under the board when there is no hint.
pub const DEFAULT_BANNER: &str = "Match four tiles to earn a reward!";

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_W: u16 = 18;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame landed in the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// A lightweight terminal renderer for the board game.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps tiles roughly square on typical terminal fonts.
        Self {
            cell_w: 4,
            cell_h: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board frame size including the border.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_SIZE as u16 * self.cell_w + 2,
            GRID_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Where the board frame goes for `viewport`.
    pub fn board_rect(&self, viewport: Viewport) -> BoardRect {
        let (w, h) = self.frame_size();
        // Notice line above the frame, hint line below.
        let block_h = h + 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };
        BoardRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: top + 1,
            w,
            h,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let rect = self.board_rect(viewport);
        let board_style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG);
        let border = match snap.mode {
            PlayMode::Hammer => CellStyle::new(Rgb::new(240, 80, 100), Rgb::BLACK).bold(),
            PlayMode::Swap => CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK),
        };

        fb.fill_rect(
            rect.x + 1,
            rect.y + 1,
            rect.w - 2,
            rect.h - 2,
            ' ',
            board_style,
        );
        fb.draw_box(rect.x, rect.y, rect.w, rect.h, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                self.draw_tile(fb, rect, snap, row, col);
            }
        }

        self.draw_notice_line(fb, snap, rect);
        self.draw_hint_line(fb, snap, rect);
        self.draw_side_panel(fb, snap, viewport, rect);

        if snap.status == GameStatus::GameOver {
            self.draw_overlay(fb, rect, "GAME OVER", "r: play again");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of tile `(row, col)`.
    fn tile_origin(&self, rect: BoardRect, row: usize, col: usize) -> (u16, u16) {
        (
            rect.x + 1 + col as u16 * self.cell_w,
            rect.y + 1 + row as u16 * self.cell_h,
        )
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        rect: BoardRect,
        snap: &GameSnapshot,
        row: usize,
        col: usize,
    ) {
        let (px, py) = self.tile_origin(rect, row, col);
        let mid_x = px + (self.cell_w - 1) / 2;
        let mid_y = py + (self.cell_h - 1) / 2;

        match snap.board[row][col] {
            Some(kind) if snap.matched[row][col] => {
                let style = CellStyle::new(kind_color(kind), Rgb::WHITE).bold();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.put_char(mid_x, mid_y, '*', style);
            }
            Some(kind) => {
                let style = CellStyle::new(Rgb::BLACK, kind_color(kind)).bold();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.put_char(mid_x, mid_y, kind.letter(), style);
            }
            None => {
                let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
                fb.put_char(mid_x, mid_y, '·', style);
            }
        }

        let here = Coord::new(row, col);
        if snap.selected == Some(here) {
            let style = CellStyle::new(Rgb::WHITE, self.bg_at(fb, px, py)).bold();
            for y in py..py + self.cell_h {
                fb.put_char(px, y, '{', style);
                fb.put_char(px + self.cell_w - 1, y, '}', style);
            }
        }
        if snap.cursor == here {
            let fg = match snap.mode {
                PlayMode::Hammer => Rgb::new(240, 80, 100),
                PlayMode::Swap => Rgb::WHITE,
            };
            let mut style = CellStyle::new(fg, self.bg_at(fb, px, py)).bold();
            if !snap.playable() {
                style = style.dim();
            }
            fb.put_char(px, mid_y, '[', style);
            fb.put_char(px + self.cell_w - 1, mid_y, ']', style);
        }
    }

    fn bg_at(&self, fb: &FrameBuffer, x: u16, y: u16) -> Rgb {
        fb.get(x, y).map_or(BOARD_BG, |c| c.style.bg)
    }

    fn draw_notice_line(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, rect: BoardRect) {
        let Some(y) = rect.y.checked_sub(1) else {
            return;
        };
        match snap.notice {
            Some(notice) => {
                let style = CellStyle::new(Rgb::new(250, 200, 60), Rgb::BLACK).bold();
                fb.put_centered(rect.x, rect.w, y, notice.text(), style);
            }
            None => {
                let style = CellStyle::default().bold();
                fb.put_centered(rect.x, rect.w, y, "MATCH-3", style);
            }
        }
    }

    fn draw_hint_line(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, rect: BoardRect) {
        let y = rect.y + rect.h;
        match &snap.hint {
            Some(hint) => {
                let style = CellStyle::new(Rgb::new(120, 220, 240), Rgb::BLACK);
                let x = fb.put_str(rect.x, y, "Hint: ", style.bold());
                fb.put_str(x, y, hint.as_str(), style);
            }
            None => {
                let style = CellStyle::default().dim();
                fb.put_centered(rect.x, rect.w, y, DEFAULT_BANNER, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        rect: BoardRect,
    ) {
        let panel_x = rect.x.saturating_add(rect.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        let dim = value.dim();

        let mut y = rect.y;
        for (title, number) in [
            ("SCORE", snap.score),
            ("BEST", snap.high_score),
            ("MOVES", snap.moves),
        ] {
            fb.put_str(panel_x, y, title, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 2;
        }

        if snap.combo > 1 {
            let x = fb.put_str(panel_x, y, "COMBO x", label);
            fb.put_u32(x, y, snap.combo, label);
        }
        y += 2;

        fb.put_str(panel_x, y, "ITEMS", label);
        y += 1;
        for (key, kind) in [
            ('x', ItemKind::Hammer),
            ('f', ItemKind::Shuffle),
            ('e', ItemKind::ExtraMoves),
        ] {
            let count = snap.items.get(kind);
            let style = if count == 0 { dim } else { value };
            fb.put_char(panel_x, y, key, label);
            fb.put_str(panel_x + 2, y, kind.label(), style);
            fb.put_u32(panel_x + 12, y, count, style);
            y += 1;
        }
        if snap.mode == PlayMode::Hammer {
            let armed = CellStyle::new(Rgb::new(240, 80, 100), Rgb::BLACK).bold();
            fb.put_str(panel_x, y, "HAMMER ARMED", armed);
        }
        y += 2;

        fb.put_str(panel_x, y, "SETTINGS", label);
        y += 1;
        for (key, name, on) in [
            ('m', "Music", snap.settings.music),
            ('n', "Sound", snap.settings.sound),
            ('v', "Vibration", snap.settings.vibration),
        ] {
            fb.put_char(panel_x, y, key, label);
            fb.put_str(panel_x + 2, y, name, value);
            fb.put_str(panel_x + 12, y, if on { "on" } else { "off" }, if on { value } else { dim });
            y += 1;
        }

        y += 1;
        if y < viewport.height {
            fb.put_str(panel_x, y, "? hint  r new  q quit", dim);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, rect: BoardRect, title: &str, sub: &str) {
        let mid_y = rect.y.saturating_add(rect.h / 2);
        let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
        let inner_x = rect.x + 1;
        let inner_w = rect.w - 2;
        fb.fill_rect(inner_x, mid_y - 1, inner_w, 3, ' ', style);
        fb.put_centered(inner_x, inner_w, mid_y - 1, title, style);
        fb.put_centered(inner_x, inner_w, mid_y + 1, sub, style.dim());
    }
}

/// Tile background colour.
pub fn kind_color(kind: TileKind) -> Rgb {
    match kind {
        TileKind::Blue => Rgb::new(60, 120, 230),
        TileKind::Red => Rgb::new(220, 70, 70),
        TileKind::Green => Rgb::new(70, 190, 90),
        TileKind::Yellow => Rgb::new(235, 205, 60),
        TileKind::Purple => Rgb::new(160, 90, 210),
        TileKind::Orange => Rgb::new(240, 140, 40),
    }
}
