//! GameView: maps a `core::Round` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right:
//!
//! ```text
//! ┌HAND──────┐┌BOARD─────────────── ... ─┐
//! │ held tile││                          │
//! │ (off the ││  6x6 tiles of 10x5 cells │
//! │  board)  ││                          │
//! └──────────┘│                          │
//! ┌KEY───────┐│                          │
//! │last key  ││                          │
//! └──────────┘└───────────────── ... ────┘
//! ```

use crate::core::{City, Hand, Round, Stamp, TileBook};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::paint::{paint_stamp, paint_stamp_inverted};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, TILE_HEIGHT, TILE_WIDTH};

const TILE_W: u16 = TILE_WIDTH as u16;
const TILE_H: u16 = TILE_HEIGHT as u16;

/// Board area inside its border.
const BOARD_PX_W: u16 = (BOARD_WIDTH as u16) * TILE_W;
const BOARD_PX_H: u16 = (BOARD_HEIGHT as u16) * TILE_H;

/// Hand panel, border included.
const HAND_FRAME_W: u16 = TILE_W + 2;
const HAND_FRAME_H: u16 = TILE_H + 2;

/// Key echo panel, border included.
const KEY_FRAME_H: u16 = 3;

const BOARD_FRAME_W: u16 = BOARD_PX_W + 2;
const BOARD_FRAME_H: u16 = BOARD_PX_H + 2;

/// Smallest viewport that fits the whole layout.
pub const MIN_WIDTH: u16 = HAND_FRAME_W + BOARD_FRAME_W;
pub const MIN_HEIGHT: u16 = BOARD_FRAME_H;

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

    pub fn fits_layout(&self) -> bool {
        self.width >= MIN_WIDTH && self.height >= MIN_HEIGHT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for a round.
#[derive(Debug, Clone)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

fn tile_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(230, 230, 230),
        bg: Rgb::new(30, 30, 40),
        bold: false,
        dim: false,
        inverted: false,
    }
}

fn board_bg_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(90, 90, 100),
        bg: Rgb::new(30, 30, 40),
        bold: false,
        dim: true,
        inverted: false,
    }
}

fn border_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(200, 200, 200),
        bg: Rgb::new(0, 0, 0),
        bold: false,
        dim: false,
        inverted: false,
    }
}

fn label_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(220, 220, 220),
        bg: Rgb::new(0, 0, 0),
        bold: true,
        dim: false,
        inverted: false,
    }
}

/// Paint every placed tile, then the hand (inverted) if it is over the board.
///
/// `(ox, oy)` is the top-left cell of the board area. The framebuffer must
/// hold the whole `BOARD_WIDTH * TILE_WIDTH` x `BOARD_HEIGHT * TILE_HEIGHT` area.
pub fn render_board(
    fb: &mut FrameBuffer,
    book: &TileBook,
    city: &City,
    hand: &Hand,
    ox: u16,
    oy: u16,
) {
    let style = tile_style();
    for (x, y, id) in city.tiles() {
        if let Some(map) = book.get(id) {
            let stamp = Stamp::render(map, id);
            paint_stamp(
                fb,
                &stamp,
                ox + x as u16 * TILE_W,
                oy + y as u16 * TILE_H,
                style,
            );
        }
    }

    if let Some((x, y)) = hand.position() {
        if let Some(map) = book.get(hand.code()) {
            let stamp = Stamp::render(map, hand.code());
            paint_stamp_inverted(
                fb,
                &stamp,
                ox + x as u16 * TILE_W,
                oy + y as u16 * TILE_H,
                style,
            );
        }
    }
}

/// Paint the held tile at `(ox, oy)` while it is off the board.
pub fn render_hand(fb: &mut FrameBuffer, book: &TileBook, hand: &Hand, ox: u16, oy: u16) {
    if hand.is_onboard() {
        return;
    }
    if let Some(map) = book.get(hand.code()) {
        paint_stamp(fb, &Stamp::render(map, hand.code()), ox, oy, tile_style());
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the round into an existing framebuffer.
    ///
    /// `last_key` is echoed in the key panel. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        round: &Round,
        last_key: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        if !viewport.fits_layout() {
            self.draw_too_small(fb, viewport);
            return;
        }

        let start_x = (viewport.width - MIN_WIDTH) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => (viewport.height - MIN_HEIGHT) / 2,
            AnchorY::Top => 0,
        };

        let border = border_style();
        let label = label_style();

        // Hand panel.
        self.draw_border(fb, start_x, start_y, HAND_FRAME_W, HAND_FRAME_H, border);
        fb.put_str(start_x + 1, start_y, "HAND", label);
        render_hand(fb, round.book(), round.hand(), start_x + 1, start_y + 1);

        // Key echo panel.
        let key_y = start_y + HAND_FRAME_H;
        self.draw_border(fb, start_x, key_y, HAND_FRAME_W, KEY_FRAME_H, border);
        fb.put_str(start_x + 1, key_y, "KEY", label);
        let key_text: String = last_key.chars().take(TILE_W as usize).collect();
        fb.put_str(start_x + 1, key_y + 1, &key_text, CellStyle::default());

        // Board.
        let board_x = start_x + HAND_FRAME_W;
        self.draw_border(fb, board_x, start_y, BOARD_FRAME_W, BOARD_FRAME_H, border);
        fb.put_str(board_x + 1, start_y, "BOARD", label);
        fb.fill_rect(
            board_x + 1,
            start_y + 1,
            BOARD_PX_W,
            BOARD_PX_H,
            ' ',
            board_bg_style(),
        );
        self.draw_vacant_marks(fb, round.city(), board_x + 1, start_y + 1);
        render_board(
            fb,
            round.book(),
            round.city(),
            round.hand(),
            board_x + 1,
            start_y + 1,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, round: &Round, last_key: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(round, last_key, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Faint dot in the middle of each vacant board cell.
    fn draw_vacant_marks(&self, fb: &mut FrameBuffer, city: &City, ox: u16, oy: u16) {
        let style = board_bg_style();
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                if city.is_vacant(x, y) {
                    fb.put_char(
                        ox + x as u16 * TILE_W + TILE_W / 2,
                        oy + y as u16 * TILE_H + TILE_H / 2,
                        '·',
                        style,
                    );
                }
            }
        }
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let msg = format!("terminal too small: need {MIN_WIDTH}x{MIN_HEIGHT}");
        let text_w = msg.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        let y = viewport.height / 2;
        fb.put_str(x, y, &msg, label_style());
    }
}
