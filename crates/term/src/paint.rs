//! Projecting tile stamps onto a framebuffer.
//!
//! Both painters copy every cell of the stamp, blanks included, so a stamp
//! fully covers whatever was underneath. The caller must keep the whole stamp
//! inside the framebuffer.

use crate::core::Stamp;
use crate::fb::{CellStyle, FrameBuffer};

/// Copy `stamp` into `fb` with its top-left corner at `(ox, oy)`.
///
/// Each written cell takes `style`.
///
/// # Panics
///
/// If any part of the stamp falls outside `fb`.
pub fn paint_stamp(fb: &mut FrameBuffer, stamp: &Stamp, ox: u16, oy: u16, style: CellStyle) {
    for y in 0..stamp.height() {
        for x in 0..stamp.width() {
            *fb.cell_mut(ox + x, oy + y) = style.into_cell(stamp.get(x, y));
        }
    }
}

/// Like [`paint_stamp`], but marks every written cell as inverted.
///
/// Used for the tile held over the board.
pub fn paint_stamp_inverted(
    fb: &mut FrameBuffer,
    stamp: &Stamp,
    ox: u16,
    oy: u16,
    style: CellStyle,
) {
    for y in 0..stamp.height() {
        for x in 0..stamp.width() {
            let cell = fb.cell_mut(ox + x, oy + y);
            cell.ch = stamp.get(x, y);
            cell.style = CellStyle {
                inverted: true,
                ..style
            };
        }
    }
}
