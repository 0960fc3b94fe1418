//! Terminal rendering for the track-tile round.
//!
//! Rendering goes through a plain framebuffer rather than a widget library:
//! `game_view` and `paint` fill a [`FrameBuffer`] without touching the
//! terminal, and [`TerminalRenderer`] flushes it with crossterm, emitting
//! only the cells that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod paint;
pub mod renderer;

pub use tui_round_core as core;
pub use tui_round_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{render_board, render_hand, AnchorY, GameView, Viewport};
pub use paint::{paint_stamp, paint_stamp_inverted};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
