//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the tile geometry, the tile book, stamp rendering and
//! the board/hand state of a round. It has no dependencies on terminal I/O,
//! making it:
//!
//! - **Deterministic**: Same seed and actions produce the same round
//! - **Testable**: Every geometry rule and state transition has unit tests
//! - **Portable**: Can drive any frontend (terminal, headless)
//!
//! # Module Structure
//!
//! - [`twist`]: glyph category of one cell, resolved from incoming and outgoing directions
//! - [`tile`]: tracks (entrance to entrance routes) and four-track tile definitions
//! - [`book`]: validated, index-addressed list of tiles, and the built-in book
//! - [`stamp`]: the rendered character grid of one tile, with crossing detection
//! - [`city`]: 6x6 grid of placed tile ids
//! - [`hand`]: the held tile and its cursor on or beside the board
//! - [`rng`]: uniform tile draws
//! - [`game_state`]: one round tying the above together
//!
//! # Example
//!
//! ```
//! use tui_round_core::{Dice, Round, TileBook};
//! use tui_round_types::GameAction;
//!
//! let book = TileBook::standard().unwrap();
//! let mut round = Round::new(book, Dice::seeded(7));
//!
//! round.apply_action(GameAction::MoveRight);
//! assert!(round.apply_action(GameAction::Place));
//! assert_eq!(round.city().occupied(), 1);
//! ```

pub mod book;
pub mod city;
pub mod error;
pub mod game_state;
pub mod hand;
pub mod rng;
pub mod stamp;
pub mod tile;
pub mod twist;

pub use tui_round_types as types;

// Re-export commonly used types for convenience
pub use book::TileBook;
pub use city::City;
pub use error::BookError;
pub use game_state::Round;
pub use hand::{Hand, Spot};
pub use rng::Dice;
pub use stamp::Stamp;
pub use tile::{TileMap, Track, TrackWrite, TrackWrites, MAX_ROUTE_LEN, TRACKS_PER_TILE};
pub use twist::Twist;
