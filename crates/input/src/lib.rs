//! Terminal input: maps `crossterm` key events onto [`types::GameAction`].
//!
//! Nothing here touches the terminal; callers read events themselves and
//! pass them in.

pub mod map;

pub use tui_round_types as types;

pub use map::{describe_key, handle_key_event, should_quit};
