//! Track-tile round (workspace facade crate).
//!
//! Re-exports the workspace crates under one path so the binary, the
//! integration tests and the benches can use `tui_round::{core,term,...}`.

pub use tui_round_core as core;
pub use tui_round_input as input;
pub use tui_round_log as log;
pub use tui_round_term as term;
pub use tui_round_types as types;
