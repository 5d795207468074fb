//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The board is
//! turn-based, so there is no key-repeat handling: one key press is one action.

pub mod map;

pub use tui_match3_types as types;

pub use map::{handle_key_event, should_quit};
