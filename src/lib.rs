//! Terminal match-3 puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so integration tests,
//! benches and the binary can write `tui_match3::{core,input,store,term,types}`.

pub use tui_match3_core as core;
pub use tui_match3_input as input;
pub use tui_match3_store as store;
pub use tui_match3_term as term;
pub use tui_match3_types as types;
