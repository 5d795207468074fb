//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders a [`core::GameSnapshot`] into
//! a simple framebuffer that is diffed and flushed to a terminal backend.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure snapshot-to-framebuffer view (board, panel, notices)
//! - [`renderer`]: crossterm output with changed-run diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{kind_color, AnchorY, BoardRect, GameView, Viewport, DEFAULT_BANNER};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
