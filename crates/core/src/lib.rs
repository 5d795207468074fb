//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the board engine and the session state machine built on
//! top of it. It has **no dependencies** on terminal, storage, or other I/O,
//! making it:
//!
//! - **Deterministic**: the same seed produces the same boards and refills
//! - **Testable**: every rule is a plain function over a [`Board`] value
//! - **Portable**: runs headless, in the terminal front end, or in benches
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 grid of optional tiles with coordinate-consistent placement
//! - [`tile`]: tile values and the id-issuing [`TileFactory`]
//! - [`generator`]: starting boards with no ready-made matches
//! - [`matches`]: runs of three or more, as a deduplicated [`MatchSet`]
//! - [`gravity`]: column compaction and top-down refill
//! - [`shuffle`]: Fisher-Yates redistribution of existing tiles
//! - [`scoring`]: cascade points and bonus item awards
//! - [`resolve`]: the combo engine ([`Cascade`] / [`resolve()`])
//! - [`hint`]: advisory move suggestions with a static fallback
//! - [`game_state`]: host session: moves, items, selection, paced playback
//! - [`rng`]: seedable ChaCha8 randomness
//!
//! # Engine Rules
//!
//! | Step | Rule |
//! |------|------|
//! | Match | 3+ same-kind tiles in a row or column; overlapping runs merge |
//! | Score | `matched * 10 * combo`, combo starting at 1 per resolution |
//! | Awards | exactly 4 → hammer, 5+ → shuffle, combo 3 → extra moves |
//! | Gravity | tiles fall keeping order; empty cells refill from the top |
//! | Repeat | until no match remains |
//!
//! Engine functions take `&Board` and return a new board; the only other
//! input is the [`TileFactory`] that supplies fresh tiles and randomness.
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{create_board, find_matches, resolve, TileFactory};
//!
//! let mut factory = TileFactory::seeded(12345);
//! let board = create_board(&mut factory);
//! assert!(find_matches(&board).is_empty());
//!
//! // A stable board resolves to itself.
//! let result = resolve(&board, &mut factory);
//! assert_eq!(result.combo, 0);
//! assert_eq!(result.board, board);
//! ```
//!
//! # Sessions
//!
//! ```
//! use tui_match3_core::{GameConfig, GameState};
//! use tui_match3_types::{GameAction, GameStatus, MAX_MOVES};
//!
//! let mut game = GameState::new(GameConfig::instant(7));
//! game.apply_action(GameAction::CursorRight);
//! game.apply_action(GameAction::Select);
//! game.apply_action(GameAction::CursorDown);
//! game.apply_action(GameAction::Select);
//!
//! assert!(game.moves() <= MAX_MOVES);
//! assert_ne!(game.status(), GameStatus::Resolving);
//! ```
//!
//! # Timing
//!
//! The session uses the fixed timestep of the front end (16ms). Call
//! [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time; playback stages advance as their timers run out.

pub mod board;
pub mod game_state;
pub mod generator;
pub mod gravity;
pub mod hint;
pub mod matches;
pub mod resolve;
pub mod rng;
pub mod scoring;
pub mod shuffle;
pub mod snapshot;
pub mod tile;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use board::{is_adjacent, Board, CELL_COUNT};
pub use game_state::{GameConfig, GameEvent, GameEvents, GameState, EVENT_CAPACITY};
pub use generator::create_board;
pub use gravity::apply_gravity;
pub use hint::{
    find_hint_swap, hint_or_fallback, HintContext, HintError, HintSource, LocalHintSource,
    FALLBACK_HINT,
};
pub use matches::{find_matches, MatchSet};
pub use resolve::{resolve, Cascade, CascadeStep, Resolution};
pub use rng::{clock_seed, GameRng};
pub use scoring::{cascade_awards, cascade_points, Awards};
pub use shuffle::shuffle_board;
pub use snapshot::{GameSnapshot, HintText};
pub use tile::{Tile, TileFactory, TileId};
