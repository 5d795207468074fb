//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! Everything here is plain data, so the same types flow through the board
//! engine, the session state machine, the profile store and the terminal view.
//!
//! # Board Dimensions
//!
//! - **Grid**: 8x8 square, indexed `(row, col)` with row 0 at the top
//! - **Tile kinds**: 6 (blue, red, green, yellow, purple, orange)
//!
//! # Rules Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_MOVES` | 30 | Move budget at the start of a session |
//! | `POINTS_PER_TILE` | 10 | Base points per matched tile (times combo) |
//! | `EXTRA_MOVES_BONUS` | 5 | Moves granted by the extra-moves item |
//! | `HAMMER_MATCH_SIZE` | 4 | Cascade size that awards a hammer |
//! | `SHUFFLE_MATCH_MIN` | 5 | Cascade size that awards a shuffle |
//! | `EXTRA_MOVES_COMBO` | 3 | Combo count that awards extra moves |
//!
//! # Presentation Timing
//!
//! Timing values are in milliseconds and only pace the host's playback of a
//! resolution; the engine itself never waits.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MATCH_FLASH_MS` | 300 | Matched tiles highlighted before removal |
//! | `CLEAR_PAUSE_MS` | 100 | Empty cells shown before gravity |
//! | `GRAVITY_SETTLE_MS` | 400 | Settled board shown before the next cascade |
//! | `SWAP_REVERT_MS` | 400 | Delay before a non-matching swap is undone |
//! | `NOTICE_MS` | 2000 | Reward notice lifetime |
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{Coord, ItemKind, TileKind, GRID_SIZE};
//!
//! let kind = TileKind::from_letter('r').unwrap();
//! assert_eq!(kind, TileKind::Red);
//! assert_eq!(kind.as_str(), "red");
//!
//! assert!(Coord::new(2, 3).is_adjacent(Coord::new(1, 3)));
//! assert!(!Coord::new(0, 0).is_adjacent(Coord::new(1, 1)));
//!
//! assert_eq!(ItemKind::ExtraMoves.label(), "+5 Moves");
//! assert_eq!(GRID_SIZE, 8);
//! ```

use serde::{Deserialize, Serialize};

/// Side length of the square grid (8 rows x 8 columns)
pub const GRID_SIZE: usize = 8;

/// Number of distinct tile kinds
pub const TILE_KIND_COUNT: usize = 6;

/// Moves available at the start of a session
pub const MAX_MOVES: u32 = 30;

/// Base points per matched tile; multiplied by the combo count
pub const POINTS_PER_TILE: u32 = 10;

/// Moves granted by one extra-moves item
pub const EXTRA_MOVES_BONUS: u32 = 5;

/// A cascade of exactly this many tiles awards a hammer
pub const HAMMER_MATCH_SIZE: usize = 4;

/// A cascade of at least this many tiles awards a shuffle
pub const SHUFFLE_MATCH_MIN: usize = 5;

/// Reaching exactly this combo count awards extra moves
pub const EXTRA_MOVES_COMBO: u32 = 3;

/// Item inventory at the start of a session
pub const INITIAL_ITEMS: ItemCounts = ItemCounts {
    hammer: 3,
    shuffle: 2,
    extra_moves: 1,
};

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Matched tiles stay highlighted this long before they are removed
pub const MATCH_FLASH_MS: u32 = 300;

/// Emptied cells are shown this long before gravity runs
pub const CLEAR_PAUSE_MS: u32 = 100;

/// A settled board is shown this long before the next cascade step
pub const GRAVITY_SETTLE_MS: u32 = 400;

/// A swap that makes no match is undone after this delay
pub const SWAP_REVERT_MS: u32 = 400;

/// Reward notices disappear after this long
pub const NOTICE_MS: u32 = 2000;

/// The six tile kinds
///
/// Each kind has a stable lowercase name (used in text summaries and
/// persisted data) and a single display letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl TileKind {
    /// All kinds, in index order
    pub const ALL: [TileKind; TILE_KIND_COUNT] = [
        TileKind::Blue,
        TileKind::Red,
        TileKind::Green,
        TileKind::Yellow,
        TileKind::Purple,
        TileKind::Orange,
    ];

    /// Position of this kind in [`TileKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Convert to lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Blue => "blue",
            TileKind::Red => "red",
            TileKind::Green => "green",
            TileKind::Yellow => "yellow",
            TileKind::Purple => "purple",
            TileKind::Orange => "orange",
        }
    }

    /// Single-letter display code
    pub fn letter(&self) -> char {
        match self {
            TileKind::Blue => 'B',
            TileKind::Red => 'R',
            TileKind::Green => 'G',
            TileKind::Yellow => 'Y',
            TileKind::Purple => 'P',
            TileKind::Orange => 'O',
        }
    }

    /// Parse a display letter (case-insensitive)
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'B' => Some(TileKind::Blue),
            'R' => Some(TileKind::Red),
            'G' => Some(TileKind::Green),
            'Y' => Some(TileKind::Yellow),
            'P' => Some(TileKind::Purple),
            'O' => Some(TileKind::Orange),
            _ => None,
        }
    }
}

/// A cell position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on the grid
    pub fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Manhattan distance to `other`
    pub fn distance(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Direct horizontal or vertical neighbour (not diagonal, not itself)
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.distance(other) == 1
    }

    /// Move by a signed offset, clamped to the grid
    pub fn offset_clamped(self, d_row: i32, d_col: i32) -> Coord {
        let max = GRID_SIZE as i32 - 1;
        Coord {
            row: (self.row as i32 + d_row).clamp(0, max) as usize,
            col: (self.col as i32 + d_col).clamp(0, max) as usize,
        }
    }
}

/// Consumable power-ups
///
/// - **Hammer**: removes one chosen tile (area-clear)
/// - **Shuffle**: redistributes every tile on the board
/// - **ExtraMoves**: adds [`EXTRA_MOVES_BONUS`] moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Hammer,
    Shuffle,
    ExtraMoves,
}

impl ItemKind {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Hammer => "Hammer",
            ItemKind::Shuffle => "Shuffle",
            ItemKind::ExtraMoves => "+5 Moves",
        }
    }
}

/// Per-item counters, used both as an inventory and as an award tally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemCounts {
    pub hammer: u32,
    pub shuffle: u32,
    pub extra_moves: u32,
}

impl ItemCounts {
    pub fn get(&self, kind: ItemKind) -> u32 {
        match kind {
            ItemKind::Hammer => self.hammer,
            ItemKind::Shuffle => self.shuffle,
            ItemKind::ExtraMoves => self.extra_moves,
        }
    }

    fn slot_mut(&mut self, kind: ItemKind) -> &mut u32 {
        match kind {
            ItemKind::Hammer => &mut self.hammer,
            ItemKind::Shuffle => &mut self.shuffle,
            ItemKind::ExtraMoves => &mut self.extra_moves,
        }
    }

    pub fn add(&mut self, kind: ItemKind, count: u32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(count);
    }

    /// Consume one item. Returns false (and changes nothing) when none are left.
    pub fn take(&mut self, kind: ItemKind) -> bool {
        let slot = self.slot_mut(kind);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

/// Host feedback toggles
///
/// The terminal host rings the bell for reward notices when `sound` is on.
/// `music` and `vibration` have no terminal output; they are persisted and
/// shown in the settings panel for hosts that can act on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub music: bool,
    pub sound: bool,
    pub vibration: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music: true,
            sound: true,
            vibration: true,
        }
    }
}

/// Individual settings toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    Music,
    Sound,
    Vibration,
}

impl Settings {
    /// Flip one toggle and return its new value
    pub fn toggle(&mut self, setting: Setting) -> bool {
        let slot = match setting {
            Setting::Music => &mut self.music,
            Setting::Sound => &mut self.sound,
            Setting::Vibration => &mut self.vibration,
        };
        *slot = !*slot;
        *slot
    }
}

/// Everything the host persists between sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Records {
    pub high_score: u32,
    pub items: ItemCounts,
    pub settings: Settings,
}

impl Records {
    /// Records of a player who has never played
    pub fn fresh() -> Self {
        Self {
            high_score: 0,
            items: INITIAL_ITEMS,
            settings: Settings::default(),
        }
    }
}

/// Session status as seen by the host
///
/// - **Idle**: waiting for player input
/// - **Swapping**: a non-matching swap is on screen and about to be undone
/// - **Resolving**: a cascade is being played back
/// - **GameOver**: the move budget is spent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Idle,
    Swapping,
    Resolving,
    GameOver,
}

/// What a tile click does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayMode {
    /// Select / swap tiles
    #[default]
    Swap,
    /// The next click smashes a tile with the hammer
    Hammer,
}

/// Reward or item notice shown by the host for a short while
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// A cascade earned an item
    Award(ItemKind),
    /// An extra-moves item was used
    MovesAdded(u32),
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::Award(ItemKind::Hammer) => "You earned a Hammer!",
            Notice::Award(ItemKind::Shuffle) => "You earned a Shuffle!",
            Notice::Award(ItemKind::ExtraMoves) => "Triple combo! +5 moves item!",
            Notice::MovesAdded(_) => "Moves added!",
        }
    }
}

/// Player and host actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Select,
    ArmHammer,
    Shuffle,
    ExtraMoves,
    Hint,
    Restart,
    ToggleMusic,
    ToggleSound,
    ToggleVibration,
    ClearRecords,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_kind_index_round_trips_through_all() {
        for (i, kind) in TileKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(TileKind::from_letter(kind.letter()), Some(*kind));
        }
    }

    #[test]
    fn adjacency_is_manhattan_distance_one() {
        assert!(Coord::new(0, 0).is_adjacent(Coord::new(0, 1)));
        assert!(Coord::new(2, 3).is_adjacent(Coord::new(1, 3)));
        assert!(!Coord::new(0, 0).is_adjacent(Coord::new(1, 1)));
        assert!(!Coord::new(0, 0).is_adjacent(Coord::new(0, 0)));
        assert!(!Coord::new(0, 0).is_adjacent(Coord::new(0, 2)));
    }

    #[test]
    fn offset_clamped_stays_on_grid() {
        assert_eq!(Coord::new(0, 0).offset_clamped(-1, -1), Coord::new(0, 0));
        assert_eq!(Coord::new(7, 7).offset_clamped(1, 1), Coord::new(7, 7));
        assert_eq!(Coord::new(3, 3).offset_clamped(1, -1), Coord::new(4, 2));
    }

    #[test]
    fn take_is_a_no_op_on_empty_slot() {
        let mut items = ItemCounts {
            hammer: 1,
            ..ItemCounts::default()
        };
        assert!(items.take(ItemKind::Hammer));
        assert!(!items.take(ItemKind::Hammer));
        assert_eq!(items.hammer, 0);
        assert!(!items.take(ItemKind::Shuffle));
    }

    #[test]
    fn items_serialize_with_camel_case_keys() {
        let json = serde_json::to_string(&INITIAL_ITEMS).unwrap();
        assert_eq!(json, r#"{"hammer":3,"shuffle":2,"extraMoves":1}"#);

        let partial: ItemCounts = serde_json::from_str(r#"{"hammer":7}"#).unwrap();
        assert_eq!(partial.hammer, 7);
        assert_eq!(partial.extra_moves, 0);
    }

    #[test]
    fn settings_toggle_flips_one_flag() {
        let mut settings = Settings::default();
        assert!(!settings.toggle(Setting::Sound));
        assert!(settings.music);
        assert!(!settings.sound);
        assert!(settings.vibration);
        assert!(settings.toggle(Setting::Sound));
    }
}
