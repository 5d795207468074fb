use arrayvec::ArrayString;

use crate::types::{
    Coord, GameStatus, ItemCounts, Notice, PlayMode, Settings, TileKind, GRID_SIZE,
};

/// Longest hint text a snapshot carries; longer suggestions are truncated
pub const HINT_CAPACITY: usize = 96;

pub type HintText = ArrayString<HINT_CAPACITY>;

/// Copy `text` into a [`HintText`], dropping whatever does not fit
pub fn hint_text(text: &str) -> HintText {
    let mut out = HintText::new();
    for ch in text.chars() {
        if out.try_push(ch).is_err() {
            break;
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Option<TileKind>; GRID_SIZE]; GRID_SIZE],
    /// Tiles currently flashing as part of a match
    pub matched: [[bool; GRID_SIZE]; GRID_SIZE],
    pub cursor: Coord,
    pub selected: Option<Coord>,
    pub status: GameStatus,
    pub mode: PlayMode,
    pub score: u32,
    pub high_score: u32,
    pub moves: u32,
    pub combo: u32,
    pub items: ItemCounts,
    pub settings: Settings,
    pub notice: Option<Notice>,
    pub hint: Option<HintText>,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    /// Whether player input is accepted right now
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Idle
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; GRID_SIZE]; GRID_SIZE],
            matched: [[false; GRID_SIZE]; GRID_SIZE],
            cursor: Coord::new(0, 0),
            selected: None,
            status: GameStatus::Idle,
            mode: PlayMode::Swap,
            score: 0,
            high_score: 0,
            moves: 0,
            combo: 0,
            items: ItemCounts::default(),
            settings: Settings::default(),
            notice: None,
            hint: None,
            episode_id: 0,
            seed: 0,
        }
    }
}
