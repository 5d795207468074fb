//! Game state module - the host-side session around the board engine
//!
//! The engine resolves a move atomically; this module owns everything around
//! it: counters, inventory, play mode, selection, and the paced playback of a
//! resolution. Player input arrives through [`GameState::apply_action`] and
//! time through [`GameState::tick`].
//!
//! Playback of a resolution walks every [`CascadeStep`] through three stages
//! (matched tiles flash, cells empty, board settles). Score and awards for a
//! step are applied when its flash begins. `tick` consumes elapsed time across
//! as many stages as it covers, so one large tick settles any playback.

use std::env;
use std::mem;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::generator::create_board;
use crate::gravity::apply_gravity;
use crate::hint::{hint_or_fallback, HintContext, HintSource, LocalHintSource};
use crate::matches::find_matches;
use crate::resolve::{resolve, CascadeStep};
use crate::rng::clock_seed;
use crate::scoring::Awards;
use crate::shuffle::shuffle_board;
use crate::snapshot::{hint_text, GameSnapshot, HintText};
use crate::tile::TileFactory;
use crate::types::*;

/// Session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u64,
    pub max_moves: u32,
    pub initial_items: ItemCounts,
    /// Pace resolutions for display; when false every move settles immediately
    pub animate: bool,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            max_moves: MAX_MOVES,
            initial_items: INITIAL_ITEMS,
            animate: true,
        }
    }

    /// Config for headless hosts and tests: no playback delays
    pub fn instant(seed: u64) -> Self {
        Self {
            animate: false,
            ..Self::new(seed)
        }
    }

    /// Read `MATCH3_SEED`, `MATCH3_MAX_MOVES` and `MATCH3_NO_ANIM`
    pub fn from_env() -> Self {
        let seed = env::var("MATCH3_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let max_moves = env::var("MATCH3_MAX_MOVES")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&m: &u32| m > 0)
            .unwrap_or(MAX_MOVES);

        let animate = !env::var("MATCH3_NO_ANIM")
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            seed,
            max_moves,
            initial_items: INITIAL_ITEMS,
            animate,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Notable things the host may want to react to (sound, persistence)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Notice(Notice),
    GameOver { score: u32 },
}

/// Events not yet collected by the host; the oldest is dropped when full
pub const EVENT_CAPACITY: usize = 16;

pub type GameEvents = ArrayVec<GameEvent, EVENT_CAPACITY>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Marked,
    Cleared,
    Settled,
}

#[derive(Debug, Clone)]
struct Playback {
    steps: Vec<CascadeStep>,
    index: usize,
    stage: Stage,
    remaining_ms: u32,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    /// A non-matching swap is shown until the timer runs out, then undone
    Reverting {
        a: Coord,
        b: Coord,
        remaining_ms: u32,
    },
    Playing(Playback),
    Over,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    factory: TileFactory,
    /// The board as currently displayed
    board: Board,
    phase: Phase,
    mode: PlayMode,
    cursor: Coord,
    selected: Option<Coord>,
    score: u32,
    high_score: u32,
    moves: u32,
    combo: u32,
    items: ItemCounts,
    settings: Settings,
    hint: Option<HintText>,
    notice: Option<(Notice, u32)>,
    /// Events since the host last collected them, oldest first.
    events: GameEvents,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl GameState {
    /// Start a session on a freshly generated board
    pub fn new(config: GameConfig) -> Self {
        let mut factory = TileFactory::seeded(config.seed);
        let board = create_board(&mut factory);
        tracing::info!(seed = config.seed, "new session");
        Self::assemble(config, factory, board)
    }

    /// Start a session on a given board
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        let mut factory = TileFactory::seeded(config.seed);
        factory.reserve_through(board.max_id());
        Self::assemble(config, factory, board)
    }

    fn assemble(config: GameConfig, factory: TileFactory, board: Board) -> Self {
        Self {
            config,
            factory,
            board,
            phase: Phase::Idle,
            mode: PlayMode::Swap,
            cursor: Coord::new(0, 0),
            selected: None,
            score: 0,
            high_score: 0,
            moves: config.max_moves,
            combo: 0,
            items: config.initial_items,
            settings: Settings::default(),
            hint: None,
            notice: None,
            events: GameEvents::new(),
            episode_id: 0,
        }
    }

    /// Apply persisted records (high score, inventory, settings)
    pub fn restore(&mut self, records: Records) {
        self.high_score = self.high_score.max(records.high_score);
        self.items = records.items;
        self.settings = records.settings;
    }

    /// Values the host persists
    pub fn records(&self) -> Records {
        Records {
            high_score: self.high_score,
            items: self.items,
            settings: self.settings,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        match self.phase {
            Phase::Idle => GameStatus::Idle,
            Phase::Reverting { .. } => GameStatus::Swapping,
            Phase::Playing(_) => GameStatus::Resolving,
            Phase::Over => GameStatus::GameOver,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn game_over(&self) -> bool {
        matches!(self.phase, Phase::Over)
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn items(&self) -> ItemCounts {
        self.items
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_ref().map(|h| h.as_str())
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.map(|(n, _)| n)
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Take every pending event in the order they happened
    pub fn take_events(&mut self) -> GameEvents {
        mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_kind_grid(&mut out.board);
        self.board.write_matched_grid(&mut out.matched);
        out.cursor = self.cursor;
        out.selected = self.selected;
        out.status = self.status();
        out.mode = self.mode;
        out.score = self.score;
        out.high_score = self.high_score;
        out.moves = self.moves;
        out.combo = self.combo;
        out.items = self.items;
        out.settings = self.settings;
        out.notice = self.notice();
        out.hint = self.hint;
        out.episode_id = self.episode_id;
        out.seed = self.config.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Click on a tile
    ///
    /// In swap mode the first click selects, clicking the selection again
    /// deselects, an adjacent click swaps, and any other click moves the
    /// selection. In hammer mode the click smashes the tile.
    pub fn select(&mut self, at: Coord) -> bool {
        if !self.is_idle() || !at.in_bounds() {
            return false;
        }
        self.cursor = at;

        if self.mode == PlayMode::Hammer {
            return self.smash(at);
        }

        match self.selected {
            Some(current) if current == at => {
                self.selected = None;
                true
            }
            Some(current) if current.is_adjacent(at) => {
                self.selected = None;
                self.try_swap(current, at)
            }
            _ => {
                if self.board.get(at.row, at.col).is_none() {
                    return false;
                }
                self.selected = Some(at);
                true
            }
        }
    }

    /// Swap two adjacent tiles; returns whether the swap was accepted
    ///
    /// An accepted swap costs a move whether or not it matches. A swap that
    /// makes no match is undone after the revert delay.
    pub fn try_swap(&mut self, a: Coord, b: Coord) -> bool {
        if !self.is_idle() || self.moves == 0 {
            return false;
        }
        if !a.in_bounds() || !b.in_bounds() || !a.is_adjacent(b) {
            return false;
        }
        if self.board.get(a.row, a.col).is_none() || self.board.get(b.row, b.col).is_none() {
            return false;
        }

        self.moves -= 1;
        self.selected = None;
        self.hint = None;

        let mut swapped = self.board.clone();
        swapped.swap(a, b);

        if find_matches(&swapped).is_empty() {
            tracing::debug!(?a, ?b, moves = self.moves, "swap made no match");
            if self.config.animate {
                self.board = swapped;
                self.phase = Phase::Reverting {
                    a,
                    b,
                    remaining_ms: SWAP_REVERT_MS,
                };
            } else {
                self.settle();
            }
        } else {
            tracing::debug!(?a, ?b, moves = self.moves, "swap accepted");
            self.start_resolution(swapped);
        }
        true
    }

    /// Toggle hammer mode; arming needs at least one hammer
    pub fn arm_hammer(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        match self.mode {
            PlayMode::Hammer => {
                self.mode = PlayMode::Swap;
                true
            }
            PlayMode::Swap if self.items.hammer > 0 => {
                self.mode = PlayMode::Hammer;
                self.selected = None;
                true
            }
            PlayMode::Swap => false,
        }
    }

    /// Hammer one tile: remove it, drop and refill, then resolve
    fn smash(&mut self, at: Coord) -> bool {
        if self.board.get(at.row, at.col).is_none() || !self.items.take(ItemKind::Hammer) {
            return false;
        }
        self.mode = PlayMode::Swap;
        self.selected = None;
        self.hint = None;

        let mut cleared = self.board.clone();
        cleared.take(at.row, at.col);
        let settled = apply_gravity(&cleared, &mut self.factory);
        tracing::debug!(?at, hammers = self.items.hammer, "hammer used");
        self.start_resolution(settled);
        true
    }

    /// Shuffle every tile, then resolve any matches the shuffle created
    pub fn use_shuffle(&mut self) -> bool {
        if !self.is_idle() || !self.items.take(ItemKind::Shuffle) {
            return false;
        }
        self.selected = None;
        self.hint = None;
        let shuffled = shuffle_board(&self.board, self.factory.rng_mut());
        tracing::debug!(shuffles = self.items.shuffle, "shuffle used");
        self.start_resolution(shuffled);
        true
    }

    /// Spend an extra-moves item for [`EXTRA_MOVES_BONUS`] moves
    pub fn use_extra_moves(&mut self) -> bool {
        if !self.is_idle() || !self.items.take(ItemKind::ExtraMoves) {
            return false;
        }
        self.moves = self.moves.saturating_add(EXTRA_MOVES_BONUS);
        self.show_notice(Notice::MovesAdded(EXTRA_MOVES_BONUS));
        true
    }

    /// Ask `source` for a suggestion; failures fall back to a static hint
    pub fn request_hint(&mut self, source: &mut dyn HintSource) -> bool {
        if !self.is_idle() || self.moves == 0 {
            return false;
        }
        let ctx = HintContext {
            board: &self.board,
            score: self.score,
            high_score: self.high_score,
            moves_left: self.moves,
        };
        let text = hint_or_fallback(source, &ctx);
        self.hint = Some(hint_text(&text));
        true
    }

    /// Flip one setting and return its new value
    pub fn toggle_setting(&mut self, setting: Setting) -> bool {
        self.settings.toggle(setting)
    }

    /// New board and counters; high score and settings survive
    pub fn restart(&mut self) {
        self.board = create_board(&mut self.factory);
        self.phase = Phase::Idle;
        self.mode = PlayMode::Swap;
        self.cursor = Coord::new(0, 0);
        self.selected = None;
        self.score = 0;
        self.moves = self.config.max_moves;
        self.combo = 0;
        self.items = self.config.initial_items;
        self.hint = None;
        self.notice = None;
        self.events.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        tracing::info!(episode = self.episode_id, "session restarted");
    }

    /// Forget the high score and restart
    pub fn clear_records(&mut self) {
        self.high_score = 0;
        self.restart();
    }

    fn start_resolution(&mut self, board: Board) {
        self.combo = 0;
        let resolution = resolve(&board, &mut self.factory);

        if !self.config.animate || resolution.steps.is_empty() {
            for step in &resolution.steps {
                self.apply_step(step.combo, step.points, &step.awards);
            }
            self.board = resolution.board;
            self.settle();
            return;
        }

        let first = &resolution.steps[0];
        self.board = first.marked.clone();
        self.apply_step(first.combo, first.points, &first.awards);
        self.phase = Phase::Playing(Playback {
            steps: resolution.steps,
            index: 0,
            stage: Stage::Marked,
            remaining_ms: MATCH_FLASH_MS,
        });
    }

    fn apply_step(&mut self, combo: u32, points: u32, awards: &Awards) {
        self.combo = combo;
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);
        for &item in awards {
            self.items.add(item, 1);
            self.show_notice(Notice::Award(item));
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        self.notice = Some((notice, NOTICE_MS));
        self.push_event(GameEvent::Notice(notice));
    }

    /// Playback finished (or no playback was needed)
    fn settle(&mut self) {
        self.board.clear_marks();
        if self.moves == 0 {
            self.phase = Phase::Over;
            self.push_event(GameEvent::GameOver { score: self.score });
            tracing::info!(score = self.score, high_score = self.high_score, "game over");
        } else {
            self.phase = Phase::Idle;
        }
    }

    /// Move playback to its next stage
    fn advance_playback(&mut self) {
        let Phase::Playing(pb) = &mut self.phase else {
            return;
        };
        match pb.stage {
            Stage::Marked => {
                pb.stage = Stage::Cleared;
                pb.remaining_ms = CLEAR_PAUSE_MS;
                self.board = pb.steps[pb.index].cleared.clone();
            }
            Stage::Cleared => {
                pb.stage = Stage::Settled;
                pb.remaining_ms = GRAVITY_SETTLE_MS;
                self.board = pb.steps[pb.index].settled.clone();
            }
            Stage::Settled => {
                pb.index += 1;
                let Some(step) = pb.steps.get(pb.index) else {
                    self.settle();
                    return;
                };
                pb.stage = Stage::Marked;
                pb.remaining_ms = MATCH_FLASH_MS;
                self.board = step.marked.clone();
                let (combo, points, awards) = (step.combo, step.points, step.awards.clone());
                self.apply_step(combo, points, &awards);
            }
        }
    }

    /// Advance timers by `elapsed_ms`; returns true if anything visible changed
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut changed = false;

        if let Some((_, remaining)) = self.notice.as_mut() {
            *remaining = remaining.saturating_sub(elapsed_ms);
            if *remaining == 0 {
                self.notice = None;
                changed = true;
            }
        }

        let mut budget = elapsed_ms;
        loop {
            match &mut self.phase {
                Phase::Reverting { a, b, remaining_ms } => {
                    if budget < *remaining_ms {
                        *remaining_ms -= budget;
                        break;
                    }
                    let (a, b) = (*a, *b);
                    self.board.swap(a, b);
                    self.settle();
                    changed = true;
                    break;
                }
                Phase::Playing(pb) => {
                    if budget < pb.remaining_ms {
                        pb.remaining_ms -= budget;
                        break;
                    }
                    budget -= pb.remaining_ms;
                    self.advance_playback();
                    changed = true;
                }
                Phase::Idle | Phase::Over => break,
            }
        }

        changed
    }

    fn move_cursor(&mut self, d_row: i32, d_col: i32) -> bool {
        let next = self.cursor.offset_clamped(d_row, d_col);
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::CursorUp => self.move_cursor(-1, 0),
            GameAction::CursorDown => self.move_cursor(1, 0),
            GameAction::CursorLeft => self.move_cursor(0, -1),
            GameAction::CursorRight => self.move_cursor(0, 1),
            GameAction::Select => self.select(self.cursor),
            GameAction::ArmHammer => self.arm_hammer(),
            GameAction::Shuffle => self.use_shuffle(),
            GameAction::ExtraMoves => self.use_extra_moves(),
            GameAction::Hint => self.request_hint(&mut LocalHintSource),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::ToggleMusic => {
                self.toggle_setting(Setting::Music);
                true
            }
            GameAction::ToggleSound => {
                self.toggle_setting(Setting::Sound);
                true
            }
            GameAction::ToggleVibration => {
                self.toggle_setting(Setting::Vibration);
                true
            }
            GameAction::ClearRecords => {
                self.clear_records();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
