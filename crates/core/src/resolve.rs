//! Resolution loop - the combo engine
//!
//! After a swap or a power-up removal the board is resolved by repeating
//! match -> score -> award -> mark -> remove -> gravity until no match is
//! left. Each iteration is one [`CascadeStep`]; the combo counter starts at 1
//! for the first iteration of every resolution.
//!
//! [`Cascade`] yields the steps lazily, which lets a host pace the playback;
//! [`resolve`] drains it and totals the result.

use rand::Rng;

use crate::board::Board;
use crate::gravity::apply_gravity;
use crate::matches::{find_matches, MatchSet};
use crate::scoring::{cascade_awards, cascade_points, Awards};
use crate::tile::TileFactory;
use crate::types::ItemCounts;

/// One iteration of the resolution loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeStep {
    /// 1-based combo count of this iteration
    pub combo: u32,
    pub matched: MatchSet,
    pub points: u32,
    pub awards: Awards,
    /// Board with matched tiles flagged
    pub marked: Board,
    /// Board with matched tiles removed
    pub cleared: Board,
    /// Board after gravity and refill
    pub settled: Board,
}

/// Totals of a complete resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Final stable board
    pub board: Board,
    pub score_delta: u32,
    pub awards: ItemCounts,
    /// Number of iterations that found matches (0 if the input was stable)
    pub combo: u32,
    pub steps: Vec<CascadeStep>,
}

impl Resolution {
    /// Whether anything matched at all
    pub fn matched(&self) -> bool {
        self.combo > 0
    }
}

/// Lazy iterator over cascade steps
pub struct Cascade<'a, R: Rng> {
    board: Board,
    combo: u32,
    factory: &'a mut TileFactory<R>,
}

impl<'a, R: Rng> Cascade<'a, R> {
    pub fn new(board: &Board, factory: &'a mut TileFactory<R>) -> Self {
        let mut board = board.clone();
        board.clear_marks();
        Self {
            board,
            combo: 0,
            factory,
        }
    }

    /// Current board: the latest settled board, or the input if no step ran yet
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}

impl<R: Rng> Iterator for Cascade<'_, R> {
    type Item = CascadeStep;

    fn next(&mut self) -> Option<CascadeStep> {
        let matched = find_matches(&self.board);
        if matched.is_empty() {
            return None;
        }

        self.combo += 1;
        let combo = self.combo;
        let points = cascade_points(matched.len(), combo);
        let awards = cascade_awards(matched.len(), combo);

        let marked = self.board.marked(&matched);
        let cleared = marked.without(&matched);
        let settled = apply_gravity(&cleared, self.factory);
        self.board = settled.clone();

        tracing::debug!(
            combo,
            matched = matched.len(),
            points,
            awards = awards.len(),
            "cascade step"
        );

        Some(CascadeStep {
            combo,
            matched,
            points,
            awards,
            marked,
            cleared,
            settled,
        })
    }
}

/// Run the resolution loop to completion
pub fn resolve<R: Rng>(board: &Board, factory: &mut TileFactory<R>) -> Resolution {
    let mut cascade = Cascade::new(board, factory);
    let mut steps = Vec::new();
    let mut score_delta = 0u32;
    let mut awards = ItemCounts::default();

    for step in cascade.by_ref() {
        score_delta = score_delta.saturating_add(step.points);
        for &item in &step.awards {
            awards.add(item, 1);
        }
        steps.push(step);
    }

    let combo = cascade.combo();
    Resolution {
        board: cascade.into_board(),
        score_delta,
        awards,
        combo,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, ItemKind};

    #[test]
    fn test_stable_board_resolves_to_itself() {
        let board = Board::from_rows(&[
            "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP", "BRGYPOBR",
            "YPOBRGYP",
        ])
        .unwrap();
        let mut factory = TileFactory::seeded(1);
        let res = resolve(&board, &mut factory);
        assert!(!res.matched());
        assert_eq!(res.score_delta, 0);
        assert!(res.steps.is_empty());
        assert_eq!(res.board, board);
    }

    #[test]
    fn test_first_step_scores_and_records_boards() {
        let board = Board::from_rows(&[
            "BPOBPOBP", "POBPOBPO", "OBPOBPOB", "BPOBPOBP", "POBPOBPO", "OBPOBPOB", "BPOBPOBP",
            "RRRROBPO",
        ])
        .unwrap();
        let mut factory = TileFactory::seeded(4);
        factory.reserve_through(board.max_id());
        let res = resolve(&board, &mut factory);

        let first = &res.steps[0];
        assert_eq!(first.combo, 1);
        assert_eq!(first.points, 40);
        assert_eq!(first.awards.as_slice(), &[ItemKind::Hammer]);
        assert!(first.marked.get(7, 0).unwrap().is_matched);
        assert!(!first.marked.get(6, 0).unwrap().is_matched);
        assert!(first.cleared.get(7, 0).is_none());
        assert_eq!(first.cleared.empty_count(), 4);
        assert!(first.settled.is_full());

        let fours = res.steps.iter().filter(|s| s.matched.len() == 4).count() as u32;
        assert_eq!(res.awards.hammer, fours);
        assert!(res.awards.hammer >= 1);
        assert!(res.score_delta >= 40);
        assert!(res.board.is_full());
        assert!(find_matches(&res.board).is_empty());
        assert!(!res.board.tiles().any(|t| t.is_matched));
    }

    #[test]
    fn test_cascade_is_lazy() {
        let board = Board::from_rows(&[
            "BRGYPOBR", "GYPOBRGY", "POBRRRPO", "BRGYPOBR", "GYPOBRGY", "POBRGYPO", "BRGYPOBR",
            "GYPOBRGY",
        ])
        .unwrap();
        let mut factory = TileFactory::seeded(8);
        let mut cascade = Cascade::new(&board, &mut factory);
        assert_eq!(cascade.combo(), 0);
        let step = cascade.next().unwrap();
        assert_eq!(cascade.combo(), 1);
        assert_eq!(step.points, 30);
        assert!(step.matched.contains(Coord::new(2, 4)));
        assert_eq!(cascade.board(), &step.settled);
    }

    #[test]
    fn test_third_cascade_awards_one_extra_moves() {
        // Red column clears, greens drop into a row, then yellows do.
        let board = Board::from_rows(&[
            "BPOBPOBP", "POBPOBPO", "OBPOBPOB", "BPOBPOBP", "GOBPOBPO", "RBPOBPOB", "RYYBPOBP",
            "RGGYOBPO",
        ])
        .unwrap();
        for seed in 0..20 {
            let mut factory = TileFactory::seeded(seed);
            factory.reserve_through(board.max_id());
            let res = resolve(&board, &mut factory);

            assert!(res.combo >= 3, "seed {seed} stopped at combo {}", res.combo);
            assert_eq!(res.awards.extra_moves, 1, "seed {seed}");
            assert!(res.steps[2].awards.contains(&ItemKind::ExtraMoves));
            assert!(res.steps[2].matched.contains(Coord::new(7, 3)));
            assert!(res
                .steps
                .iter()
                .filter(|s| s.combo != 3)
                .all(|s| !s.awards.contains(&ItemKind::ExtraMoves)));
        }
    }
}
