//! Hint collaborator - advisory move suggestions
//!
//! A [`HintSource`] receives a [`HintContext`] and returns a short suggestion.
//! Sources may fail; [`hint_or_fallback`] is the boundary that turns any
//! failure into [`FALLBACK_HINT`]. Hints are text only and never touch game
//! state.

use std::fmt::Write as _;

use thiserror::Error;

use crate::board::Board;
use crate::matches::find_matches;
use crate::types::{Coord, GRID_SIZE};

/// Shown whenever a hint source cannot produce a suggestion
pub const FALLBACK_HINT: &str = "Chain combos to earn extra moves!";

#[derive(Debug, Error)]
pub enum HintError {
    #[error("no swap on this board creates a match")]
    NoMove,
    #[error("hint source unavailable: {0}")]
    Unavailable(String),
}

/// What a hint source gets to look at
#[derive(Debug, Clone, Copy)]
pub struct HintContext<'a> {
    pub board: &'a Board,
    pub score: u32,
    pub high_score: u32,
    pub moves_left: u32,
}

impl HintContext<'_> {
    /// Plain-text description of the game, one grid row per line
    ///
    /// ```text
    /// row 0: blue red green ...
    /// ...
    /// score: 120, high score: 400, moves left: 17
    /// ```
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for row in 0..GRID_SIZE {
            let _ = write!(out, "row {row}:");
            for col in 0..GRID_SIZE {
                let name = self.board.kind_at(row, col).map_or("empty", |k| k.as_str());
                out.push(' ');
                out.push_str(name);
            }
            out.push('\n');
        }
        let _ = write!(
            out,
            "score: {}, high score: {}, moves left: {}",
            self.score, self.high_score, self.moves_left
        );
        out
    }
}

/// Something that can suggest a move
pub trait HintSource {
    fn suggest(&mut self, ctx: &HintContext<'_>) -> Result<String, HintError>;
}

/// Searches the board for a swap that creates a match
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHintSource;

impl HintSource for LocalHintSource {
    fn suggest(&mut self, ctx: &HintContext<'_>) -> Result<String, HintError> {
        let (a, b) = find_hint_swap(ctx.board).ok_or(HintError::NoMove)?;
        Ok(format!(
            "Try swapping row {} col {} with row {} col {}",
            a.row + 1,
            a.col + 1,
            b.row + 1,
            b.col + 1
        ))
    }
}

/// First adjacent swap that produces a match
///
/// Cells are visited in row-major order; for each cell the right neighbour is
/// tried before the one below.
pub fn find_hint_swap(board: &Board) -> Option<(Coord, Coord)> {
    let mut probe = board.clone();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let here = Coord::new(row, col);
            for there in [Coord::new(row, col + 1), Coord::new(row + 1, col)] {
                if !there.in_bounds()
                    || probe.get(row, col).is_none()
                    || probe.get(there.row, there.col).is_none()
                {
                    continue;
                }
                probe.swap(here, there);
                let hit = !find_matches(&probe).is_empty();
                probe.swap(here, there);
                if hit {
                    return Some((here, there));
                }
            }
        }
    }
    None
}

/// Ask `source` for a hint, degrading to [`FALLBACK_HINT`] on failure
pub fn hint_or_fallback(source: &mut dyn HintSource, ctx: &HintContext<'_>) -> String {
    match source.suggest(ctx) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            tracing::warn!("hint source returned an empty suggestion");
            FALLBACK_HINT.to_string()
        }
        Err(err) => {
            tracing::warn!(error = %err, "hint source failed");
            FALLBACK_HINT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_SWAP: [&str; GRID_SIZE] = [
        "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP", "BRGYPOBR",
        "YPOBRGYP",
    ];

    struct Broken;

    impl HintSource for Broken {
        fn suggest(&mut self, _ctx: &HintContext<'_>) -> Result<String, HintError> {
            Err(HintError::Unavailable("offline".into()))
        }
    }

    fn ctx(board: &Board) -> HintContext<'_> {
        HintContext {
            board,
            score: 120,
            high_score: 400,
            moves_left: 17,
        }
    }

    #[test]
    fn test_no_hint_on_dead_board() {
        let board = Board::from_rows(&NO_SWAP).unwrap();
        assert_eq!(find_hint_swap(&board), None);
        assert!(matches!(
            LocalHintSource.suggest(&ctx(&board)),
            Err(HintError::NoMove)
        ));
    }

    #[test]
    fn test_finds_the_only_swap() {
        let mut rows = NO_SWAP;
        rows[6] = "PRGYPOBR";
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(
            find_hint_swap(&board),
            Some((Coord::new(6, 0), Coord::new(6, 1)))
        );
        let text = LocalHintSource.suggest(&ctx(&board)).unwrap();
        assert_eq!(text, "Try swapping row 7 col 1 with row 7 col 2");
    }

    #[test]
    fn test_fallback_on_error() {
        let board = Board::from_rows(&NO_SWAP).unwrap();
        assert_eq!(hint_or_fallback(&mut Broken, &ctx(&board)), FALLBACK_HINT);
        assert_eq!(
            hint_or_fallback(&mut LocalHintSource, &ctx(&board)),
            FALLBACK_HINT
        );
    }

    #[test]
    fn test_summary_lists_rows_and_counters() {
        let board = Board::from_rows(&NO_SWAP).unwrap();
        let summary = ctx(&board).summary();
        let lines: Vec<_> = summary.lines().collect();
        assert_eq!(lines.len(), GRID_SIZE + 1);
        assert!(lines[0].starts_with("row 0: blue red green yellow"));
        assert_eq!(lines[8], "score: 120, high score: 400, moves left: 17");
    }
}
