//! Board generator - a full starting board with no ready-made matches
//!
//! Cells are filled in row-major order. For each cell a kind is drawn until it
//! does not complete a run of three with the two cells to its left or the two
//! cells above it. Only already-filled neighbours are consulted, so the check
//! is local and never backtracks.

use rand::Rng;

use crate::board::Board;
use crate::rng::random_kind;
use crate::tile::TileFactory;
use crate::types::{TileKind, GRID_SIZE};

/// Would `kind` at `(row, col)` finish a horizontal or vertical run of three?
fn completes_run(board: &Board, row: usize, col: usize, kind: TileKind) -> bool {
    let left = col >= 2
        && board.kind_at(row, col - 1) == Some(kind)
        && board.kind_at(row, col - 2) == Some(kind);
    let up = row >= 2
        && board.kind_at(row - 1, col) == Some(kind)
        && board.kind_at(row - 2, col) == Some(kind);
    left || up
}

/// Generate a fully populated board free of 3-in-a-row matches
pub fn create_board<R: Rng>(factory: &mut TileFactory<R>) -> Board {
    let mut board = Board::empty();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            // At most two kinds are excluded, so this terminates quickly.
            let kind = loop {
                let candidate = random_kind(factory.rng_mut());
                if !completes_run(&board, row, col, candidate) {
                    break candidate;
                }
            };
            let tile = factory.make(kind, row, col);
            board.place(row, col, tile);
        }
    }
    tracing::debug!(issued = factory.issued(), "generated board");
    board
}
