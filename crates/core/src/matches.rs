//! Match detection - runs of three or more same-kind tiles
//!
//! The detector slides a window of three cells along every row and every
//! column. Longer runs are covered by overlapping windows, and a tile that is
//! part of both a horizontal and a vertical run is recorded once.

use crate::board::{Board, CELL_COUNT};
use crate::types::{Coord, GRID_SIZE};

/// Deduplicated set of board cells, iterated in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSet {
    cells: [bool; CELL_COUNT],
    len: usize,
}

impl MatchSet {
    pub const fn new() -> Self {
        Self {
            cells: [false; CELL_COUNT],
            len: 0,
        }
    }

    /// Add a cell; returns false if it was already present
    ///
    /// # Panics
    ///
    /// Panics with the coordinate when `at` is off the grid.
    pub fn insert(&mut self, at: Coord) -> bool {
        assert!(
            at.in_bounds(),
            "match coordinate ({}, {}) is outside the {GRID_SIZE}x{GRID_SIZE} grid",
            at.row,
            at.col
        );
        let idx = at.row * GRID_SIZE + at.col;
        if self.cells[idx] {
            return false;
        }
        self.cells[idx] = true;
        self.len += 1;
        true
    }

    pub fn contains(&self, at: Coord) -> bool {
        at.in_bounds() && self.cells[at.row * GRID_SIZE + at.col]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, hit)| **hit)
            .map(|(i, _)| Coord::new(i / GRID_SIZE, i % GRID_SIZE))
    }
}

impl Default for MatchSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Coord> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = MatchSet::new();
        for at in iter {
            set.insert(at);
        }
        set
    }
}

/// Three cells that hold tiles of one kind
fn same_kind(board: &Board, cells: [(usize, usize); 3]) -> bool {
    let [a, b, c] = cells.map(|(r, c)| board.kind_at(r, c));
    matches!((a, b, c), (Some(x), Some(y), Some(z)) if x == y && y == z)
}

/// Every cell that belongs to a horizontal or vertical run of three or more
pub fn find_matches(board: &Board) -> MatchSet {
    let mut set = MatchSet::new();

    for row in 0..GRID_SIZE {
        for col in 0..=GRID_SIZE - 3 {
            if same_kind(board, [(row, col), (row, col + 1), (row, col + 2)]) {
                for c in col..col + 3 {
                    set.insert(Coord::new(row, c));
                }
            }
        }
    }

    for col in 0..GRID_SIZE {
        for row in 0..=GRID_SIZE - 3 {
            if same_kind(board, [(row, col), (row + 1, col), (row + 2, col)]) {
                for r in row..row + 3 {
                    set.insert(Coord::new(r, col));
                }
            }
        }
    }

    set
}
