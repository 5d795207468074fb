//! Board module - manages the game grid
//!
//! The board is an 8x8 grid where each cell is empty or owns exactly one tile.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col), row 0 at the top, col 0 at the left.
//!
//! Engine operations never mutate a board in place from the caller's point of
//! view: they take `&Board` and hand back a fresh value.

use crate::matches::MatchSet;
use crate::tile::{Tile, TileId};
use crate::types::{Coord, TileKind, GRID_SIZE};

/// Total number of cells on the board
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Manhattan adjacency of two cells: exactly one step horizontally or vertically
pub fn is_adjacent(r1: usize, c1: usize, r2: usize, c2: usize) -> bool {
    Coord::new(r1, c1).is_adjacent(Coord::new(r2, c2))
}

/// The game board - 8x8 using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Option<Tile>; CELL_COUNT],
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE
    }

    /// Flat index of `(row, col)`
    ///
    /// # Panics
    ///
    /// Out-of-bounds coordinates are a caller bug and panic with the coordinate.
    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        assert!(
            Self::in_bounds(row, col),
            "board coordinate ({row}, {col}) is outside the {GRID_SIZE}x{GRID_SIZE} grid"
        );
        row * GRID_SIZE + col
    }

    /// Tile at `(row, col)`, if any
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.cells[Self::index(row, col)].as_ref()
    }

    pub fn kind_at(&self, row: usize, col: usize) -> Option<TileKind> {
        self.get(row, col).map(|t| t.kind)
    }

    /// Put `tile` at `(row, col)`, rewriting its coordinates. Returns the previous occupant.
    pub fn place(&mut self, row: usize, col: usize, mut tile: Tile) -> Option<Tile> {
        tile.row = row;
        tile.col = col;
        self.cells[Self::index(row, col)].replace(tile)
    }

    /// Remove and return the tile at `(row, col)`
    pub fn take(&mut self, row: usize, col: usize) -> Option<Tile> {
        self.cells[Self::index(row, col)].take()
    }

    /// Exchange the contents of two cells, keeping coordinates in sync
    pub fn swap(&mut self, a: Coord, b: Coord) {
        let ia = Self::index(a.row, a.col);
        let ib = Self::index(b.row, b.col);
        self.cells.swap(ia, ib);
        for (idx, at) in [(ia, a), (ib, b)] {
            if let Some(tile) = self.cells[idx].as_mut() {
                tile.row = at.row;
                tile.col = at.col;
            }
        }
    }

    /// Board with the tiles at `matches` flagged as matched
    pub fn marked(&self, matches: &MatchSet) -> Board {
        let mut out = self.clone();
        for at in matches.iter() {
            if let Some(tile) = out.cells[Self::index(at.row, at.col)].as_mut() {
                tile.is_matched = true;
            }
        }
        out
    }

    /// Board with the cells in `matches` emptied
    pub fn without(&self, matches: &MatchSet) -> Board {
        let mut out = self.clone();
        for at in matches.iter() {
            out.cells[Self::index(at.row, at.col)] = None;
        }
        out
    }

    /// Clear every transient matched flag
    pub fn clear_marks(&mut self) {
        for tile in self.cells.iter_mut().flatten() {
            tile.is_matched = false;
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Occupied tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    /// Raw row-major cells
    pub fn cells(&self) -> &[Option<Tile>; CELL_COUNT] {
        &self.cells
    }

    /// Largest tile id on the board (0 when empty)
    pub fn max_id(&self) -> u64 {
        self.tiles().map(|t| t.id.0).max().unwrap_or(0)
    }

    /// Every occupied cell's tile reports that cell's coordinates
    pub fn positions_consistent(&self) -> bool {
        self.cells.iter().enumerate().all(|(i, cell)| match cell {
            Some(t) => t.row == i / GRID_SIZE && t.col == i % GRID_SIZE,
            None => true,
        })
    }

    /// Parse a board from display letters, one string per row
    ///
    /// `B R G Y P O` select kinds and `.` leaves a cell empty. Ids are
    /// assigned 1.. over occupied cells in row-major order. Returns `None`
    /// for the wrong number of rows/columns or an unknown letter.
    ///
    /// ```
    /// use tui_match3_core::Board;
    ///
    /// let board = Board::from_rows(&[
    ///     "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP",
    ///     "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "........",
    /// ])
    /// .unwrap();
    /// assert_eq!(board.empty_count(), 8);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Option<Board> {
        if rows.len() != GRID_SIZE {
            return None;
        }
        let mut board = Board::empty();
        let mut next_id = 1;
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != GRID_SIZE {
                return None;
            }
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = TileKind::from_letter(ch)?;
                board.place(row, col, fixture_tile(next_id, kind));
                next_id += 1;
            }
        }
        Some(board)
    }

    /// Render as display letters, one string per row (`.` for empty)
    pub fn to_rows(&self) -> [String; GRID_SIZE] {
        std::array::from_fn(|row| {
            (0..GRID_SIZE)
                .map(|col| self.kind_at(row, col).map_or('.', |k| k.letter()))
                .collect()
        })
    }

    /// Write tile kinds into a fixed grid (for snapshots)
    pub fn write_kind_grid(&self, out: &mut [[Option<TileKind>; GRID_SIZE]; GRID_SIZE]) {
        for (row, line) in out.iter_mut().enumerate() {
            for (col, slot) in line.iter_mut().enumerate() {
                *slot = self.cells[row * GRID_SIZE + col].map(|t| t.kind);
            }
        }
    }

    /// Write matched flags into a fixed grid (for snapshots)
    pub fn write_matched_grid(&self, out: &mut [[bool; GRID_SIZE]; GRID_SIZE]) {
        for (row, line) in out.iter_mut().enumerate() {
            for (col, slot) in line.iter_mut().enumerate() {
                *slot = self.cells[row * GRID_SIZE + col].is_some_and(|t| t.is_matched);
            }
        }
    }
}

fn fixture_tile(id: u64, kind: TileKind) -> Tile {
    Tile {
        id: TileId(id),
        kind,
        row: 0,
        col: 0,
        is_matched: false,
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_rows(&[
            "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP", "BRGYPOBR",
            "YPOBRGYP",
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.empty_count(), CELL_COUNT);
        assert!(!board.is_full());
        assert_eq!(board.max_id(), 0);
    }

    #[test]
    fn test_from_rows_assigns_positions_and_ids() {
        let board = sample();
        assert!(board.is_full());
        assert!(board.positions_consistent());
        assert_eq!(board.get(0, 0).map(|t| t.id), Some(TileId(1)));
        assert_eq!(board.get(7, 7).map(|t| t.id), Some(TileId(64)));
        assert_eq!(board.kind_at(1, 0), Some(TileKind::Yellow));
        assert_eq!(board.to_rows()[1], "YPOBRGYP");
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Board::from_rows(&["BRG"]).is_none());
        let mut rows = ["BRGYPOBR"; GRID_SIZE];
        rows[3] = "BRGYPOBX";
        assert!(Board::from_rows(&rows).is_none());
    }

    #[test]
    fn test_swap_updates_coordinates() {
        let mut board = sample();
        let a = *board.get(0, 0).unwrap();
        let b = *board.get(0, 1).unwrap();
        board.swap(Coord::new(0, 0), Coord::new(0, 1));
        assert_eq!(board.get(0, 0).unwrap().id, b.id);
        assert_eq!(board.get(0, 1).unwrap().id, a.id);
        assert!(board.positions_consistent());
    }

    #[test]
    fn test_swap_with_empty_cell() {
        let mut board = sample();
        board.take(3, 3);
        board.swap(Coord::new(3, 3), Coord::new(2, 3));
        assert!(board.get(2, 3).is_none());
        assert_eq!(board.get(3, 3).map(|t| t.row), Some(3));
    }

    #[test]
    fn test_place_rewrites_coordinates() {
        let mut board = Board::empty();
        let tile = fixture_tile(5, TileKind::Red);
        assert!(board.place(4, 6, tile).is_none());
        let placed = board.get(4, 6).unwrap();
        assert_eq!((placed.row, placed.col), (4, 6));
    }

    #[test]
    fn test_adjacency() {
        assert!(is_adjacent(0, 0, 0, 1));
        assert!(is_adjacent(2, 3, 1, 3));
        assert!(!is_adjacent(0, 0, 1, 1));
        assert!(!is_adjacent(0, 0, 0, 0));
    }

    #[test]
    #[should_panic(expected = "(0, 8)")]
    fn test_out_of_bounds_get_panics() {
        sample().get(0, 8);
    }

    #[test]
    fn test_write_kind_grid() {
        let mut board = sample();
        board.take(0, 0);
        let mut grid = [[None; GRID_SIZE]; GRID_SIZE];
        board.write_kind_grid(&mut grid);
        assert_eq!(grid[0][0], None);
        assert_eq!(grid[0][1], Some(TileKind::Red));
    }
}
