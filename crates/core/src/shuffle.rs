//! Shuffler - redistributes the existing tiles across the board
//!
//! Tiles keep their id, kind and matched flag; only their position changes.
//! The result may contain matches, which the caller resolves.

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, CELL_COUNT};
use crate::tile::Tile;
use crate::types::GRID_SIZE;

/// Fisher-Yates permutation of all tiles, re-laid in row-major order
///
/// If the board had empty cells, the trailing cells of the result stay empty.
pub fn shuffle_board<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Board {
    let mut tiles: ArrayVec<Tile, CELL_COUNT> = board.tiles().copied().collect();
    tiles.shuffle(rng);

    let mut out = Board::empty();
    for (i, tile) in tiles.into_iter().enumerate() {
        out.place(i / GRID_SIZE, i % GRID_SIZE, tile);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    fn sorted_ids(board: &Board) -> Vec<u64> {
        let mut ids: Vec<u64> = board.tiles().map(|t| t.id.0).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_shuffle_preserves_tiles() {
        let board = Board::from_rows(&[
            "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP", "BRGYPOBR",
            "YPOBRGYP",
        ])
        .unwrap();
        let out = shuffle_board(&board, &mut seeded(11));
        assert_eq!(sorted_ids(&out), sorted_ids(&board));
        assert!(out.positions_consistent());
        for tile in out.tiles() {
            let original = board.tiles().find(|t| t.id == tile.id).unwrap();
            assert_eq!(original.kind, tile.kind);
        }
        assert_ne!(out, board);
    }

    #[test]
    fn test_shuffle_packs_tiles_at_the_front() {
        let board = Board::from_rows(&[
            "BR......", "........", "......G.", "........", "........", "........", "........",
            ".......O",
        ])
        .unwrap();
        let out = shuffle_board(&board, &mut seeded(2));
        assert_eq!(out.empty_count(), 60);
        assert!((0..4).all(|col| out.get(0, col).is_some()));
        assert_eq!(sorted_ids(&out), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_shuffle_keeps_matched_flag() {
        let mut board = Board::from_rows(&[
            "B.......", "........", "........", "........", "........", "........", "........",
            "........",
        ])
        .unwrap();
        let mut tile = *board.get(0, 0).unwrap();
        tile.is_matched = true;
        board.place(0, 0, tile);
        let out = shuffle_board(&board, &mut seeded(2));
        assert!(out.get(0, 0).unwrap().is_matched);
    }
}
