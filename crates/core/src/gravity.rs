//! Gravity resolver - compacts columns and refills from the top
//!
//! Each column is handled independently. Surviving tiles slide down into the
//! lowest free slots keeping their relative order, then the vacated cells at
//! the top are filled with fresh tiles. Refills are not checked for matches;
//! the next cascade iteration picks those up.

use rand::Rng;

use crate::board::Board;
use crate::tile::TileFactory;
use crate::types::GRID_SIZE;

/// Drop surviving tiles and fill every empty cell
///
/// A board without empty cells comes back unchanged and draws no randomness.
pub fn apply_gravity<R: Rng>(board: &Board, factory: &mut TileFactory<R>) -> Board {
    let mut out = board.clone();
    if out.is_full() {
        return out;
    }

    for col in 0..GRID_SIZE {
        // Write pointer: one past the next slot to fill, counting from the bottom.
        let mut write = GRID_SIZE;
        for row in (0..GRID_SIZE).rev() {
            if let Some(tile) = out.take(row, col) {
                write -= 1;
                out.place(write, col, tile);
            }
        }
        for row in 0..write {
            let tile = factory.generate(row, col);
            out.place(row, col, tile);
        }
    }

    out
}
