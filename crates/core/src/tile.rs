//! Tile module - tile values and the tile factory
//!
//! A [`Tile`] is a small `Copy` value. Its `row`/`col` always mirror the cell
//! that holds it; the [`Board`](crate::Board) rewrites them whenever a tile is
//! placed. Ids come from a counter owned by the [`TileFactory`], so they are
//! unique within a session and stable while a tile moves around.

use rand::Rng;

use crate::rng::{random_kind, seeded, GameRng};
use crate::types::{TileKind, GRID_SIZE};

/// Opaque, session-unique tile identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

/// A single typed tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub kind: TileKind,
    pub row: usize,
    pub col: usize,
    /// Transient flag set while the tile is part of a match being displayed
    pub is_matched: bool,
}

/// Creates tiles with random kinds and fresh ids
#[derive(Debug, Clone)]
pub struct TileFactory<R = GameRng> {
    rng: R,
    next_id: u64,
}

impl TileFactory<GameRng> {
    /// Factory backed by the default RNG
    pub fn seeded(seed: u64) -> Self {
        Self::new(seeded(seed))
    }
}

impl<R: Rng> TileFactory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, next_id: 1 }
    }

    /// Create a tile with a uniformly random kind at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn generate(&mut self, row: usize, col: usize) -> Tile {
        let kind = random_kind(&mut self.rng);
        self.make(kind, row, col)
    }

    /// Create a tile of a fixed kind with a fresh id
    pub fn make(&mut self, kind: TileKind, row: usize, col: usize) -> Tile {
        assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "tile coordinate ({row}, {col}) is outside the {GRID_SIZE}x{GRID_SIZE} grid"
        );
        let id = TileId(self.next_id);
        self.next_id += 1;
        Tile {
            id,
            kind,
            row,
            col,
            is_matched: false,
        }
    }

    /// Borrow the RNG (the shuffler draws from the same stream)
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Number of tiles created so far
    pub fn issued(&self) -> u64 {
        self.next_id - 1
    }

    /// Continue numbering after `last_id`; used when a board was built elsewhere
    pub fn reserve_through(&mut self, last_id: u64) {
        self.next_id = self.next_id.max(last_id.saturating_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_sets_coordinates() {
        let mut factory = TileFactory::seeded(9);
        let tile = factory.generate(3, 5);
        assert_eq!((tile.row, tile.col), (3, 5));
        assert!(!tile.is_matched);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut factory = TileFactory::seeded(9);
        let ids: HashSet<_> = (0..200).map(|i| factory.generate(i % 8, 0).id).collect();
        assert_eq!(ids.len(), 200);
        assert_eq!(factory.issued(), 200);
    }

    #[test]
    fn test_reserve_through_skips_used_ids() {
        let mut factory = TileFactory::seeded(9);
        factory.reserve_through(64);
        assert_eq!(factory.generate(0, 0).id, TileId(65));
        // Never moves backwards.
        factory.reserve_through(3);
        assert_eq!(factory.generate(0, 0).id, TileId(66));
    }

    #[test]
    #[should_panic(expected = "(8, 0)")]
    fn test_generate_out_of_bounds_panics() {
        let mut factory = TileFactory::seeded(1);
        factory.generate(8, 0);
    }
}
