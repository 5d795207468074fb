//! RNG module - seedable randomness for tile generation and shuffling
//!
//! All engine randomness flows through a single injected generator so that a
//! session can be replayed exactly from its seed. The default generator is
//! ChaCha8, which is portable across platforms and fast enough to draw a kind
//! for every refilled cell.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{TileKind, TILE_KIND_COUNT};

/// Default engine RNG
pub type GameRng = ChaCha8Rng;

/// Create the default RNG from a `u64` seed
pub fn seeded(seed: u64) -> GameRng {
    GameRng::seed_from_u64(seed)
}

/// Draw a tile kind uniformly from the six kinds
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> TileKind {
    TileKind::ALL[rng.gen_range(0..TILE_KIND_COUNT)]
}

/// Seed derived from the wall clock, for hosts that did not pin one
pub fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    // Never hand out 0; it is reserved as "unset" by hosts.
    nanos.max(1)
}
