//! Scoring module - cascade points and bonus item awards
//!
//! Rules per cascade iteration:
//! - Points are `matched * POINTS_PER_TILE * combo`.
//! - Award checks are independent and may all fire in one iteration:
//!   exactly 4 matched gives a hammer, 5 or more gives a shuffle, and
//!   reaching combo 3 gives an extra-moves item.

use arrayvec::ArrayVec;

use crate::types::{
    ItemKind, EXTRA_MOVES_COMBO, HAMMER_MATCH_SIZE, POINTS_PER_TILE, SHUFFLE_MATCH_MIN,
};

/// Items earned by a single cascade iteration (at most one of each kind)
pub type Awards = ArrayVec<ItemKind, 3>;

/// Points for one cascade iteration
pub fn cascade_points(matched: usize, combo: u32) -> u32 {
    (matched as u32)
        .saturating_mul(POINTS_PER_TILE)
        .saturating_mul(combo)
}

/// Bonus items for one cascade iteration
pub fn cascade_awards(matched: usize, combo: u32) -> Awards {
    let mut awards = Awards::new();
    if matched == HAMMER_MATCH_SIZE {
        awards.push(ItemKind::Hammer);
    }
    if matched >= SHUFFLE_MATCH_MIN {
        awards.push(ItemKind::Shuffle);
    }
    if combo == EXTRA_MOVES_COMBO {
        awards.push(ItemKind::ExtraMoves);
    }
    awards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_scale_with_combo() {
        assert_eq!(cascade_points(3, 1), 30);
        assert_eq!(cascade_points(3, 2), 60);
        assert_eq!(cascade_points(5, 3), 150);
        assert_eq!(cascade_points(0, 4), 0);
    }

    #[test]
    fn test_points_saturate() {
        assert_eq!(cascade_points(64, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_three_match_awards_nothing() {
        assert!(cascade_awards(3, 1).is_empty());
        assert!(cascade_awards(3, 2).is_empty());
    }

    #[test]
    fn test_four_match_awards_hammer() {
        assert_eq!(cascade_awards(4, 1).as_slice(), &[ItemKind::Hammer]);
    }

    #[test]
    fn test_five_or_more_awards_shuffle() {
        assert_eq!(cascade_awards(5, 1).as_slice(), &[ItemKind::Shuffle]);
        assert_eq!(cascade_awards(9, 2).as_slice(), &[ItemKind::Shuffle]);
    }

    #[test]
    fn test_combo_three_awards_extra_moves_only_once() {
        assert_eq!(cascade_awards(3, 3).as_slice(), &[ItemKind::ExtraMoves]);
        assert!(cascade_awards(3, 4).is_empty());
    }

    #[test]
    fn test_awards_co_occur() {
        assert_eq!(
            cascade_awards(4, 3).as_slice(),
            &[ItemKind::Hammer, ItemKind::ExtraMoves]
        );
        assert_eq!(
            cascade_awards(6, 3).as_slice(),
            &[ItemKind::Shuffle, ItemKind::ExtraMoves]
        );
    }
}
