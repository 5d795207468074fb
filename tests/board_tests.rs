//! Board tests through the public facade

use tui_match3::core::{find_matches, is_adjacent, Board, MatchSet, Tile, TileFactory};
use tui_match3::types::{Coord, TileKind, GRID_SIZE};

const NO_SWAP: [&str; GRID_SIZE] = [
    "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP", "BRGYPOBR",
    "YPOBRGYP",
];

fn kind(board: &Board, row: usize, col: usize) -> Option<TileKind> {
    board.kind_at(row, col)
}

#[test]
fn test_board_empty() {
    let board = Board::empty();
    assert_eq!(board.empty_count(), GRID_SIZE * GRID_SIZE);
    assert!(!board.is_full());
    assert_eq!(board.tiles().count(), 0);
    assert_eq!(board.max_id(), 0);
}

#[test]
fn test_board_from_rows_round_trip() {
    let board = Board::from_rows(&NO_SWAP).unwrap();
    assert!(board.is_full());
    assert!(board.positions_consistent());
    assert_eq!(board.to_rows(), NO_SWAP.map(String::from));
    assert_eq!(kind(&board, 0, 0), Some(TileKind::Blue));
    assert_eq!(kind(&board, 7, 7), Some(TileKind::Purple));
    assert_eq!(board.max_id(), 64);
}

#[test]
fn test_board_from_rows_rejects_bad_input() {
    assert!(Board::from_rows(&NO_SWAP[..7]).is_none());

    let mut rows = NO_SWAP;
    rows[3] = "YPOBRGY";
    assert!(Board::from_rows(&rows).is_none());

    rows[3] = "YPOBRGYZ";
    assert!(Board::from_rows(&rows).is_none());
}

#[test]
fn test_board_in_bounds() {
    assert!(!Board::in_bounds(GRID_SIZE, 0));
    assert!(!Board::in_bounds(0, GRID_SIZE));
    assert!(Board::in_bounds(0, 0));
    assert!(Board::in_bounds(GRID_SIZE - 1, GRID_SIZE - 1));
}

#[test]
#[should_panic(expected = "(8, 0)")]
fn test_board_get_out_of_bounds_panics() {
    let board = Board::from_rows(&NO_SWAP).unwrap();
    let _ = board.get(GRID_SIZE, 0);
}

#[test]
#[should_panic(expected = "(0, 8)")]
fn test_board_take_out_of_bounds_panics() {
    let mut board = Board::from_rows(&NO_SWAP).unwrap();
    let _ = board.take(0, GRID_SIZE);
}

#[test]
fn test_board_swap_rewrites_positions() {
    let mut board = Board::from_rows(&NO_SWAP).unwrap();
    let a_id = board.get(2, 3).unwrap().id;
    let b_id = board.get(2, 4).unwrap().id;

    board.swap(Coord::new(2, 3), Coord::new(2, 4));

    let a = board.get(2, 4).unwrap();
    let b = board.get(2, 3).unwrap();
    assert_eq!(a.id, a_id);
    assert_eq!(b.id, b_id);
    assert_eq!((a.row, a.col), (2, 4));
    assert_eq!((b.row, b.col), (2, 3));
    assert!(board.positions_consistent());
}

#[test]
fn test_board_copy_on_write() {
    let original = Board::from_rows(&NO_SWAP).unwrap();
    let mut matched = MatchSet::new();
    matched.insert(Coord::new(0, 0));
    matched.insert(Coord::new(0, 1));

    let marked = original.marked(&matched);
    let cleared = marked.without(&matched);

    assert!(original.tiles().all(|t| !t.is_matched));
    assert!(marked.get(0, 0).unwrap().is_matched);
    assert!(!marked.get(0, 2).unwrap().is_matched);
    assert_eq!(cleared.empty_count(), 2);
    assert!(cleared.get(0, 1).is_none());
    assert_eq!(original.empty_count(), 0);
}

#[test]
fn test_board_place_and_take() {
    let mut factory = TileFactory::seeded(9);
    let mut board = Board::empty();
    let tile: Tile = factory.make(TileKind::Green, 0, 0);

    assert!(board.place(5, 6, tile).is_none());
    let placed = board.get(5, 6).unwrap();
    assert_eq!((placed.row, placed.col), (5, 6));
    assert_eq!(placed.kind, TileKind::Green);

    let taken = board.take(5, 6).unwrap();
    assert_eq!(taken.id, tile.id);
    assert!(board.get(5, 6).is_none());
    assert!(board.take(5, 6).is_none());
}

#[test]
fn test_adjacency() {
    assert!(is_adjacent(3, 3, 2, 3));
    assert!(is_adjacent(3, 3, 3, 4));
    assert!(!is_adjacent(3, 3, 3, 3));
    assert!(!is_adjacent(3, 3, 4, 4));
    assert!(!is_adjacent(3, 3, 3, 5));
}

#[test]
fn test_no_swap_fixture_is_stable() {
    let board = Board::from_rows(&NO_SWAP).unwrap();
    assert!(find_matches(&board).is_empty());
}
