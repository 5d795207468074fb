use tui_match3::core::snapshot::hint_text;
use tui_match3::core::{Board, GameConfig, GameState};
use tui_match3::term::{FrameBuffer, GameView, Viewport, DEFAULT_BANNER};
use tui_match3::types::{GameStatus, ItemKind, Notice, GRID_SIZE};

const NO_SWAP: [&str; GRID_SIZE] = [
    "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP", "BRGYPOBR", "YPOBRGYP", "BRGYPOBR",
    "YPOBRGYP",
];

fn state() -> GameState {
    GameState::with_board(GameConfig::new(1), Board::from_rows(&NO_SWAP).unwrap())
}

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = state().snapshot();
    let view = GameView::default();

    // 8 tiles of 4x2 plus border => 34x18, centred in 60x24 below a notice line.
    let fb = view.render(&snap, Viewport::new(60, 24));

    assert_eq!(fb.get(13, 3).unwrap().ch, '┌');
    assert_eq!(fb.get(46, 3).unwrap().ch, '┐');
    assert_eq!(fb.get(13, 20).unwrap().ch, '└');
    assert_eq!(fb.get(46, 20).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_tile_letters_and_cursor() {
    let snap = state().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(60, 24));

    // Tile (0,0) spans x 14..18, y 4..6; cursor sits at (0,0).
    assert_eq!(fb.get(14, 4).unwrap().ch, '[');
    assert_eq!(fb.get(15, 4).unwrap().ch, 'B');
    assert_eq!(fb.get(17, 4).unwrap().ch, ']');
    // Tile (0,1) is red.
    assert_eq!(fb.get(19, 4).unwrap().ch, 'R');
    // Tile (1,0) is yellow.
    assert_eq!(fb.get(15, 6).unwrap().ch, 'Y');
}

#[test]
fn term_view_shows_banner_and_title_by_default() {
    let snap = state().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(60, 24));

    assert!(fb.row_text(2).contains("MATCH-3"));
    assert!(fb.row_text(21).contains(DEFAULT_BANNER));
}

#[test]
fn term_view_shows_hint_and_notice() {
    let mut snap = state().snapshot();
    snap.hint = Some(hint_text("Try swapping row 1 col 1 with row 1 col 2"));
    snap.notice = Some(Notice::Award(ItemKind::Hammer));
    let fb = GameView::default().render(&snap, Viewport::new(60, 24));

    assert!(fb.row_text(2).contains("You earned a Hammer!"));
    assert!(fb.row_text(21).starts_with(&format!("{}Hint: Try swapping", " ".repeat(13))));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = state().snapshot();
    snap.score = 1234;
    snap.high_score = 5678;
    snap.combo = 3;

    let view = GameView::default();
    let text = all_text(&view.render(&snap, Viewport::new(80, 24)));
    for needle in ["SCORE", "1234", "BEST", "5678", "MOVES", "COMBO x3", "ITEMS", "SETTINGS"] {
        assert!(text.contains(needle), "missing {needle}");
    }

    let narrow = all_text(&view.render(&snap, Viewport::new(60, 24)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_overlays_game_over() {
    let mut snap = state().snapshot();
    snap.status = GameStatus::GameOver;
    let text = all_text(&GameView::default().render(&snap, Viewport::new(60, 24)));
    assert!(text.contains("GAME OVER"));
}
