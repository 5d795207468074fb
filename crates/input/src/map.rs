//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::CursorDown)
        }

        // Tiles
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Select),

        // Items
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::ArmHammer),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(GameAction::Shuffle),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(GameAction::ExtraMoves),
        KeyCode::Char('?') => Some(GameAction::Hint),

        // Settings
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::ToggleMusic),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::ToggleSound),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(GameAction::ToggleVibration),
        KeyCode::Delete => Some(GameAction::ClearRecords),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
