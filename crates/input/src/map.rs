//! Key mapping from terminal events to intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the intent it expresses, if any.
pub fn map_key(code: KeyCode) -> Option<Intent> {
    match code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Intent::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Intent::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Intent::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char(' ')
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Intent::Rotate),

        KeyCode::Enter => Some(Intent::Confirm),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyCode::Left), Some(Intent::MoveLeft));
        assert_eq!(map_key(KeyCode::Right), Some(Intent::MoveRight));
        assert_eq!(map_key(KeyCode::Down), Some(Intent::SoftDrop));

        assert_eq!(map_key(KeyCode::Char('A')), Some(Intent::MoveLeft));
        assert_eq!(map_key(KeyCode::Char('l')), Some(Intent::MoveRight));
        assert_eq!(map_key(KeyCode::Char('J')), Some(Intent::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_key(KeyCode::Up), Some(Intent::Rotate));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(Intent::Rotate));
        assert_eq!(map_key(KeyCode::Char('w')), Some(Intent::Rotate));
    }

    #[test]
    fn test_confirm_and_unmapped() {
        assert_eq!(map_key(KeyCode::Enter), Some(Intent::Confirm));
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Tab), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Enter)));
    }
}
