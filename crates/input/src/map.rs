//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(GameAction::MoveRight),
        KeyCode::Up | KeyCode::Char('k') => Some(GameAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(GameAction::MoveDown),

        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Place),
        KeyCode::Char('n') | KeyCode::Char('?') => Some(GameAction::Redraw),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Short human-readable name for a key, for the key echo panel.
pub fn describe_key(key: KeyEvent) -> String {
    let name = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        other => format!("{other:?}").to_lowercase(),
    };

    let mut prefix = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        prefix.push_str("C-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        prefix.push_str("M-");
    }
    prefix + &name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(key(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(key(KeyCode::Up), Some(GameAction::MoveUp));
        assert_eq!(key(KeyCode::Down), Some(GameAction::MoveDown));

        assert_eq!(key(KeyCode::Char('h')), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Char('l')), Some(GameAction::MoveRight));
        assert_eq!(key(KeyCode::Char('k')), Some(GameAction::MoveUp));
        assert_eq!(key(KeyCode::Char('j')), Some(GameAction::MoveDown));
    }

    #[test]
    fn test_place_and_redraw_keys() {
        assert_eq!(key(KeyCode::Enter), Some(GameAction::Place));
        assert_eq!(key(KeyCode::Char(' ')), Some(GameAction::Place));
        assert_eq!(key(KeyCode::Char('n')), Some(GameAction::Redraw));
        assert_eq!(key(KeyCode::Char('?')), Some(GameAction::Redraw));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::Esc), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_describe_key() {
        assert_eq!(describe_key(KeyEvent::from(KeyCode::Char('x'))), "x");
        assert_eq!(describe_key(KeyEvent::from(KeyCode::Char(' '))), "space");
        assert_eq!(describe_key(KeyEvent::from(KeyCode::F(5))), "F5");
        assert_eq!(
            describe_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            "C-x"
        );
    }
}
