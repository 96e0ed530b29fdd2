//! Key mapping from terminal events to game commands and host actions.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Forward a command to the game
    Command(Command),
    /// Pick the level for the next game (1-9)
    SelectLevel(u8),
    /// Start a new game
    Start,
    Quit,
}

/// Map keyboard input to game commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Command::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::Rotate),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a key press to a host action. Unmapped keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<HostAction> {
    if should_quit(key) {
        return Some(HostAction::Quit);
    }
    if let Some(command) = handle_key_event(key) {
        return Some(HostAction::Command(command));
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(HostAction::Start),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| HostAction::SelectLevel(d as u8)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Command::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Command::SoftDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(Command::MoveRight)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(Command::Rotate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(Command::Rotate)
        );
    }

    #[test]
    fn test_every_binding_in_both_cases() {
        let bindings = [
            ("hHaA", Command::MoveLeft),
            ("lLdD", Command::MoveRight),
            ("jJsS", Command::SoftDrop),
            ("kKwW", Command::Rotate),
        ];
        for (keys, command) in bindings {
            for c in keys.chars() {
                assert_eq!(
                    handle_key_event(KeyEvent::from(KeyCode::Char(c))),
                    Some(command),
                    "key {:?}",
                    c
                );
            }
        }
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_host_actions() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter)),
            Some(HostAction::Start)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('7'))),
            Some(HostAction::SelectLevel(7))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(HostAction::Command(Command::MoveLeft))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('Q'))),
            Some(HostAction::Quit)
        );
    }
}
