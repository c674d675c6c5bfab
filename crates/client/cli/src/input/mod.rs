//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-signal mapping so the rest of the
//! application stays agnostic about concrete key bindings or the specifics
//! of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tactics_core::InputEvent;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Forward the signal to the selection state machine.
    Signal(InputEvent),
    /// No meaningful command was produced.
    None,
}

/// Converts a raw key event into a higher-level command.
///
/// Arrows, WASD and vi keys move the cursor. Enter/Space confirm, Esc and
/// Backspace cancel, Tab switches between move and attack.
pub fn handle_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    let signal = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => InputEvent::MoveUp,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => InputEvent::MoveDown,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => InputEvent::MoveLeft,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => InputEvent::MoveRight,

        KeyCode::Enter | KeyCode::Char(' ') => InputEvent::Confirm,
        KeyCode::Esc | KeyCode::Backspace => InputEvent::Cancel,
        KeyCode::Tab => InputEvent::SwitchAction,

        KeyCode::Char('q') => return KeyAction::Quit,
        _ => return KeyAction::None,
    };

    KeyAction::Signal(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn movement_keys_share_signals() {
        for code in [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('k')] {
            assert_eq!(press(code), KeyAction::Signal(InputEvent::MoveUp));
        }
        for code in [KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('j')] {
            assert_eq!(press(code), KeyAction::Signal(InputEvent::MoveDown));
        }
        for code in [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('h')] {
            assert_eq!(press(code), KeyAction::Signal(InputEvent::MoveLeft));
        }
        for code in [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('l')] {
            assert_eq!(press(code), KeyAction::Signal(InputEvent::MoveRight));
        }
    }

    #[test]
    fn command_keys() {
        assert_eq!(press(KeyCode::Enter), KeyAction::Signal(InputEvent::Confirm));
        assert_eq!(press(KeyCode::Char(' ')), KeyAction::Signal(InputEvent::Confirm));
        assert_eq!(press(KeyCode::Esc), KeyAction::Signal(InputEvent::Cancel));
        assert_eq!(press(KeyCode::Tab), KeyAction::Signal(InputEvent::SwitchAction));
        assert_eq!(press(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(KeyCode::Char('z')), KeyAction::None);
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c), KeyAction::Quit);

        let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_w), KeyAction::None);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_key(release), KeyAction::None);
    }
}
