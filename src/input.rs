//! Keyboard input handling for the form screen.
//!
//! Converts crossterm key events into form actions. Character filtering is
//! left to the normalizer, so any printable key is passed through.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of handling a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Append a typed character to the field
    Insert(char),
    /// Delete the last character
    Backspace,
    /// Empty the field
    Clear,
    /// Save the current QR code as PNG
    Export,
    /// Leave the application
    Quit,
    /// No action needed
    None,
}

/// Map a key event to a form action.
///
/// Bindings:
/// - Esc, Ctrl+C: quit
/// - Ctrl+U: clear the field
/// - Ctrl+S: export PNG
/// - Backspace: delete last character
/// - Any other character: insert
pub fn handle_key_event(event: KeyEvent) -> FormAction {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    // Some platforms also report key releases
    if kind == KeyEventKind::Release {
        return FormAction::None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('C') => FormAction::Quit,
            KeyCode::Char('u') | KeyCode::Char('U') => FormAction::Clear,
            KeyCode::Char('s') | KeyCode::Char('S') => FormAction::Export,
            _ => FormAction::None,
        };
    }

    if modifiers.contains(KeyModifiers::ALT) {
        return FormAction::None;
    }

    match code {
        KeyCode::Esc => FormAction::Quit,
        KeyCode::Backspace => FormAction::Backspace,
        KeyCode::Char(c) => FormAction::Insert(c),
        _ => FormAction::None,
    }
}
