//! Key events as the shell sees them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Printable character (including `?`, which the shell treats as help)
    Char(char),
    Space,
    Backspace,
    Tab,
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    /// Anything the shell has no binding for
    Ignored,
}

impl Key {
    /// Keys for typing `text`, one per character.
    pub fn typed(text: &str) -> impl Iterator<Item = Key> + '_ {
        text.chars().map(|c| match c {
            ' ' => Key::Space,
            c => Key::Char(c),
        })
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let modified = event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match event.code {
            KeyCode::Char(_) if modified => Key::Ignored,
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => Key::Ignored,
        }
    }
}
