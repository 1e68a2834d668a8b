//! Sources of keystrokes for the shell loop.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyEventKind};

use crate::models::Key;

/// Blocking supplier of one key at a time.
pub trait KeySource {
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Keys read from the real terminal. Expects raw mode to be enabled.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            // Mouse, focus, paste and resize events, and key releases, are skipped.
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                let key = Key::from(key);
                log::trace!("key {key:?}");
                return Ok(key);
            }
        }
    }
}

/// A fixed sequence of keys. Once drained it keeps returning
/// [`Key::Escape`], which ends the shell loop.
#[derive(Clone, Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue typing of `text`.
    pub fn text(mut self, text: &str) -> Self {
        self.keys.extend(Key::typed(text));
        self
    }

    /// Queue one key.
    pub fn key(mut self, key: Key) -> Self {
        self.keys.push_back(key);
        self
    }

    /// Queue typing of `line` followed by Enter.
    pub fn line(self, line: &str) -> Self {
        self.text(line).key(Key::Enter)
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        Ok(self.keys.pop_front().unwrap_or(Key::Escape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_keys_end_with_escape() {
        let mut keys = ScriptedKeys::new().line("q");
        assert_eq!(keys.remaining(), 2);
        assert_eq!(keys.read_key().unwrap(), Key::Char('q'));
        assert_eq!(keys.read_key().unwrap(), Key::Enter);
        assert_eq!(keys.read_key().unwrap(), Key::Escape);
        assert_eq!(keys.read_key().unwrap(), Key::Escape);
    }
}
