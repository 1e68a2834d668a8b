//! In-memory line buffer with a cursor.
//!
//! The editor only tracks state; the shell redraws the terminal after each
//! change. The cursor is an index into the buffer and is always within
//! `0..=len`.

/// Editable input line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents as a string.
    pub fn line(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True for an empty buffer or one whose last character is whitespace.
    pub fn ends_with_whitespace(&self) -> bool {
        self.buffer.last().is_none_or(|c| c.is_whitespace())
    }

    /// Insert at the cursor and advance it.
    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor.
    ///
    /// Returns `false` (and changes nothing) when there is no such character.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
        true
    }

    /// Move the cursor by `delta`, clamped to the buffer.
    ///
    /// Returns the distance actually moved.
    pub fn move_cursor(&mut self, delta: isize) -> isize {
        let target = self.cursor.saturating_add_signed(delta).min(self.len());
        let applied = target as isize - self.cursor as isize;
        self.cursor = target;
        applied
    }

    /// Replace the contents and put the cursor at the end.
    pub fn set_line(&mut self, line: &str) {
        self.buffer = line.chars().collect();
        self.cursor = self.buffer.len();
    }

    /// Empty the buffer and reset the cursor.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}
