//! Command history with a recall cursor.
//!
//! Entries are appended on submission and never reordered. The cursor
//! ranges over `0..=len`, where `len` means "not recalling".

/// Previously executed lines, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and stop recalling.
    ///
    /// Empty lines and repeats of the newest entry are not stored.
    /// Returns whether the line was appended.
    pub fn submit(&mut self, line: &str) -> bool {
        let stored = !line.is_empty() && self.entries.last().is_none_or(|last| last != line);
        if stored {
            self.entries.push(line.to_string());
        }
        self.cursor = self.entries.len();
        stored
    }

    /// Step the cursor by `direction` (-1 older, +1 newer) and return the
    /// entry it lands on.
    ///
    /// The cursor stays on an entry: it is clamped to `0..len`. Returns
    /// `None` without moving when the history is empty.
    pub fn recall(&mut self, direction: isize) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = self
            .cursor
            .saturating_add_signed(direction)
            .min(self.entries.len() - 1);
        Some(&self.entries[self.cursor])
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The `count` newest entries with their indices, oldest first.
    pub fn last(&self, count: usize) -> impl Iterator<Item = (usize, &str)> {
        let start = self.entries.len().saturating_sub(count);
        self.entries[start..]
            .iter()
            .enumerate()
            .map(move |(offset, entry)| (start + offset, entry.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
