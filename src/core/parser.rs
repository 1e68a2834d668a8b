//! Splitting an input line into tokens.
//!
//! The shell has no quoting, pipes or redirection: a line is a sequence of
//! whitespace-separated words, and runs of whitespace never produce empty
//! tokens.

/// The line with surrounding whitespace removed.
pub fn normalize(line: &str) -> &str {
    line.trim()
}

/// Split a line into its non-empty words.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
