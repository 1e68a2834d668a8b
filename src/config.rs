//! Shell configuration.
//!
//! Centralizes the constants used by the engine and the [`ShellConfig`]
//! that a front end may load from a file. The engine only reads
//! configuration; nothing is ever written back.

use serde::Deserialize;

// =============================================================================
// Defaults
// =============================================================================

/// Prompt printed before the input line.
pub const DEFAULT_PROMPT: &str = "# ";

/// Banner printed once when the loop starts.
pub const DEFAULT_BANNER: &str = "Press ESC to quit";

// =============================================================================
// ShellConfig
// =============================================================================

/// Options for a [`Shell`](crate::Shell).
///
/// Every field is optional when deserializing:
///
/// ```toml
/// prompt = "net> "
/// banner = "Press ESC to quit"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    pub prompt: String,
    /// Empty to print no banner.
    pub banner: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}
