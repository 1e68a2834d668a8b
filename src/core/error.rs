//! Error types for the shell engine.
//!
//! Only terminal-driver failures are errors. Resolution and matching
//! problems are absorbed where they happen and turned into console text;
//! handlers report their own failures on the console.

use std::io;

use thiserror::Error;

/// Fatal shell failures.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Raw mode could not be enabled before entering the loop.
    #[error("failed to enable raw terminal mode: {0}")]
    RawMode(#[source] io::Error),
    /// Reading a key or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, ShellError>;
