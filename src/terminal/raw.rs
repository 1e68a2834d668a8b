//! Raw-mode lifetime guard.

use crossterm::terminal;

use crate::core::error::{Result, ShellError};

/// Keeps the terminal in raw mode until dropped.
///
/// Dropping restores normal line editing on every exit path, including
/// unwinding from a panic.
#[derive(Debug)]
pub struct RawModeGuard(());

impl RawModeGuard {
    /// Enable raw mode and return a guard that disables it on drop.
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode().map_err(ShellError::RawMode)?;
        log::debug!("raw mode enabled");
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("failed to restore terminal mode: {err}");
        }
    }
}
