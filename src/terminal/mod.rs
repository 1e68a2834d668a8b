//! Terminal adapters: key input, console output and raw mode.
//!
//! The engine talks to the terminal only through these types, so the
//! whole loop can run against [`ScriptedKeys`] and a [`Capture`] buffer.

mod console;
mod input;
mod raw;

pub use console::{Capture, Console, NEWLINE};
pub use input::{KeySource, ScriptedKeys, TerminalKeys};
pub use raw::RawModeGuard;
