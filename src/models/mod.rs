//! Data models shared by the engine and its terminal adapters.
//!
//! Contains:
//! - [`Key`] - Keystrokes after decoding terminal input
//! - [`LoopState`] - Whether the read-eval loop is running

mod key;
mod state;

pub use key::Key;
pub use state::LoopState;
