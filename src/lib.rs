//! treesh - a tree-structured interactive command shell.
//!
//! Commands are registered as paths of keyword and pattern segments. The
//! shell reads raw keystrokes, edits one input line, completes it against
//! the registered tree on Tab, lists alternatives on `?`, recalls history
//! with the arrow keys and runs the matching handler on Enter.
//!
//! ```no_run
//! use treesh::{PathSegment, Shell, ShellConfig, patterns};
//! use treesh::terminal::Console;
//!
//! let mut shell = Shell::new(ShellConfig::default(), Console::stdout());
//! shell.register(
//!     [
//!         PathSegment::keyword("ping", "send echo requests"),
//!         PathSegment::pattern(patterns::IP, "destination"),
//!     ],
//!     |ctx, args| ctx.line(format_args!("pinging {}", args[1])),
//! );
//! shell.run_interactive()?;
//! # Ok::<(), treesh::ShellError>(())
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod terminal;

mod shell;
mod utils;

pub use crate::config::ShellConfig;
pub use crate::core::{
    AutocompleteResult, CommandNode, CommandTree, Context, Handler, PathSegment, Result,
    ShellError, patterns,
};
pub use crate::models::{Key, LoopState};
pub use crate::shell::Shell;
