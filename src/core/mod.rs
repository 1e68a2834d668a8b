//! Engine logic, independent of any terminal.
//!
//! This module provides:
//! - [`CommandTree`] registration and [`resolver`] lookups over it
//! - [`autocomplete`] and [`help_entries`] for Tab and `?`
//! - [`LineEditor`] and [`History`] for the input line
//! - [`Handler`] and the built-in commands

pub mod autocomplete;
pub mod commands;
pub mod editor;
pub mod error;
pub mod history;
pub mod parser;
pub mod patterns;
pub mod resolver;
pub mod tree;

pub use autocomplete::{AutocompleteResult, HelpEntry, autocomplete, help_entries};
pub use commands::{Context, Handler, register_builtins};
pub use editor::LineEditor;
pub use error::{Result, ShellError};
pub use history::History;
pub use resolver::{CandidateSource, Candidates};
pub use tree::{CommandNode, CommandTree, PathSegment, SegmentKind};
