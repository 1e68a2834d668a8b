//! Display helpers shared by the shell and its built-in commands.
//!
//! Provides:
//! - [`format_command_table`] - Left-aligned command listing for `help`
//! - [`format_help_rows`] - Right-aligned `?` help rows
//! - [`format_label_columns`] - Candidate labels side by side for Tab

mod format;

pub use format::{format_command_table, format_help_rows, format_label_columns};
