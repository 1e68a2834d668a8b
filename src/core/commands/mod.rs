//! Command handlers and the context they run in.
//!
//! Handlers are the leaves of the command tree. They receive the full
//! token list of the line (command path included) and report everything,
//! failures too, by writing to the console through their [`Context`]. The
//! shell never inspects what a handler did beyond a request to stop.
//!
//! # Architecture
//!
//! - [`Handler`] is the single capability a command exposes
//! - [`Context`] lends the handler the console, history and tree
//! - `builtin` registers the commands every shell starts with

mod builtin;

pub use builtin::register_builtins;

use std::fmt::Display;
use std::io;

use crate::core::history::History;
use crate::core::tree::CommandTree;
use crate::models::LoopState;
use crate::terminal::Console;

// =============================================================================
// Handler
// =============================================================================

/// A command implementation.
pub trait Handler {
    /// Run the command for a fully resolved line.
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]);
}

impl<F> Handler for F
where
    F: Fn(&mut Context<'_>, &[String]),
{
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) {
        self(ctx, args)
    }
}

// =============================================================================
// Context
// =============================================================================

/// What a running handler may use or change.
pub struct Context<'a> {
    console: &'a mut Console,
    history: &'a mut History,
    tree: &'a CommandTree,
    state: &'a mut LoopState,
    write_error: Option<io::Error>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        console: &'a mut Console,
        history: &'a mut History,
        tree: &'a CommandTree,
        state: &'a mut LoopState,
    ) -> Self {
        Self {
            console,
            history,
            tree,
            state,
            write_error: None,
        }
    }

    /// Print one line of output.
    ///
    /// Write failures are kept and reported by the shell once the handler
    /// returns; later output is dropped.
    pub fn line(&mut self, text: impl Display) {
        if self.write_error.is_none()
            && let Err(err) = self.console.line(text)
        {
            self.write_error = Some(err);
        }
    }

    /// Clear the whole screen.
    pub fn clear_screen(&mut self) {
        if self.write_error.is_none()
            && let Err(err) = self.console.clear_screen()
        {
            self.write_error = Some(err);
        }
    }

    pub fn history(&self) -> &History {
        self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        self.history
    }

    /// The command tree, for commands that describe other commands.
    pub fn tree(&self) -> &CommandTree {
        self.tree
    }

    /// Ask the shell to stop after this command.
    pub fn stop(&mut self) {
        *self.state = LoopState::Stopped;
    }

    /// Hand back the first write failure, if any.
    pub(crate) fn finish(self) -> io::Result<()> {
        match self.write_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
