//! The interactive shell: a read-eval loop over single keystrokes.
//!
//! Each key is routed to the line editor, completion, history or command
//! execution, and the input line is redrawn after every change. Commands
//! run synchronously on the loop's thread; a slow handler holds up input
//! until it returns.

use crate::config::ShellConfig;
use crate::core::autocomplete::{AutocompleteResult, autocomplete, help_entries};
use crate::core::commands::{Context, Handler, register_builtins};
use crate::core::editor::LineEditor;
use crate::core::error::Result;
use crate::core::history::History;
use crate::core::parser::{normalize, tokenize};
use crate::core::tree::{CommandTree, PathSegment};
use crate::models::{Key, LoopState};
use crate::terminal::{Console, KeySource, RawModeGuard, TerminalKeys};
use crate::utils::{format_help_rows, format_label_columns};

// ============================================================================
// Shell
// ============================================================================

/// Command tree, input line, history and console of one shell session.
pub struct Shell {
    config: ShellConfig,
    tree: CommandTree,
    editor: LineEditor,
    history: History,
    console: Console,
    state: LoopState,
}

impl Shell {
    /// Creates a shell with the built-in commands registered.
    pub fn new(config: ShellConfig, console: Console) -> Self {
        let mut tree = CommandTree::new();
        register_builtins(&mut tree);

        Self {
            config,
            tree,
            editor: LineEditor::new(),
            history: History::new(),
            console,
            state: LoopState::Running,
        }
    }

    /// Register a command; see [`CommandTree::register`].
    pub fn register<F>(&mut self, path: impl IntoIterator<Item = PathSegment>, handler: F)
    where
        F: Fn(&mut Context<'_>, &[String]) + 'static,
    {
        self.tree.register(path, handler);
    }

    /// Register a command; see [`CommandTree::register_handler`].
    pub fn register_handler<H>(&mut self, path: impl IntoIterator<Item = PathSegment>, handler: H)
    where
        H: Handler + 'static,
    {
        self.tree.register_handler(path, handler);
    }

    pub fn tree(&self) -> &CommandTree {
        &self.tree
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run on the real terminal until Escape or `quit`.
    ///
    /// Raw mode is held for exactly the duration of the loop.
    pub fn run_interactive(&mut self) -> Result<()> {
        let _raw = RawModeGuard::acquire()?;
        self.run(&mut TerminalKeys)
    }

    /// Run the loop, reading keys from `keys`, until it stops.
    pub fn run(&mut self, keys: &mut dyn KeySource) -> Result<()> {
        self.state = LoopState::Running;
        if !self.config.banner.is_empty() {
            self.console.line(&self.config.banner)?;
        }
        self.console.write_str(&self.config.prompt)?;
        self.console.flush()?;

        while self.state.is_running() {
            let key = keys.read_key()?;
            self.handle_key(key)?;
            self.console.flush()?;
        }

        self.console.newline()?;
        self.console.flush()?;
        Ok(())
    }

    /// Apply one keystroke.
    pub fn handle_key(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Char('?') => self.show_help(),
            Key::Char(c) => self.insert(c),
            Key::Space => self.insert(' '),
            Key::Backspace => self.backspace(),
            Key::Tab => self.complete(),
            Key::Up => self.recall(-1),
            Key::Down => self.recall(1),
            Key::Left => self.move_cursor(-1),
            Key::Right => self.move_cursor(1),
            Key::Enter => self.submit(),
            Key::Escape => {
                self.state = LoopState::Stopped;
                Ok(())
            }
            Key::Ignored => Ok(()),
        }
    }

    // ------------------------------------------------------------------------
    // Line editing
    // ------------------------------------------------------------------------

    fn insert(&mut self, c: char) -> Result<()> {
        self.editor.insert(c);
        self.redraw()
    }

    fn backspace(&mut self) -> Result<()> {
        if self.editor.backspace() {
            self.redraw()?;
        }
        Ok(())
    }

    fn move_cursor(&mut self, delta: isize) -> Result<()> {
        let applied = self.editor.move_cursor(delta);
        self.console.move_cursor(applied)?;
        Ok(())
    }

    /// Reprint prompt and line from column zero, then restore the cursor.
    fn redraw(&mut self) -> Result<()> {
        self.console.clear_line()?;
        self.console.write_str(&self.config.prompt)?;
        self.console.write_str(&self.editor.line())?;
        let offset = self.editor.cursor() as isize - self.editor.len() as isize;
        self.console.move_cursor(offset)?;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------------

    fn recall(&mut self, direction: isize) -> Result<()> {
        let Some(entry) = self.history.recall(direction) else {
            return Ok(());
        };
        let entry = entry.to_string();
        self.editor.set_line(&entry);
        self.redraw()
    }

    // ------------------------------------------------------------------------
    // Completion and help
    // ------------------------------------------------------------------------

    fn complete(&mut self) -> Result<()> {
        match autocomplete(&self.tree, &self.editor.line()) {
            AutocompleteResult::None => Ok(()),
            AutocompleteResult::Line(line) => {
                self.editor.set_line(&line);
                self.redraw()
            }
            AutocompleteResult::Hint(label) => {
                self.console.newline()?;
                self.console.line(format_args!(" {label}"))?;
                self.redraw()
            }
            AutocompleteResult::Multiple { labels, line } => {
                let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
                self.console.newline()?;
                self.console.line(format_label_columns(&labels))?;
                self.editor.set_line(&line);
                self.redraw()
            }
        }
    }

    fn show_help(&mut self) -> Result<()> {
        let entries = help_entries(&self.tree, &self.editor.line());
        let rows: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.label.as_str(), e.description.as_str()))
            .collect();

        self.console.newline()?;
        for row in format_help_rows(&rows) {
            self.console.line(row)?;
        }
        self.redraw()
    }

    // ------------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------------

    fn submit(&mut self) -> Result<()> {
        self.console.newline()?;

        let line = normalize(&self.editor.line()).to_string();
        self.editor.clear();
        if line.is_empty() {
            self.console.write_str(&self.config.prompt)?;
            return Ok(());
        }

        self.history.submit(&line);
        let args = tokenize(&line);
        self.execute(&line, &args)?;

        if self.state.is_running() {
            self.console.write_str(&self.config.prompt)?;
        }
        Ok(())
    }

    fn execute(&mut self, line: &str, args: &[String]) -> Result<()> {
        let Self {
            tree,
            history,
            console,
            state,
            ..
        } = self;

        match tree.resolve_exact(args).filter(|node| node.is_executable()) {
            Some(node) => {
                log::debug!("executing {line:?}");
                let mut ctx = Context::new(console, history, tree, state);
                node.execute(&mut ctx, args);
                ctx.finish()?;
            }
            None => {
                log::debug!("no command for {line:?}");
                console.line(format_args!("command \"{line}\" does not exist"))?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
