//! Commands every shell starts with: history, clear, quit and help.

use crate::core::patterns;
use crate::core::tree::{CommandTree, PathSegment};
use crate::utils::format_command_table;

use super::Context;

/// Register the built-in commands into `tree`.
pub fn register_builtins(tree: &mut CommandTree) {
    tree.register([PathSegment::keyword("history", "show history")], show_history);
    tree.register(
        [
            PathSegment::keyword("history", ""),
            PathSegment::keyword("show", "show history"),
        ],
        show_history,
    );
    tree.register(
        [
            PathSegment::keyword("history", ""),
            PathSegment::keyword("last", "show history last n"),
            PathSegment::pattern(patterns::NUMBER, "last n"),
        ],
        show_history_last,
    );
    tree.register(
        [
            PathSegment::keyword("history", ""),
            PathSegment::keyword("show", ""),
            PathSegment::keyword("last", "show history last n"),
            PathSegment::pattern(patterns::NUMBER, "last n"),
        ],
        show_history_last,
    );
    tree.register(
        [
            PathSegment::keyword("history", ""),
            PathSegment::keyword("clear", "clear history"),
        ],
        clear_history,
    );

    tree.register([PathSegment::keyword("clear", "clear screen")], clear_screen);
    tree.register([PathSegment::keyword("quit", "quit")], quit);
    tree.register([PathSegment::keyword("help", "show help")], help);
}

// =============================================================================
// Handlers
// =============================================================================

fn show_history(ctx: &mut Context<'_>, _args: &[String]) {
    let lines: Vec<String> = ctx
        .history()
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| format!(" {index} {entry}"))
        .collect();
    for line in lines {
        ctx.line(line);
    }
}

/// Print the `N` newest entries with their indices, oldest of them first.
fn show_history_last(ctx: &mut Context<'_>, args: &[String]) {
    let Some(count) = args.last().and_then(|n| n.parse::<usize>().ok()) else {
        let given = args.last().map(String::as_str).unwrap_or_default();
        ctx.line(format!("history: invalid count \"{given}\""));
        return;
    };

    let lines: Vec<String> = ctx
        .history()
        .last(count)
        .map(|(index, entry)| format!(" {index} {entry}"))
        .collect();
    for line in lines {
        ctx.line(line);
    }
}

fn clear_history(ctx: &mut Context<'_>, _args: &[String]) {
    ctx.history_mut().clear();
}

fn clear_screen(ctx: &mut Context<'_>, _args: &[String]) {
    ctx.clear_screen();
}

fn quit(ctx: &mut Context<'_>, _args: &[String]) {
    ctx.stop();
}

fn help(ctx: &mut Context<'_>, _args: &[String]) {
    let mut commands: Vec<_> = ctx.tree().root().children().iter().collect();
    commands.sort_by(|a, b| a.pattern().cmp(b.pattern()));

    let rows: Vec<(&str, &str)> = commands
        .iter()
        .map(|c| (c.label(), c.description()))
        .collect();
    let lines = format_command_table(&rows);
    for line in lines {
        ctx.line(line);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::History;
    use crate::models::LoopState;
    use crate::terminal::{Capture, Console};

    struct Fixture {
        tree: CommandTree,
        history: History,
        state: LoopState,
        capture: Capture,
        console: Console,
    }

    impl Fixture {
        fn new(lines: &[&str]) -> Self {
            let mut tree = CommandTree::new();
            register_builtins(&mut tree);
            let mut history = History::new();
            for line in lines {
                history.submit(line);
            }
            let capture = Capture::new();
            Self {
                tree,
                history,
                state: LoopState::Running,
                console: Console::new(capture.clone()),
                capture,
            }
        }

        fn run(&mut self, line: &str) -> String {
            let args: Vec<String> = line.split_whitespace().map(str::to_string).collect();
            let node = self.tree.resolve_exact(&args).expect("command exists");
            let mut ctx = Context::new(
                &mut self.console,
                &mut self.history,
                &self.tree,
                &mut self.state,
            );
            node.execute(&mut ctx, &args);
            ctx.finish().unwrap();
            self.capture.contents()
        }
    }

    #[test]
    fn test_history_show() {
        let mut fx = Fixture::new(&["help", "quit"]);
        assert_eq!(fx.run("history show"), " 0 help\r\n 1 quit\r\n");
        fx.capture.clear();
        assert_eq!(fx.run("history"), " 0 help\r\n 1 quit\r\n");
    }

    #[test]
    fn test_history_last_n() {
        let mut fx = Fixture::new(&["a", "b", "c"]);
        assert_eq!(fx.run("history last 2"), " 1 b\r\n 2 c\r\n");
        fx.capture.clear();
        assert_eq!(fx.run("history show last 1"), " 2 c\r\n");
    }

    #[test]
    fn test_history_last_overflowing_count() {
        let mut fx = Fixture::new(&["a"]);
        let out = fx.run("history last 99999999999999999999999");
        assert!(out.starts_with("history: invalid count"));
    }

    #[test]
    fn test_history_clear() {
        let mut fx = Fixture::new(&["a", "b"]);
        fx.run("history clear");
        assert!(fx.history.is_empty());
    }

    #[test]
    fn test_clear_screen() {
        let mut fx = Fixture::new(&[]);
        assert!(fx.run("clear").contains("\x1b[2J"));
        assert_eq!(fx.state, LoopState::Running);
    }

    #[test]
    fn test_quit_stops() {
        let mut fx = Fixture::new(&[]);
        fx.run("quit");
        assert_eq!(fx.state, LoopState::Stopped);
    }

    #[test]
    fn test_help_lists_first_level() {
        let mut fx = Fixture::new(&[]);
        let out = fx.run("help");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "clear    clear screen",
                "help     show help",
                "history  show history",
                "quit     quit",
            ]
        );
    }
}
