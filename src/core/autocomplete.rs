//! Tab completion and `?` help against the command tree.
//!
//! Completion looks at the candidates for the current line and picks one
//! of four outcomes:
//!
//! - No match: nothing changes
//! - Single match on an unfinished token: the token is completed
//! - Single match after a finished token: the next keyword is filled in, or
//!   the hint for an argument slot is shown
//! - Multiple matches: every label is listed

use crate::core::parser::tokenize;
use crate::core::resolver::CandidateSource;
use crate::core::tree::CommandTree;

// ============================================================================
// Public Types
// ============================================================================

/// Result of a completion attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// No candidate fits; leave the line alone.
    None,
    /// Replace the line with this text and move the cursor to its end.
    Line(String),
    /// Show this label below the prompt; the line is unchanged.
    Hint(String),
    /// Show every label, then continue with `line`.
    Multiple { labels: Vec<String>, line: String },
}

/// One row of `?` help.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpEntry {
    pub label: String,
    pub description: String,
}

// ============================================================================
// Public API
// ============================================================================

/// Perform completion on Tab press.
pub fn autocomplete(tree: &CommandTree, line: &str) -> AutocompleteResult {
    let args = tokenize(line);
    let last_arg = args.last().map(String::as_str).unwrap_or("");
    let token_finished = line.chars().last().is_none_or(char::is_whitespace);
    let candidates = tree.candidates(&args);

    match candidates.nodes.as_slice() {
        [] => {
            log::debug!("no completion for {line:?}");
            AutocompleteResult::None
        }
        [only] if !token_finished => {
            let mut completed = args[..args.len() - 1].join(" ");
            if args.len() > 1 {
                completed.push(' ');
            }
            // Children and Leaf candidates sit past a token that already matched.
            let completes_token = candidates.source == CandidateSource::Prefix
                && only.is_keyword()
                && only.pattern().starts_with(last_arg);
            if completes_token {
                log::debug!("completing keyword {:?}", only.pattern());
                completed.push_str(only.pattern());
            } else {
                log::debug!("{last_arg:?} already fills {:?}", only.pattern());
                completed.push_str(last_arg);
            }
            completed.push(' ');
            AutocompleteResult::Line(completed)
        }
        [only] => {
            if only.is_keyword() && candidates.source != CandidateSource::Leaf {
                AutocompleteResult::Line(format!("{line}{} ", only.pattern()))
            } else {
                AutocompleteResult::Hint(only.label().to_string())
            }
        }
        many => {
            log::debug!("{} candidates for {line:?}", many.len());
            let labels = many.iter().map(|c| c.label().to_string()).collect();
            let mut line = line.to_string();
            if !token_finished {
                line.push(' ');
            }
            AutocompleteResult::Multiple { labels, line }
        }
    }
}

/// Help rows for `?`: every candidate for the current line.
pub fn help_entries(tree: &CommandTree, line: &str) -> Vec<HelpEntry> {
    tree.resolve_candidates(&tokenize(line))
        .into_iter()
        .map(|c| HelpEntry {
            label: c.label().to_string(),
            description: c.description().to_string(),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::register_builtins;
    use crate::core::tree::PathSegment;

    fn builtins() -> CommandTree {
        let mut tree = CommandTree::new();
        register_builtins(&mut tree);
        tree
    }

    fn line(text: &str) -> AutocompleteResult {
        AutocompleteResult::Line(text.to_string())
    }

    #[test]
    fn test_completes_unique_prefix() {
        let tree = builtins();
        assert_eq!(autocomplete(&tree, "hist"), line("history "));
        assert_eq!(autocomplete(&tree, "q"), line("quit "));
        assert_eq!(autocomplete(&tree, "history sh"), line("history show "));
        assert_eq!(autocomplete(&tree, "  history   cl"), line("history clear "));
    }

    #[test]
    fn test_completes_exact_keyword() {
        let tree = builtins();
        assert_eq!(autocomplete(&tree, "quit"), line("quit "));
    }

    #[test]
    fn test_argument_slot_keeps_token() {
        let tree = builtins();
        assert_eq!(autocomplete(&tree, "history last 10"), line("history last 10 "));
    }

    #[test]
    fn test_matched_token_kept_before_longer_child() {
        let mut tree = CommandTree::new();
        tree.register(
            [
                PathSegment::keyword("a", ""),
                PathSegment::keyword("ab", "nested"),
            ],
            |_ctx, _args| {},
        );

        assert_eq!(autocomplete(&tree, "a"), line("a "));
        assert_eq!(autocomplete(&tree, "a "), line("a ab "));
        assert!(tree.resolve_exact(&["a", "ab"]).is_some());
    }

    #[test]
    fn test_no_match() {
        let tree = builtins();
        assert_eq!(autocomplete(&tree, "xyz"), AutocompleteResult::None);
        assert_eq!(autocomplete(&tree, "history last x"), AutocompleteResult::None);
    }

    #[test]
    fn test_multiple_matches() {
        let tree = builtins();
        assert_eq!(
            autocomplete(&tree, "history"),
            AutocompleteResult::Multiple {
                labels: vec!["clear".into(), "last".into(), "show".into()],
                line: "history ".into(),
            }
        );
        assert_eq!(
            autocomplete(&tree, "history "),
            AutocompleteResult::Multiple {
                labels: vec!["clear".into(), "last".into(), "show".into()],
                line: "history ".into(),
            }
        );
    }

    #[test]
    fn test_empty_line_lists_commands() {
        let tree = builtins();
        match autocomplete(&tree, "") {
            AutocompleteResult::Multiple { labels, line } => {
                assert_eq!(labels, ["clear", "help", "history", "quit"]);
                assert_eq!(line, "");
            }
            other => panic!("expected multiple matches, got {other:?}"),
        }
    }

    #[test]
    fn test_finished_token_fills_next_keyword() {
        let tree = builtins();
        assert_eq!(
            autocomplete(&tree, "history show "),
            line("history show last ")
        );
    }

    #[test]
    fn test_finished_token_shows_slot_hint() {
        let tree = builtins();
        assert_eq!(
            autocomplete(&tree, "history last "),
            AutocompleteResult::Hint("NUMBER".into())
        );
        assert_eq!(
            autocomplete(&tree, "quit "),
            AutocompleteResult::Hint("quit".into())
        );
    }

    #[test]
    fn test_help_entries() {
        let tree = builtins();
        let entries = help_entries(&tree, "history ");
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["clear", "last", "show"]);
        assert_eq!(entries[0].description, "clear history");

        let entries = help_entries(&tree, "history last ");
        assert_eq!(
            entries,
            [HelpEntry {
                label: "NUMBER".into(),
                description: "last n".into(),
            }]
        );
    }
}
