//! Command tree: a trie of token patterns with handlers on its nodes.
//!
//! Each level of the tree is one token position. Nodes are keyed by their
//! pattern string, which is unique among siblings. Registration is purely
//! structural: patterns are not compiled until they are first matched.
//!
//! # Matching precedence
//!
//! Children are kept in registration order. When a token is matched
//! against a level, keyword children are tried first, then pattern
//! children in the order they were registered. This keeps resolution
//! deterministic when a generic pattern and a more specific one could both
//! accept the same token.

use std::cell::OnceCell;
use std::fmt;

use regex::Regex;

use super::commands::{Context, Handler};
use super::patterns;

// ============================================================================
// Path Segments
// ============================================================================

/// How a node's pattern is compared with a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    /// Literal text; matches only a token equal to it.
    Keyword,
    /// Regular expression; matches a token it accepts in full.
    Pattern,
}

/// One element of a registration path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSegment {
    pub pattern: String,
    pub description: String,
    pub kind: SegmentKind,
}

impl PathSegment {
    /// A literal keyword segment such as `history`.
    pub fn keyword(word: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            pattern: word.into(),
            description: description.into(),
            kind: SegmentKind::Keyword,
        }
    }

    /// A regular-expression segment, usually one of [`patterns`].
    pub fn pattern(regex: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            pattern: regex.into(),
            description: description.into(),
            kind: SegmentKind::Pattern,
        }
    }
}

// ============================================================================
// Command Node
// ============================================================================

/// A node of the command tree.
pub struct CommandNode {
    pattern: String,
    description: String,
    kind: SegmentKind,
    handler: Option<Box<dyn Handler>>,
    children: Vec<CommandNode>,
    /// Compiled on first use; `None` when the pattern does not compile.
    matcher: OnceCell<Option<Regex>>,
}

impl CommandNode {
    fn root() -> Self {
        Self::from_segment(&PathSegment::keyword("", ""))
    }

    fn from_segment(segment: &PathSegment) -> Self {
        Self {
            pattern: segment.pattern.clone(),
            description: segment.description.clone(),
            kind: segment.kind,
            handler: None,
            children: Vec::new(),
            matcher: OnceCell::new(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn is_keyword(&self) -> bool {
        self.kind == SegmentKind::Keyword
    }

    /// Hint shown for this node in help and completion output.
    pub fn label(&self) -> &str {
        patterns::label_for(&self.pattern)
    }

    /// True when a handler is attached, i.e. the node is a command.
    pub fn is_executable(&self) -> bool {
        self.handler.is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in registration order.
    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    /// Child with exactly this pattern string.
    pub fn child(&self, pattern: &str) -> Option<&CommandNode> {
        self.children.iter().find(|c| c.pattern == pattern)
    }

    /// Children in matching precedence: keywords, then patterns.
    pub fn ordered_children(&self) -> impl Iterator<Item = &CommandNode> {
        let keywords = self.children.iter().filter(|c| c.is_keyword());
        let regexes = self.children.iter().filter(|c| !c.is_keyword());
        keywords.chain(regexes)
    }

    /// Whether `token` is accepted by this node as a whole.
    ///
    /// A pattern that fails to compile never matches.
    pub fn matches(&self, token: &str) -> bool {
        match self.kind {
            SegmentKind::Keyword => self.pattern == token,
            SegmentKind::Pattern => self
                .matcher
                .get_or_init(|| compile_anchored(&self.pattern))
                .as_ref()
                .is_some_and(|re| re.is_match(token)),
        }
    }

    /// First child, in precedence order, that accepts `token`.
    pub fn find_match(&self, token: &str) -> Option<&CommandNode> {
        self.ordered_children().find(|c| c.matches(token))
    }

    /// Run the attached handler, if any.
    pub fn execute(&self, ctx: &mut Context<'_>, args: &[String]) {
        if let Some(handler) = &self.handler {
            handler.execute(ctx, args);
        }
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("pattern", &self.pattern)
            .field("description", &self.description)
            .field("kind", &self.kind)
            .field("executable", &self.is_executable())
            .field("children", &self.children)
            .finish()
    }
}

fn compile_anchored(pattern: &str) -> Option<Regex> {
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(re) => Some(re),
        Err(err) => {
            log::debug!("pattern {pattern:?} rejected: {err}");
            None
        }
    }
}

// ============================================================================
// Command Tree
// ============================================================================

/// The registered commands, rooted at an unnamed node.
#[derive(Debug)]
pub struct CommandTree {
    pub(crate) root: CommandNode,
}

impl CommandTree {
    pub fn new() -> Self {
        Self {
            root: CommandNode::root(),
        }
    }

    /// The root node; its children are the first-token alternatives.
    pub fn root(&self) -> &CommandNode {
        &self.root
    }

    /// Register a closure as the handler for `path`.
    pub fn register<F>(&mut self, path: impl IntoIterator<Item = PathSegment>, handler: F)
    where
        F: Fn(&mut Context<'_>, &[String]) + 'static,
    {
        self.register_handler(path, handler);
    }

    /// Register `handler` at the end of `path`.
    ///
    /// Existing nodes along the path are reused, so paths sharing a prefix
    /// share nodes. The last node takes the handler, and the segment's
    /// description when that is non-empty. An empty path is ignored.
    pub fn register_handler<H>(&mut self, path: impl IntoIterator<Item = PathSegment>, handler: H)
    where
        H: Handler + 'static,
    {
        let path: Vec<PathSegment> = path.into_iter().collect();
        let Some(last) = path.last() else {
            log::warn!("ignoring registration with an empty path");
            return;
        };

        let mut node = &mut self.root;
        for segment in &path {
            let index = match node.children.iter().position(|c| c.pattern == segment.pattern) {
                Some(index) => {
                    let existing = &mut node.children[index];
                    if existing.description.is_empty() {
                        existing.description = segment.description.clone();
                    }
                    index
                }
                None => {
                    node.children.push(CommandNode::from_segment(segment));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
        }

        if !last.description.is_empty() {
            node.description = last.description.clone();
        }
        node.handler = Some(Box::new(handler));

        log::debug!(
            "registered command {:?} {:?}",
            path.iter().map(|s| s.pattern.as_str()).collect::<Vec<_>>(),
            node.description
        );
    }
}

impl Default for CommandTree {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_ctx: &mut Context<'_>, _args: &[String]) {}

    #[test]
    fn test_shared_prefix_merges() {
        let mut tree = CommandTree::new();
        tree.register(
            [
                PathSegment::keyword("history", ""),
                PathSegment::keyword("show", "show history"),
            ],
            noop,
        );
        tree.register(
            [
                PathSegment::keyword("history", ""),
                PathSegment::keyword("clear", "clear history"),
            ],
            noop,
        );

        assert_eq!(tree.root().children().len(), 1);
        let history = tree.root().child("history").unwrap();
        assert_eq!(history.children().len(), 2);
        assert!(!history.is_executable());
        assert!(history.child("show").unwrap().is_executable());
    }

    #[test]
    fn test_same_literal_twice_is_one_node() {
        let mut tree = CommandTree::new();
        tree.register([PathSegment::keyword("clear", "clear screen")], noop);
        tree.register(
            [
                PathSegment::keyword("clear", ""),
                PathSegment::keyword("screen", ""),
            ],
            noop,
        );

        let clears = tree
            .root()
            .children()
            .iter()
            .filter(|c| c.pattern() == "clear")
            .count();
        assert_eq!(clears, 1);

        let clear = tree.root().child("clear").unwrap();
        assert!(clear.is_executable());
        assert_eq!(clear.description(), "clear screen");
        assert!(clear.child("screen").is_some());
    }

    #[test]
    fn test_intermediate_adopts_description() {
        let mut tree = CommandTree::new();
        tree.register(
            [PathSegment::keyword("link", ""), PathSegment::keyword("show", "")],
            noop,
        );
        tree.register(
            [
                PathSegment::keyword("link", "link commands"),
                PathSegment::keyword("add", ""),
            ],
            noop,
        );
        assert_eq!(tree.root().child("link").unwrap().description(), "link commands");
    }

    #[test]
    fn test_empty_path_is_ignored() {
        let mut tree = CommandTree::new();
        tree.register(Vec::<PathSegment>::new(), noop);
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn test_keyword_and_pattern_matching() {
        let mut tree = CommandTree::new();
        tree.register([PathSegment::keyword("quit", "")], noop);
        tree.register([PathSegment::pattern(patterns::NUMBER, "")], noop);

        let quit = tree.root().child("quit").unwrap();
        assert!(quit.matches("quit"));
        assert!(!quit.matches("qui"));
        assert!(!quit.matches("quitx"));

        let number = tree.root().child(patterns::NUMBER).unwrap();
        assert!(number.matches("42"));
        assert!(!number.matches("42a"));
        assert_eq!(number.label(), "NUMBER");
    }

    #[test]
    fn test_malformed_pattern_never_matches() {
        let mut tree = CommandTree::new();
        tree.register([PathSegment::pattern("([0-9", "broken")], noop);
        let broken = tree.root().child("([0-9").unwrap();
        assert!(!broken.matches("1"));
        assert!(!broken.matches("([0-9"));
    }

    #[test]
    fn test_keywords_take_precedence() {
        let mut tree = CommandTree::new();
        tree.register([PathSegment::pattern(patterns::NAME, "name")], noop);
        tree.register([PathSegment::keyword("main", "keyword")], noop);

        let first = tree.root().find_match("main").unwrap();
        assert_eq!(first.pattern(), "main");
        let other = tree.root().find_match("eth0").unwrap();
        assert_eq!(other.pattern(), patterns::NAME);
    }

    #[test]
    fn test_patterns_tried_in_registration_order() {
        let set_path = |pattern: &str| {
            [
                PathSegment::keyword("set", ""),
                PathSegment::pattern(pattern, ""),
            ]
        };

        let mut tree = CommandTree::new();
        tree.register(set_path(patterns::NAME), noop);
        tree.register(set_path(patterns::NUMBER), noop);
        let set = tree.root().child("set").unwrap();
        assert_eq!(set.find_match("42").unwrap().pattern(), patterns::NAME);

        let mut tree = CommandTree::new();
        tree.register(set_path(patterns::NUMBER), noop);
        tree.register(set_path(patterns::NAME), noop);
        let set = tree.root().child("set").unwrap();
        assert_eq!(set.find_match("42").unwrap().pattern(), patterns::NUMBER);
        assert_eq!(set.find_match("eth0").unwrap().pattern(), patterns::NAME);
    }
}
