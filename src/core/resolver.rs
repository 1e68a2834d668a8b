//! Walking the command tree with a tokenized line.
//!
//! Two traversals share the same matching rules:
//!
//! - [`CommandTree::resolve_exact`] finds the node for a complete command
//!   line, which is then executed if it carries a handler.
//! - [`CommandTree::candidates`] finds the nodes compatible with a line that
//!   may end in a partial token, for help and tab completion.

use super::tree::{CommandNode, CommandTree};

/// Where a candidate list came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateSource {
    /// Every token matched; these are the children of the last node.
    Children,
    /// Every token matched and the last node has no children; the list
    /// holds that node alone.
    Leaf,
    /// A token matched no child; these are the siblings whose pattern text
    /// starts with that token.
    Prefix,
}

/// Nodes compatible with a (possibly partial) line, sorted by pattern.
#[derive(Debug)]
pub struct Candidates<'a> {
    pub nodes: Vec<&'a CommandNode>,
    pub source: CandidateSource,
}

impl<'a> Candidates<'a> {
    fn sorted(mut nodes: Vec<&'a CommandNode>, source: CandidateSource) -> Self {
        nodes.sort_by(|a, b| a.pattern().cmp(b.pattern()));
        Self { nodes, source }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl CommandTree {
    /// Resolve a complete line to a single node.
    ///
    /// Every token must be accepted by one child of the current level.
    /// Returns `None` for an empty line or when some token matches nothing.
    /// The returned node is only a command if it
    /// [is executable](CommandNode::is_executable).
    pub fn resolve_exact<S: AsRef<str>>(&self, args: &[S]) -> Option<&CommandNode> {
        if args.is_empty() {
            return None;
        }

        let mut node = self.root();
        for arg in args {
            node = node.find_match(arg.as_ref())?;
        }
        Some(node)
    }

    /// Nodes compatible with `args`, sorted by pattern string.
    pub fn resolve_candidates<S: AsRef<str>>(&self, args: &[S]) -> Vec<&CommandNode> {
        self.candidates(args).nodes
    }

    /// Like [`resolve_candidates`](Self::resolve_candidates), also reporting
    /// how the list was produced.
    ///
    /// An empty `args` yields the first-level commands.
    pub fn candidates<S: AsRef<str>>(&self, args: &[S]) -> Candidates<'_> {
        let mut node = self.root();
        for arg in args {
            let arg = arg.as_ref();
            match node.find_match(arg) {
                Some(next) => node = next,
                None => {
                    let prefixed = node
                        .children()
                        .iter()
                        .filter(|c| c.pattern().starts_with(arg))
                        .collect();
                    return Candidates::sorted(prefixed, CandidateSource::Prefix);
                }
            }
        }

        if !args.is_empty() && node.is_leaf() {
            Candidates::sorted(vec![node], CandidateSource::Leaf)
        } else {
            Candidates::sorted(node.children().iter().collect(), CandidateSource::Children)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
