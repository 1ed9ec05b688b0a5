// Prefix tree nodes and their arena identifiers.

use std::fmt;

/// Symbol carried by the root node. It is never part of a word.
pub const ROOT_SYMBOL: char = '*';

/// Stable identifier of a node within one [`crate::PrefixTree`].
///
/// Identifiers are arena indices. Nodes are only ever appended, so an
/// identifier stays valid for the lifetime of the tree, and a child's
/// identifier is always greater than its parent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Arena index of this node.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One character position shared by every inserted word passing through it.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) symbol: char,
    /// Outgoing edges in insertion order. Keys are unique.
    pub(crate) children: Vec<(char, NodeId)>,
    pub(crate) word: Option<String>,
    pub(crate) depth: usize,
}

impl Node {
    pub(crate) fn new(symbol: char, depth: usize) -> Self {
        Self {
            symbol,
            children: Vec::new(),
            word: None,
            depth,
        }
    }

    /// The edge character leading into this node ([`ROOT_SYMBOL`] for the root).
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Whether some inserted word ends exactly here.
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// The complete word ending here, if this node is terminal.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Distance from the root (the root has depth 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = (char, NodeId)> + '_ {
        self.children.iter().copied()
    }

    /// Children in ascending character order.
    pub fn sorted_children(&self) -> Vec<(char, NodeId)> {
        let mut sorted = self.children.clone();
        sorted.sort_unstable_by_key(|&(c, _)| c);
        sorted
    }
}
