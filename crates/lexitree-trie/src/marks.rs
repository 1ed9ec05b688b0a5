// Query marks: which nodes lie on the queried prefix path and which belong
// to its completion subtree.

use hashbrown::HashSet;

use crate::node::NodeId;

/// Per-node marking flags for one query.
///
/// Both flags are set together only on the node terminating the prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NodeFlags {
    /// The node lies on the character path of the prefix (root excluded).
    pub on_path: bool,
    /// The node is the prefix's terminating node or one of its descendants.
    pub in_subtree: bool,
}

impl NodeFlags {
    pub fn style(self) -> NodeStyle {
        if self.on_path {
            NodeStyle::Path
        } else if self.in_subtree {
            NodeStyle::Completion
        } else {
            NodeStyle::Plain
        }
    }
}

/// How a presentation shell should draw a node, or the edge leading into it.
///
/// Path takes precedence over completion, so the terminating node is drawn
/// as part of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeStyle {
    Path,
    Completion,
    Plain,
}

impl NodeStyle {
    /// Lowercase name used by the command-line and JavaScript front ends.
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeStyle::Path => "path",
            NodeStyle::Completion => "completion",
            NodeStyle::Plain => "plain",
        }
    }
}

/// Node identifier sets produced by one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMarks {
    path: Vec<NodeId>,
    path_set: HashSet<NodeId>,
    subtree: HashSet<NodeId>,
}

impl QueryMarks {
    /// `path` is ordered from the first character to the terminating node.
    pub(crate) fn new(path: Vec<NodeId>, subtree: Vec<NodeId>) -> Self {
        let path_set = path.iter().copied().collect();
        Self {
            path,
            path_set,
            subtree: subtree.into_iter().collect(),
        }
    }

    /// The node terminating the prefix path.
    pub fn end(&self) -> Option<NodeId> {
        self.path.last().copied()
    }

    /// Path nodes in order from the first character to the terminating node.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    pub fn path_nodes(&self) -> &HashSet<NodeId> {
        &self.path_set
    }

    pub fn subtree_nodes(&self) -> &HashSet<NodeId> {
        &self.subtree
    }

    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    pub fn subtree_len(&self) -> usize {
        self.subtree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.subtree.is_empty()
    }

    pub fn flags(&self, id: NodeId) -> NodeFlags {
        NodeFlags {
            on_path: self.path_set.contains(&id),
            in_subtree: self.subtree.contains(&id),
        }
    }
}
