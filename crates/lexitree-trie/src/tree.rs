// PrefixTree: arena-backed character trie with prefix search and marking.

use std::collections::VecDeque;

use hashbrown::HashMap;
use lexitree_core::word::fold_word;

use crate::completion::Completions;
use crate::marks::{NodeFlags, QueryMarks};
use crate::node::{Node, NodeId, ROOT_SYMBOL};
use crate::ranker::SuggestionRanker;

/// Result of [`PrefixTree::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Search {
    /// Ranked completions (at most the ranker's cap).
    pub words: Vec<String>,
    /// The node terminating the prefix path, if the whole prefix matched.
    pub node: Option<NodeId>,
}

/// A dictionary of lowercase words stored as a character trie.
///
/// Nodes are kept in an arena and addressed by [`NodeId`]. Each node owns
/// its list of outgoing edges; an additional `(parent, char) -> child` index
/// makes edge lookup independent of fan-out.
///
/// The tree also remembers the marks of the most recent
/// [`highlight_path`](Self::highlight_path) call so presentation code can
/// look up per-node flags by identifier.
#[derive(Debug, Clone)]
pub struct PrefixTree {
    nodes: Vec<Node>,
    edges: HashMap<(NodeId, char), NodeId>,
    marks: QueryMarks,
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTree {
    /// Create a tree holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(ROOT_SYMBOL, 0)],
            edges: HashMap::new(),
            marks: QueryMarks::default(),
        }
    }

    /// Build a tree from a word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for word in words {
            tree.insert(word.as_ref());
        }
        tree
    }

    // =========================================================================
    // Structure
    // =========================================================================

    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    /// Look up a node by identifier.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The child of `parent` along edge `ch`.
    #[inline]
    pub fn child(&self, parent: NodeId, ch: char) -> Option<NodeId> {
        self.edges.get(&(parent, ch)).copied()
    }

    /// All nodes paired with their identifiers, in arena order.
    ///
    /// Arena order visits every parent before its children.
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = (NodeId, &Node)> + ExactSizeIterator + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Every `(parent, child)` edge of the tree.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.iter()
            .flat_map(|(id, node)| node.children().map(move |(_, child)| (id, child)))
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Insert a word.
    ///
    /// The word is folded to lowercase. One node is created per missing
    /// character edge; the final node becomes terminal and records the folded
    /// word. The empty string is a no-op.
    ///
    /// Returns `true` if the word was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let folded = fold_word(word);
        let mut current = NodeId::ROOT;
        for ch in folded.chars() {
            current = match self.child(current, ch) {
                Some(next) => next,
                None => self.push_child(current, ch),
            };
        }
        let node = &mut self.nodes[current.0];
        if node.word.is_some() {
            return false;
        }
        node.word = Some(folded);
        true
    }

    fn push_child(&mut self, parent: NodeId, ch: char) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(Node::new(ch, depth));
        self.nodes[parent.0].children.push((ch, id));
        self.edges.insert((parent, ch), id);
        id
    }

    /// Whether `word` (after folding) was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word)
            .and_then(|id| self.node(id))
            .is_some_and(Node::is_terminal)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Walk the folded prefix from the root.
    ///
    /// Returns the nodes along the path, root excluded, or `None` if some
    /// character has no matching edge. The empty prefix yields an empty path.
    pub fn path(&self, prefix: &str) -> Option<Vec<NodeId>> {
        let folded = fold_word(prefix);
        let mut path = Vec::with_capacity(folded.len());
        let mut current = NodeId::ROOT;
        for ch in folded.chars() {
            current = self.child(current, ch)?;
            path.push(current);
        }
        Some(path)
    }

    /// The node terminating the folded prefix path. The empty prefix maps to
    /// the root.
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        let folded = fold_word(prefix);
        folded
            .chars()
            .try_fold(NodeId::ROOT, |current, ch| self.child(current, ch))
    }

    /// Words in the subtree of `from`, in character-ordered depth-first order.
    ///
    /// The iterator is lazy; pulling `n` words only visits the nodes needed
    /// to produce them.
    pub fn completions(&self, from: NodeId) -> Completions<'_> {
        Completions::new(self, from)
    }

    /// Find completions for a prefix with the default ranker.
    ///
    /// See [`search_with`](Self::search_with).
    pub fn search(&self, prefix: &str) -> Search {
        self.search_with(prefix, &SuggestionRanker::default())
    }

    /// Find completions for a prefix.
    ///
    /// The empty prefix and a prefix with no matching path both yield an
    /// empty result with no terminating node. Otherwise the ranker pulls at
    /// most its cap of words from [`completions`](Self::completions) and sorts
    /// them; the cap truncates the character-ordered traversal before sorting,
    /// so a short word deep in a later branch can be missed.
    pub fn search_with(&self, prefix: &str, ranker: &SuggestionRanker) -> Search {
        if prefix.is_empty() {
            return Search::default();
        }
        match self.find(prefix) {
            Some(node) => Search {
                words: ranker.rank(self.completions(node)),
                node: Some(node),
            },
            None => Search::default(),
        }
    }

    /// Every node in the subtree rooted at `from`, `from` included.
    pub fn subtree(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children().map(|(_, child)| child));
        }
        out
    }

    // =========================================================================
    // Marking
    // =========================================================================

    /// Recompute the marks for a query prefix.
    ///
    /// All previous marks are discarded first. If the prefix is non-empty
    /// and fully matched, every node on its path (root excluded) is marked
    /// as on-path and the terminating node plus all of its descendants as
    /// in-subtree. An empty or unmatched prefix leaves no marks.
    pub fn highlight_path(&mut self, prefix: &str) -> &QueryMarks {
        self.marks = self.marks_for(prefix);
        &self.marks
    }

    /// Compute the marks for a prefix without storing them.
    pub fn marks_for(&self, prefix: &str) -> QueryMarks {
        if prefix.is_empty() {
            return QueryMarks::default();
        }
        match self.path(prefix) {
            Some(path) => match path.last().copied() {
                Some(end) => QueryMarks::new(path, self.subtree(end)),
                None => QueryMarks::default(),
            },
            None => QueryMarks::default(),
        }
    }

    /// Marks of the most recent [`highlight_path`](Self::highlight_path).
    pub fn marks(&self) -> &QueryMarks {
        &self.marks
    }

    /// Flags of a node under the most recent marks.
    pub fn flags(&self, id: NodeId) -> NodeFlags {
        self.marks.flags(id)
    }

    /// Discard all marks.
    pub fn clear_marks(&mut self) {
        self.marks = QueryMarks::default();
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// All nodes in breadth-first order from the root.
    ///
    /// Within a level, children follow insertion order, not character order.
    /// Callers must only rely on this traversal for completeness (counting,
    /// drawing every node), never for ordering.
    pub fn all_nodes(&self) -> Bfs<'_> {
        Bfs {
            tree: self,
            queue: VecDeque::from([NodeId::ROOT]),
        }
    }

    /// Number of terminal nodes, i.e. the dictionary size.
    pub fn count_terminal_nodes(&self) -> usize {
        self.all_nodes().filter(|(_, n)| n.is_terminal()).count()
    }
}

/// Breadth-first node iterator returned by [`PrefixTree::all_nodes`].
pub struct Bfs<'a> {
    tree: &'a PrefixTree,
    queue: VecDeque<NodeId>,
}

impl<'a> Iterator for Bfs<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = &self.tree.nodes[id.0];
        self.queue.extend(node.children().map(|(_, child)| child));
        Some((id, node))
    }
}
