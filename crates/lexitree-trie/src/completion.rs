// Lazy character-ordered completion traversal.
//
// Pre-order depth-first walk over a subtree with an explicit stack. A node's
// own word is produced before any word below it, and siblings are visited
// in ascending character order. Nothing is visited until the consumer pulls,
// so `take(n)` bounds the work to the first `n` words.

use std::iter::FusedIterator;

use crate::node::NodeId;
use crate::tree::PrefixTree;

/// Iterator over the words of a subtree, returned by
/// [`PrefixTree::completions`].
pub struct Completions<'a> {
    tree: &'a PrefixTree,
    /// Nodes still to visit; the next node to visit is on top.
    stack: Vec<NodeId>,
}

impl<'a> Completions<'a> {
    pub(crate) fn new(tree: &'a PrefixTree, from: NodeId) -> Self {
        let stack = if tree.node(from).is_some() {
            vec![from]
        } else {
            Vec::new()
        };
        Self { tree, stack }
    }
}

impl<'a> Iterator for Completions<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(id) = self.stack.pop() {
            let Some(node) = self.tree.node(id) else {
                continue;
            };
            // Push in descending order so the smallest character pops first.
            let children = node.sorted_children();
            self.stack
                .extend(children.into_iter().rev().map(|(_, child)| child));
            if let Some(word) = node.word() {
                return Some(word);
            }
        }
        None
    }
}

impl FusedIterator for Completions<'_> {}
