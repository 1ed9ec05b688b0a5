// TreeLayout: proportional 2-D placement of prefix tree nodes.
//
// Two passes over the arena:
// 1. Leaf counts, bottom-up. Children always have larger identifiers than
//    their parents, so a reverse sweep sees every child before its parent.
// 2. Placement, top-down with an explicit stack. A node sits at the midpoint
//    of its span; the span is split among the children in ascending character
//    order, each child getting `leaf_count * unit_width` pixels.
//
// The result depends only on the tree's shape and edge characters, never on
// query marks.

use hashbrown::HashMap;
use lexitree_core::geometry::{Point, Span};
use log::debug;

use crate::node::NodeId;
use crate::tree::PrefixTree;

/// Canvas width used when a shell does not specify one.
pub const DEFAULT_CANVAS_WIDTH: i32 = 1000;

/// Error type for rejected [`LayoutOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("unit width must be positive, got {0}")]
    NonPositiveUnitWidth(i32),
    #[error("level height must not be negative, got {0}")]
    NegativeLevelHeight(i32),
}

/// Layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Horizontal pixels allotted per leaf. Must be positive.
    pub unit_width: i32,
    /// Vertical pixels between consecutive depths. Must not be negative.
    pub level_height: i32,
    /// `y` of the root.
    pub top_offset: i32,
    /// Smallest `x` the root span may start at.
    pub min_left: i32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            unit_width: 40,
            level_height: 65,
            top_offset: 100,
            min_left: 20,
        }
    }
}

impl LayoutOptions {
    /// Check the options keep sibling spans disjoint and rows ordered by depth.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.unit_width <= 0 {
            return Err(LayoutError::NonPositiveUnitWidth(self.unit_width));
        }
        if self.level_height < 0 {
            return Err(LayoutError::NegativeLevelHeight(self.level_height));
        }
        Ok(())
    }
}

/// Where one node was placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placement {
    pub point: Point,
    /// Horizontal span allotted to the node's subtree.
    pub span: Span,
    /// Number of childless nodes in the subtree (1 for a leaf).
    pub leaves: usize,
}

/// Positions of every node of a tree, indexed by [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    canvas_width: i32,
    options: LayoutOptions,
    placements: Vec<Placement>,
}

impl Layout {
    pub fn canvas_width(&self) -> i32 {
        self.canvas_width
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn get(&self, id: NodeId) -> Option<&Placement> {
        self.placements.get(id.index())
    }

    pub fn point(&self, id: NodeId) -> Option<Point> {
        self.get(id).map(|p| p.point)
    }

    /// Number of placed nodes.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeId, &Placement)> + '_ {
        self.placements
            .iter()
            .enumerate()
            .map(|(i, p)| (NodeId(i), p))
    }

    /// Node identifier to coordinate mapping.
    pub fn to_map(&self) -> HashMap<NodeId, Point> {
        self.iter().map(|(id, p)| (id, p.point)).collect()
    }

    /// Width of the whole tree in pixels.
    pub fn total_width(&self) -> i32 {
        self.placements.first().map_or(0, |p| p.span.width)
    }
}

/// Computes [`Layout`]s for prefix trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeLayout {
    options: LayoutOptions,
}

impl TreeLayout {
    pub fn new(options: LayoutOptions) -> Result<Self, LayoutError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Place every node of `tree` on a canvas `canvas_width` pixels wide.
    ///
    /// The tree is centred horizontally but its span never starts left of
    /// `min_left`. A tree holding only the root places the root at the canvas
    /// centre.
    pub fn compute(&self, tree: &PrefixTree, canvas_width: i32) -> Layout {
        let opts = self.options;
        let leaves = leaf_counts(tree);

        if tree.root().is_leaf() {
            let x = canvas_width.div_euclid(2);
            debug!("layout: empty tree, root at ({x}, {})", opts.top_offset);
            return Layout {
                canvas_width,
                options: opts,
                placements: vec![Placement {
                    point: Point::new(x, opts.top_offset),
                    span: Span::new(x - opts.unit_width / 2, opts.unit_width),
                    leaves: 1,
                }],
            };
        }

        let total_width = width_of(leaves[0], opts.unit_width);
        let start_x = (canvas_width.saturating_sub(total_width))
            .div_euclid(2)
            .max(opts.min_left);
        debug!(
            "layout: {} nodes, {} leaves, total width {total_width}, start x {start_x}",
            tree.node_count(),
            leaves[0],
        );

        let mut placements = vec![Placement::default(); tree.node_count()];
        let mut stack = vec![(NodeId::ROOT, Span::new(start_x, total_width), opts.top_offset)];
        while let Some((id, span, y)) = stack.pop() {
            let Some(node) = tree.node(id) else {
                continue;
            };
            placements[id.index()] = Placement {
                point: Point::new(span.midpoint(), y),
                span,
                leaves: leaves[id.index()],
            };
            let mut cursor = span.x;
            for (_, child) in node.sorted_children() {
                let width = width_of(leaves[child.index()], opts.unit_width);
                stack.push((
                    child,
                    Span::new(cursor, width),
                    y.saturating_add(opts.level_height),
                ));
                cursor = cursor.saturating_add(width);
            }
        }

        Layout {
            canvas_width,
            options: opts,
            placements,
        }
    }
}

/// Number of childless nodes beneath each node, indexed by [`NodeId`].
pub fn leaf_counts(tree: &PrefixTree) -> Vec<usize> {
    let mut counts = vec![0usize; tree.node_count()];
    for (id, node) in tree.iter().rev() {
        counts[id.index()] = if node.is_leaf() {
            1
        } else {
            node.children().map(|(_, child)| counts[child.index()]).sum()
        };
    }
    counts
}

fn width_of(leaves: usize, unit_width: i32) -> i32 {
    i32::try_from(leaves)
        .unwrap_or(i32::MAX)
        .saturating_mul(unit_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(words: &[&str], canvas_width: i32) -> (PrefixTree, Layout) {
        let tree = PrefixTree::from_words(words.iter().copied());
        let layout = TreeLayout::default().compute(&tree, canvas_width);
        (tree, layout)
    }

    #[test]
    fn empty_tree_centres_root() {
        let (_, layout) = layout(&[], 1000);
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.point(NodeId::ROOT), Some(Point::new(500, 100)));
    }

    #[test]
    fn leaf_counts_sum_children() {
        let tree = PrefixTree::from_words(["car", "cat", "cara", "dog"]);
        let counts = leaf_counts(&tree);
        assert_eq!(counts[0], 3);
        assert_eq!(counts[tree.find("ca").unwrap().index()], 2);
        // A single-child chain counts as one leaf.
        assert_eq!(counts[tree.find("car").unwrap().index()], 1);
        assert_eq!(counts[tree.find("d").unwrap().index()], 1);
    }

    #[test]
    fn root_is_centred() {
        // 3 leaves * 40 = 120 wide; start = (1000 - 120) / 2 = 440.
        let (_, layout) = layout(&["car", "cat", "dog"], 1000);
        assert_eq!(layout.total_width(), 120);
        let root = layout.get(NodeId::ROOT).unwrap();
        assert_eq!(root.span, Span::new(440, 120));
        assert_eq!(root.point, Point::new(500, 100));
    }

    #[test]
    fn wide_tree_is_clamped_to_min_left() {
        let words: Vec<String> = (b'a'..=b'z')
            .flat_map(|a| (b'a'..=b'b').map(move |b| format!("{}{}", a as char, b as char)))
            .collect();
        let tree = PrefixTree::from_words(&words);
        let layout = TreeLayout::default().compute(&tree, 1000);
        // 52 leaves * 40 = 2080 > 1000.
        assert_eq!(layout.get(NodeId::ROOT).unwrap().span.x, 20);
        assert_eq!(layout.point(NodeId::ROOT).unwrap().x, 20 + 2080 / 2);
    }

    #[test]
    fn children_are_ordered_by_character() {
        let (tree, layout) = layout(&["b", "a", "c"], 1000);
        let a = layout.point(tree.find("a").unwrap()).unwrap();
        let b = layout.point(tree.find("b").unwrap()).unwrap();
        let c = layout.point(tree.find("c").unwrap()).unwrap();
        assert!(a.x < b.x && b.x < c.x);
        assert_eq!(a.y, 165);
        assert_eq!(b.x, 500);
    }

    #[test]
    fn levels_step_down() {
        let (tree, layout) = layout(&["abc"], 1000);
        for (depth, id) in tree.path("abc").unwrap().into_iter().enumerate() {
            assert_eq!(layout.point(id).unwrap().y, 100 + 65 * (depth as i32 + 1));
        }
    }

    #[test]
    fn spans_partition_parent_span() {
        let (tree, layout) = layout(&["algo", "alga", "apple", "aufa", "batu"], 1000);
        for (id, node) in tree.iter() {
            let parent = layout.get(id).unwrap();
            assert!(parent.span.contains(parent.point.x));
            let mut cursor = parent.span.x;
            for (_, child) in node.sorted_children() {
                let span = layout.get(child).unwrap().span;
                assert_eq!(span.x, cursor);
                cursor = span.end();
            }
            if !node.is_leaf() {
                assert_eq!(cursor, parent.span.end());
            }
        }
    }

    #[test]
    fn custom_options() {
        let tree = PrefixTree::from_words(["ab", "ac"]);
        let opts = LayoutOptions {
            unit_width: 10,
            level_height: 30,
            top_offset: 5,
            min_left: 0,
        };
        let layout = TreeLayout::new(opts).unwrap().compute(&tree, 100);
        // 2 leaves * 10 = 20; start = 40; root at 50.
        assert_eq!(layout.point(NodeId::ROOT), Some(Point::new(50, 5)));
        assert_eq!(layout.point(tree.find("a").unwrap()), Some(Point::new(50, 35)));
        assert_eq!(layout.point(tree.find("ab").unwrap()), Some(Point::new(45, 65)));
        assert_eq!(layout.point(tree.find("ac").unwrap()), Some(Point::new(55, 65)));
    }

    #[test]
    fn rejects_non_positive_unit_width() {
        for unit_width in [0, -40] {
            let opts = LayoutOptions {
                unit_width,
                ..LayoutOptions::default()
            };
            assert_eq!(
                TreeLayout::new(opts),
                Err(LayoutError::NonPositiveUnitWidth(unit_width))
            );
        }
    }

    #[test]
    fn rejects_negative_level_height() {
        let opts = LayoutOptions {
            level_height: -1,
            ..LayoutOptions::default()
        };
        assert_eq!(
            opts.validate(),
            Err(LayoutError::NegativeLevelHeight(-1))
        );
        let flat = LayoutOptions {
            level_height: 0,
            ..LayoutOptions::default()
        };
        assert_eq!(flat.validate(), Ok(()));
    }

    #[test]
    fn huge_level_height_saturates() {
        let tree = PrefixTree::from_words(["ab", "ac"]);
        let opts = LayoutOptions {
            level_height: i32::MAX,
            ..LayoutOptions::default()
        };
        let layout = TreeLayout::new(opts).unwrap().compute(&tree, 1000);
        let ab = layout.point(tree.find("ab").unwrap()).unwrap();
        let ac = layout.point(tree.find("ac").unwrap()).unwrap();
        assert_eq!(ab.y, i32::MAX);
        assert!(ab.x < ac.x);
    }

    #[test]
    fn to_map_covers_every_node() {
        let (tree, layout) = layout(&["data", "date", "diskrit"], 1000);
        let map = layout.to_map();
        assert_eq!(map.len(), tree.node_count());
        assert_eq!(map[&NodeId::ROOT], layout.point(NodeId::ROOT).unwrap());
    }
}
