//! Prefix-completion engine with a proportional tree layout.
//!
//! A [`PrefixTree`] stores a lowercase dictionary one character per edge and
//! answers prefix queries with at most [`MAX_SUGGESTIONS`] ranked completions.
//! Each query also marks the nodes on the prefix path and in its completion
//! subtree. [`TreeLayout`] assigns every node a pixel position so that a
//! subtree's width is proportional to the number of leaves beneath it.
//!
//! # Architecture
//!
//! - [`node`] -- arena nodes and [`NodeId`]
//! - [`tree`] -- insertion, lookup, marking and breadth-first traversal
//! - [`completion`] -- lazy character-ordered subtree walk
//! - [`ranker`] -- bounded collection and length/lexicographic ordering
//! - [`marks`] -- path and subtree identifier sets, per-node flags
//! - [`layout`] -- leaf counts and node placement
//! - [`display`] -- status panel data and suggestion splitting
//! - [`dictionary`] -- built-in word list and word-list files
//! - [`handle`] -- [`AutocompleteHandle`], the surface shells call into
//!
//! # Example
//!
//! ```
//! use lexitree_trie::AutocompleteHandle;
//!
//! let mut engine = AutocompleteHandle::from_words(["car", "cat", "cara"]);
//! let layout = engine.layout(1000).clone();
//! let result = engine.query("Ca");
//! assert_eq!(result.words, ["car", "cat", "cara"]);
//! for id in result.path_nodes() {
//!     assert!(layout.point(*id).is_some());
//! }
//! ```

pub mod completion;
pub mod dictionary;
pub mod display;
pub mod handle;
pub mod layout;
pub mod marks;
pub mod node;
pub mod ranker;
pub mod tree;

pub use completion::Completions;
pub use dictionary::{DEFAULT_WORDS, DictionaryError, WordList};
pub use display::{QueryStats, split_completion};
pub use handle::{AutocompleteHandle, QueryResult};
pub use layout::{
    DEFAULT_CANVAS_WIDTH, Layout, LayoutError, LayoutOptions, Placement, TreeLayout,
};
pub use marks::{NodeFlags, NodeStyle, QueryMarks};
pub use node::{Node, NodeId, ROOT_SYMBOL};
pub use ranker::{MAX_SUGGESTIONS, SuggestionRanker};
pub use tree::{PrefixTree, Search};
