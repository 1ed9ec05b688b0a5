// AutocompleteHandle: the engine surface a presentation shell talks to.
//
// Owns the prefix tree, the ranker and the layout engine, caches the most
// recent layout, and remembers the last query so a picked suggestion can be
// turned into the next query.
//
// Design notes:
// - A query is `search` plus `highlight_path` with the same prefix; the
//   handle only exposes the composite so the two cannot drift apart.
// - The cached layout is dropped whenever an insertion creates nodes or the
//   layout options change. Marks never invalidate it.

use hashbrown::HashSet;
use lexitree_core::word::{WordError, check_word};
use log::trace;

use crate::dictionary::DEFAULT_WORDS;
use crate::display::QueryStats;
use crate::layout::{Layout, LayoutError, LayoutOptions, TreeLayout};
use crate::marks::{NodeFlags, NodeStyle, QueryMarks};
use crate::node::NodeId;
use crate::ranker::{MAX_SUGGESTIONS, SuggestionRanker};
use crate::tree::PrefixTree;

/// Outcome of one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    /// Ranked completions, at most the handle's suggestion cap.
    pub words: Vec<String>,
    /// Path and subtree node sets for the prefix.
    pub marks: QueryMarks,
}

impl QueryResult {
    pub fn path_nodes(&self) -> &HashSet<NodeId> {
        self.marks.path_nodes()
    }

    pub fn subtree_nodes(&self) -> &HashSet<NodeId> {
        self.marks.subtree_nodes()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.marks.is_empty()
    }
}

/// Prefix completion engine with tree layout.
///
/// Typical use: insert the dictionary, call [`layout`](Self::layout) once,
/// then call [`query`](Self::query) on every change of the search text.
#[derive(Debug, Clone)]
pub struct AutocompleteHandle {
    tree: PrefixTree,
    ranker: SuggestionRanker,
    layout_engine: TreeLayout,
    layout: Option<Layout>,
    /// Prefix of the most recent query.
    last_prefix: String,
    /// Words returned by the most recent query.
    last_words: Vec<String>,
}

impl Default for AutocompleteHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl AutocompleteHandle {
    /// Create an engine with an empty dictionary.
    pub fn new() -> Self {
        Self {
            tree: PrefixTree::new(),
            ranker: SuggestionRanker::new(MAX_SUGGESTIONS),
            layout_engine: TreeLayout::default(),
            layout: None,
            last_prefix: String::new(),
            last_words: Vec::new(),
        }
    }

    /// Create an engine loaded with [`DEFAULT_WORDS`].
    pub fn with_default_words() -> Self {
        Self::from_words(DEFAULT_WORDS.iter().copied())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut handle = Self::new();
        for word in words {
            handle.insert(word.as_ref());
        }
        handle
    }

    // =========================================================================
    // Dictionary
    // =========================================================================

    /// Insert a word (folded to lowercase). Any characters are accepted; the
    /// empty string is ignored.
    ///
    /// Returns `true` if the word was new.
    pub fn insert(&mut self, word: &str) -> bool {
        let before = self.tree.node_count();
        let added = self.tree.insert(word);
        if self.tree.node_count() != before {
            self.layout = None;
        }
        added
    }

    /// Insert a word after validating it with [`check_word`].
    pub fn try_insert(&mut self, word: &str) -> Result<bool, WordError> {
        check_word(word)?;
        Ok(self.insert(word))
    }

    /// Dictionary size, counted over the tree's terminal nodes.
    pub fn count_terminal_nodes(&self) -> usize {
        self.tree.count_terminal_nodes()
    }

    pub fn tree(&self) -> &PrefixTree {
        &self.tree
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Run a query: ranked completions plus path and subtree marks.
    ///
    /// The empty prefix and unmatched prefixes yield an empty result and
    /// clear all marks.
    pub fn query(&mut self, prefix: &str) -> QueryResult {
        let search = self.tree.search_with(prefix, &self.ranker);
        let marks = self.tree.highlight_path(prefix).clone();
        trace!(
            "query {prefix:?}: {} words, {} path nodes, {} subtree nodes",
            search.words.len(),
            marks.path_len(),
            marks.subtree_len()
        );
        self.last_prefix = prefix.to_string();
        self.last_words = search.words.clone();
        QueryResult {
            words: search.words,
            marks,
        }
    }

    /// Pick the `index`-th suggestion of the most recent query and query it.
    ///
    /// Returns `None` without changing any state if there is no such
    /// suggestion.
    pub fn select(&mut self, index: usize) -> Option<QueryResult> {
        let word = self.last_words.get(index)?.clone();
        Some(self.query(&word))
    }

    /// Prefix of the most recent query.
    pub fn last_prefix(&self) -> &str {
        &self.last_prefix
    }

    /// Suggestions returned by the most recent query.
    pub fn suggestions(&self) -> &[String] {
        &self.last_words
    }

    pub fn marks(&self) -> &QueryMarks {
        self.tree.marks()
    }

    pub fn node_flags(&self, id: NodeId) -> NodeFlags {
        self.tree.flags(id)
    }

    pub fn node_style(&self, id: NodeId) -> NodeStyle {
        self.tree.flags(id).style()
    }

    /// Status panel data for the most recent query.
    pub fn stats(&self) -> QueryStats {
        QueryStats::new(
            self.count_terminal_nodes(),
            &self.last_prefix,
            self.last_words.len(),
        )
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Node positions for a canvas `canvas_width` pixels wide.
    ///
    /// Recomputed in full if the tree changed, the options changed or the
    /// width differs from the cached layout; otherwise the cached layout is
    /// returned.
    pub fn layout(&mut self, canvas_width: i32) -> &Layout {
        let layout = match self.layout.take() {
            Some(cached) if cached.canvas_width() == canvas_width => cached,
            _ => self.layout_engine.compute(&self.tree, canvas_width),
        };
        self.layout.insert(layout)
    }

    /// The cached layout, if it is still valid.
    pub fn cached_layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn layout_options(&self) -> &LayoutOptions {
        self.layout_engine.options()
    }

    /// Replace the layout geometry. Invalid options leave the current
    /// options and cached layout untouched.
    pub fn set_layout_options(&mut self, options: LayoutOptions) -> Result<(), LayoutError> {
        if *self.layout_engine.options() != options {
            self.layout_engine = TreeLayout::new(options)?;
            self.layout = None;
        }
        Ok(())
    }

    // =========================================================================
    // Options
    // =========================================================================

    pub fn max_suggestions(&self) -> usize {
        self.ranker.max_suggestions()
    }

    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.ranker = SuggestionRanker::new(max_suggestions);
    }
}
