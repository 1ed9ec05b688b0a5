//! End-to-end checks of the query and layout contract through
//! `AutocompleteHandle`, using the built-in dictionary where possible.

use lexitree_trie::{AutocompleteHandle, NodeId, PrefixTree, TreeLayout};

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[test]
fn ca_over_car_cat_cara() {
    let mut engine = AutocompleteHandle::from_words(["car", "cat", "cara"]);
    assert_eq!(engine.query("ca").words, ["car", "cat", "cara"]);
}

#[test]
fn empty_prefix_returns_nothing_regardless_of_contents() {
    for words in [vec![], vec!["a"], vec!["car", "cat", "zebra"]] {
        let mut engine = AutocompleteHandle::from_words(words);
        let result = engine.query("");
        assert!(result.words.is_empty());
        assert!(result.path_nodes().is_empty());
        assert!(result.subtree_nodes().is_empty());
    }
}

#[test]
fn unmatched_prefix_returns_nothing() {
    let mut engine = AutocompleteHandle::from_words(["car"]);
    let result = engine.query("zz");
    assert!(result.words.is_empty());
    assert!(result.path_nodes().is_empty());
    assert!(result.subtree_nodes().is_empty());
}

#[test]
fn terminating_node_carries_both_marks() {
    let mut engine = AutocompleteHandle::from_words(["car", "cat"]);
    let result = engine.query("ca");
    let end = engine.tree().find("ca").unwrap();
    assert_eq!(engine.tree().node(end).unwrap().depth(), 2);
    let flags = engine.node_flags(end);
    assert!(flags.on_path);
    assert!(flags.in_subtree);
    assert!(!engine.node_flags(NodeId::ROOT).on_path);
    assert!(!result.path_nodes().contains(&NodeId::ROOT));
    let overlap: Vec<_> = result
        .path_nodes()
        .intersection(result.subtree_nodes())
        .collect();
    assert_eq!(overlap, [&end]);
}

#[test]
fn every_prefix_of_every_word_finds_it_once_narrow_enough() {
    let mut engine = AutocompleteHandle::with_default_words();
    for word in lexitree_trie::DEFAULT_WORDS {
        let chars: Vec<char> = word.chars().collect();
        for n in 1..=chars.len() {
            let prefix: String = chars[..n].iter().collect();
            let result = engine.query(&prefix);
            assert!(!result.path_nodes().is_empty(), "prefix {prefix:?} must match");
        }
        // The full word always ranks itself first among its completions.
        assert_eq!(engine.query(word).words.first().map(String::as_str), Some(*word));
    }
}

#[test]
fn truncation_happens_before_sorting() {
    let mut engine = AutocompleteHandle::from_words([
        "baaaaa", "baaaab", "baaaac", "baaaad", "baaaae", "baaaaf", "baaaag", "baaaah", "bb",
    ]);
    let words = engine.query("b").words;
    assert_eq!(words.len(), 8);
    assert!(!words.iter().any(|w| w == "bb"));
    // Collecting everything would have put "bb" first.
    let mut all: Vec<&str> = engine.tree().completions(engine.tree().find("b").unwrap()).collect();
    all.sort_by(|a, b| lexitree_trie::ranker::compare_suggestions(a, b));
    assert_eq!(all[0], "bb");
}

#[test]
fn default_dictionary_queries() {
    let mut engine = AutocompleteHandle::with_default_words();
    assert_eq!(engine.query("a").words, ["alga", "algo", "aufa", "apple"]);
    assert_eq!(engine.query("ba").words, ["baca", "bata", "batu", "batik"]);
    assert_eq!(engine.query("Z").words, ["zahy", "zara", "zebra"]);
    assert_eq!(engine.query("code").words, ["code", "coder"]);
    assert!(engine.query("x").words.is_empty());
}

#[test]
fn insertion_is_idempotent() {
    let once = PrefixTree::from_words(["apple"]);
    let many = PrefixTree::from_words(["apple", "apple", "APPLE", "apple"]);
    assert_eq!(once.node_count(), many.node_count());
    assert_eq!(once.count_terminal_nodes(), many.count_terminal_nodes());
    let terminals = |t: &PrefixTree| -> Vec<bool> { t.iter().map(|(_, n)| n.is_terminal()).collect() };
    assert_eq!(terminals(&once), terminals(&many));
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn default_dictionary_layout_is_centred() {
    let mut engine = AutocompleteHandle::with_default_words();
    let layout = engine.layout(1000);
    let total = layout.total_width();
    let root = layout.point(NodeId::ROOT).unwrap();
    assert_eq!(root.x, ((1000 - total) / 2).max(20) + total / 2);
    assert_eq!(root.y, 100);
}

#[test]
fn layout_ignores_marks() {
    let tree = PrefixTree::from_words(lexitree_trie::DEFAULT_WORDS.iter().copied());
    let before = TreeLayout::default().compute(&tree, 1000);
    let mut marked = tree.clone();
    marked.highlight_path("ca");
    let after = TreeLayout::default().compute(&marked, 1000);
    assert_eq!(before, after);
}
