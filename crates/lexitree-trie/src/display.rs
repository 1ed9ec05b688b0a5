// Presentation helpers: status panel data and suggestion splitting.

use std::fmt;

/// Prefixes longer than this many characters are shortened for display.
pub const PREFIX_DISPLAY_LEN: usize = 10;

/// Data for a status panel shown next to the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStats {
    /// Dictionary size.
    pub total_words: usize,
    /// The current prefix, shortened by [`display_prefix`].
    pub prefix_display: String,
    /// Number of suggestions returned for the prefix.
    pub found: usize,
}

impl QueryStats {
    pub fn new(total_words: usize, prefix: &str, found: usize) -> Self {
        Self {
            total_words,
            prefix_display: display_prefix(prefix),
            found,
        }
    }
}

impl fmt::Display for QueryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "words: {} | prefix: '{}' | found: {}",
            self.total_words, self.prefix_display, self.found
        )
    }
}

/// Shorten a prefix to [`PREFIX_DISPLAY_LEN`] characters followed by `..`.
pub fn display_prefix(prefix: &str) -> String {
    match prefix.char_indices().nth(PREFIX_DISPLAY_LEN) {
        Some((cut, _)) => format!("{}..", &prefix[..cut]),
        None => prefix.to_string(),
    }
}

/// Split a suggestion into the typed part and the completed remainder.
///
/// The split falls after as many characters as `prefix` has, clamped to the
/// word's length.
pub fn split_completion<'a>(word: &'a str, prefix: &str) -> (&'a str, &'a str) {
    let n = prefix.chars().count();
    let cut = word.char_indices().nth(n).map_or(word.len(), |(i, _)| i);
    word.split_at(cut)
}
