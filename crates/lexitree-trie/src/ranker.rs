// Suggestion ranking: bounded collection followed by a stable sort.

use std::cmp::Ordering;

use lexitree_core::word::char_len;

/// Default maximum number of suggestions per query.
pub const MAX_SUGGESTIONS: usize = 8;

/// Orders completion candidates and bounds their number.
///
/// Ranking pulls at most `max_suggestions` candidates from the source in the
/// order the source produces them, then sorts what was pulled by
/// [`compare_suggestions`]. The cap is applied first: candidates past the cap
/// are never seen, even if they would sort ahead of pulled ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionRanker {
    max_suggestions: usize,
}

impl Default for SuggestionRanker {
    fn default() -> Self {
        Self::new(MAX_SUGGESTIONS)
    }
}

impl SuggestionRanker {
    pub fn new(max_suggestions: usize) -> Self {
        Self { max_suggestions }
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    /// Collect and sort candidates.
    pub fn rank<'a, I>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ranked: Vec<String> = candidates
            .into_iter()
            .take(self.max_suggestions)
            .map(str::to_string)
            .collect();
        ranked.sort_by(|a, b| compare_suggestions(a, b));
        ranked
    }
}

/// Shorter words first; equal lengths in lexicographic order.
///
/// Length is measured in characters.
pub fn compare_suggestions(a: &str, b: &str) -> Ordering {
    char_len(a).cmp(&char_len(b)).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_length_then_lexicographically() {
        let ranker = SuggestionRanker::default();
        let ranked = ranker.rank(["cara", "cat", "car"]);
        assert_eq!(ranked, vec!["car", "cat", "cara"]);
    }

    #[test]
    fn caps_before_sorting() {
        let ranker = SuggestionRanker::new(2);
        let ranked = ranker.rank(["long", "longer", "a"]);
        assert_eq!(ranked, vec!["long", "longer"]);
    }

    #[test]
    fn zero_cap_yields_nothing() {
        let ranker = SuggestionRanker::new(0);
        assert!(ranker.rank(["a", "b"]).is_empty());
    }

    #[test]
    fn default_cap_is_eight() {
        let ranker = SuggestionRanker::default();
        assert_eq!(ranker.max_suggestions(), MAX_SUGGESTIONS);
        let many: Vec<String> = (0..20).map(|i| format!("w{i:02}")).collect();
        assert_eq!(ranker.rank(many.iter().map(String::as_str)).len(), 8);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // "\u{00E4}\u{00E4}" is two characters but four bytes.
        assert_eq!(compare_suggestions("\u{00E4}\u{00E4}", "abc"), Ordering::Less);
        assert_eq!(compare_suggestions("ab", "ab"), Ordering::Equal);
        assert_eq!(compare_suggestions("ab", "aa"), Ordering::Greater);
    }
}
