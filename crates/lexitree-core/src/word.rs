// Word folding and validation.

use crate::character::is_word_char;

/// Error type for dictionary words rejected by [`check_word`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// The word is empty (or folds to an empty string).
    #[error("empty word")]
    Empty,

    /// The word contains a character that is neither a letter nor whitespace.
    #[error("invalid character {ch:?} at position {position} in word {word:?}")]
    InvalidCharacter {
        word: String,
        ch: char,
        position: usize,
    },
}

/// Fold a word or prefix to the form stored in the tree.
///
/// Folding is full Unicode lowercasing; a character whose lowercase form
/// expands to several characters contributes all of them.
pub fn fold_word(word: &str) -> String {
    word.to_lowercase()
}

/// Validate a dictionary word.
///
/// Accepts words made of letters and whitespace only. `position` in the
/// error is a character index, not a byte offset.
pub fn check_word(word: &str) -> Result<(), WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    match word.chars().enumerate().find(|&(_, c)| !is_word_char(c)) {
        Some((position, ch)) => Err(WordError::InvalidCharacter {
            word: word.to_string(),
            ch,
            position,
        }),
        None => Ok(()),
    }
}

/// Number of characters in a word. Ranking and display use character
/// counts, never byte lengths.
#[inline]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}
