// Bounded single-line text input.
//
// Models the search box of a presentation shell: typed characters are
// filtered to letters and whitespace, the line is capped in length, and the
// query prefix is the trimmed contents.

use crate::character::is_word_char;

/// Maximum number of characters the input line holds.
pub const MAX_INPUT_LEN: usize = 25;

/// Single-line text input feeding prefix queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    len: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed character.
    ///
    /// Returns `true` if the character was accepted (the line changed).
    /// Characters other than letters and whitespace are dropped, as is any
    /// character typed once the line holds [`MAX_INPUT_LEN`] characters.
    pub fn push(&mut self, ch: char) -> bool {
        if self.len >= MAX_INPUT_LEN || !is_word_char(ch) {
            return false;
        }
        self.text.push(ch);
        self.len += 1;
        true
    }

    /// Remove the last character. Returns `true` if a character was removed.
    pub fn backspace(&mut self) -> bool {
        match self.text.pop() {
            Some(_) => {
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Replace the whole line, e.g. when a suggestion is picked.
    ///
    /// The text is stored as given; it is not filtered or capped.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.len = text.chars().count();
    }

    /// The query prefix: the contents with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// The raw contents including surrounding whitespace.
    pub fn raw(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.len = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputLine {
        let mut line = InputLine::new();
        for c in s.chars() {
            line.push(c);
        }
        line
    }

    #[test]
    fn accepts_letters_and_spaces() {
        let line = typed("Ca t");
        assert_eq!(line.raw(), "Ca t");
    }

    #[test]
    fn drops_digits_and_punctuation() {
        let mut line = InputLine::new();
        assert!(line.push('c'));
        assert!(!line.push('1'));
        assert!(!line.push('.'));
        assert!(line.push('a'));
        assert_eq!(line.raw(), "ca");
    }

    #[test]
    fn caps_length() {
        let line = typed(&"a".repeat(MAX_INPUT_LEN + 5));
        assert_eq!(line.raw().chars().count(), MAX_INPUT_LEN);
        let mut line = line;
        assert!(!line.push('b'));
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut line = typed("cat");
        assert!(line.backspace());
        assert_eq!(line.raw(), "ca");
        line.clear();
        assert!(!line.backspace());
        assert!(line.is_empty());
    }

    #[test]
    fn text_is_trimmed() {
        let line = typed("  car ");
        assert_eq!(line.text(), "car");
        assert_eq!(line.raw(), "  car ");
    }

    #[test]
    fn set_text_replaces_contents() {
        let mut line = typed("ca");
        line.set_text("coder");
        assert_eq!(line.text(), "coder");
        assert!(line.backspace());
        assert_eq!(line.text(), "code");
    }
}
