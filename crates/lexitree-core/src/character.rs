// Character classification for dictionary words and typed input.

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Letter,
    Whitespace,
    Other,
}

/// Returns the character type for a given character.
///
/// Letters are any Unicode alphabetic character. Whitespace follows
/// [`is_whitespace`]. Everything else, digits included, is `Other`.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    CharType::Other
}

/// Check whether a character may appear in a dictionary word or search box.
///
/// Only letters and whitespace are accepted.
pub fn is_word_char(c: char) -> bool {
    matches!(get_char_type(c), CharType::Letter | CharType::Whitespace)
}

/// Check whether a character is a whitespace character.
///
/// Recognizes ASCII control whitespace, the space, NEL, NO-BREAK SPACE and
/// the Unicode space separators.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// Convert a character to its simple uppercase equivalent.
///
/// Node labels are drawn in upper case.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('A'), CharType::Letter);
        assert_eq!(get_char_type('z'), CharType::Letter);
        assert_eq!(get_char_type('\u{00C4}'), CharType::Letter); // Ä
        assert_eq!(get_char_type('\u{00F6}'), CharType::Letter); // ö
    }

    #[test]
    fn char_type_whitespace() {
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\t'), CharType::Whitespace);
        assert_eq!(get_char_type('\n'), CharType::Whitespace);
    }

    #[test]
    fn digits_are_other() {
        assert_eq!(get_char_type('0'), CharType::Other);
        assert_eq!(get_char_type('9'), CharType::Other);
        assert_eq!(get_char_type('-'), CharType::Other);
        assert_eq!(get_char_type('@'), CharType::Other);
    }

    #[test]
    fn word_chars_are_letters_and_whitespace() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Q'));
        assert!(is_word_char(' '));
        assert!(!is_word_char('1'));
        assert!(!is_word_char('.'));
        assert!(!is_word_char('\''));
    }

    #[test]
    fn whitespace_chars() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\r'));
        assert!(is_whitespace('\u{00A0}')); // NO-BREAK SPACE
        assert!(is_whitespace('\u{3000}')); // IDEOGRAPHIC SPACE
        assert!(!is_whitespace('a'));
        assert!(!is_whitespace('0'));
    }

    #[test]
    fn simple_upper_labels() {
        assert_eq!(simple_upper('z'), 'Z');
        assert_eq!(simple_upper('\u{00F6}'), '\u{00D6}'); // ö -> Ö
        assert_eq!(simple_upper('*'), '*');
    }
}
