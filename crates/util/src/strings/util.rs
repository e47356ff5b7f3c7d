/// Check if a character can start or continue a word token.
///
/// Word characters are letters, digits and the underscore.
///
/// # Examples
///
/// ```
/// use casoon_util::strings::is_word_char;
///
/// assert!(is_word_char('a'));
/// assert!(is_word_char('7'));
/// assert!(is_word_char('_'));
/// assert!(!is_word_char('-'));
/// assert!(!is_word_char(' '));
/// ```
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Check if a character separates tokens in identifiers (`-`, `_` or whitespace).
///
/// # Examples
///
/// ```
/// use casoon_util::strings::is_separator;
///
/// assert!(is_separator('-'));
/// assert!(is_separator('_'));
/// assert!(is_separator('\t'));
/// assert!(!is_separator('a'));
/// ```
pub fn is_separator(ch: char) -> bool {
    ch == '-' || ch == '_' || ch.is_whitespace()
}

/// Push `ch` upper-cased, keeping multi-character expansions (`ß` -> `SS`).
pub(crate) fn push_upper(out: &mut String, ch: char) {
    out.extend(ch.to_uppercase());
}

/// Push `ch` lower-cased.
pub(crate) fn push_lower(out: &mut String, ch: char) {
    out.extend(ch.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_word_char_ascii() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('0'));
        assert!(is_word_char('_'));
    }

    #[test]
    fn test_is_word_char_unicode() {
        assert!(is_word_char('é'));
        assert!(is_word_char('日'));
    }

    #[test]
    fn test_is_word_char_not() {
        assert!(!is_word_char(' '));
        assert!(!is_word_char('!'));
        assert!(!is_word_char('-'));
    }

    #[test]
    fn test_is_separator() {
        assert!(is_separator(' '));
        assert!(is_separator('\n'));
        assert!(is_separator('-'));
        assert!(is_separator('_'));
        assert!(!is_separator('.'));
    }

    #[test]
    fn test_push_upper_expands() {
        let mut s = String::new();
        push_upper(&mut s, 'ß');
        assert_eq!(s, "SS");
    }
}
