use rand::Rng;

use crate::random::random_index;

/// Suffix appended by [`truncate_default`].
pub const DEFAULT_TRUNCATE_SUFFIX: &str = "...";

/// Alphanumeric charset used by [`random_string`] when none is given.
pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Truncate a string to `length` characters, ending with `suffix`.
///
/// Lengths are counted in characters, not bytes. When `length` is shorter
/// than the suffix itself, only the suffix is returned.
///
/// # Examples
///
/// ```
/// use casoon_util::strings::truncate;
///
/// assert_eq!(truncate("This is a very long string", 10, "..."), "This is...");
/// assert_eq!(truncate("Short", 10, "..."), "Short");
/// assert_eq!(truncate("abcdef", 4, "…"), "abc…");
/// ```
pub fn truncate(s: &str, length: usize, suffix: &str) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }

    let keep = length.saturating_sub(suffix.chars().count());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

/// [`truncate`] with the default `"..."` suffix.
pub fn truncate_default(s: &str, length: usize) -> String {
    truncate(s, length, DEFAULT_TRUNCATE_SUFFIX)
}

/// Collapse whitespace runs to a single space and trim both ends.
///
/// # Examples
///
/// ```
/// use casoon_util::strings::clean_whitespace;
///
/// assert_eq!(clean_whitespace("  hello    world  "), "hello world");
/// assert_eq!(clean_whitespace("a\n\tb"), "a b");
/// ```
pub fn clean_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Generate a random string of `length` characters drawn from `charset`.
///
/// Uses the thread-local generator; see [`random_string_with`] for a
/// reproducible variant. An empty charset yields an empty string.
///
/// # Examples
///
/// ```
/// use casoon_util::strings::{random_string, DEFAULT_CHARSET};
///
/// let s = random_string(8, DEFAULT_CHARSET);
/// assert_eq!(s.chars().count(), 8);
/// assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn random_string(length: usize, charset: &str) -> String {
    random_string_with(&mut rand::thread_rng(), length, charset)
}

/// Generate a random string using the supplied generator.
pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, length: usize, charset: &str) -> String {
    let chars: Vec<char> = charset.chars().collect();
    (0..length)
        .filter_map(|_| random_index(rng, chars.len()).map(|i| chars[i]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded_rng;

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("hello", 5, "..."), "hello");
    }

    #[test]
    fn test_truncate_length_below_suffix() {
        assert_eq!(truncate("hello world", 2, "..."), "...");
        assert_eq!(truncate("hello world", 0, "..."), "...");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("日本語のテキスト", 5, "..."), "日本...");
    }

    #[test]
    fn test_truncate_default_suffix() {
        assert_eq!(truncate_default("abcdefghij", 6), "abc...");
    }

    #[test]
    fn test_clean_whitespace_empty() {
        assert_eq!(clean_whitespace(""), "");
        assert_eq!(clean_whitespace("   "), "");
    }

    #[test]
    fn test_random_string_charset() {
        let mut rng = seeded_rng(3);
        let s = random_string_with(&mut rng, 32, "01");
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn test_random_string_reproducible() {
        let a = random_string_with(&mut seeded_rng(9), 16, DEFAULT_CHARSET);
        let b = random_string_with(&mut seeded_rng(9), 16, DEFAULT_CHARSET);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_string_empty_charset() {
        assert_eq!(random_string(10, ""), "");
    }

    #[test]
    fn test_random_string_zero_length() {
        assert_eq!(random_string(0, DEFAULT_CHARSET), "");
    }
}
