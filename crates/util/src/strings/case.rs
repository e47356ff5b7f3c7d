use regex::Regex;
use std::sync::OnceLock;

use super::util::{is_separator, is_word_char, push_lower, push_upper};

fn lower_upper_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z])([A-Z])").unwrap())
}

fn kebab_separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s_]+").unwrap())
}

fn snake_separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s-]+").unwrap())
}

/// Uppercase the first character of a string, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use casoon_util::strings::capitalize;
///
/// assert_eq!(capitalize("pending"), "Pending");
/// assert_eq!(capitalize("hello world"), "Hello world");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            push_upper(&mut out, first);
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Capitalize every word and lowercase the rest of it.
///
/// A word starts at a letter, digit or underscore and runs until the next
/// whitespace character.
///
/// # Examples
///
/// ```
/// use casoon_util::strings::title_case;
///
/// assert_eq!(title_case("hello world"), "Hello World");
/// assert_eq!(title_case("the QUICK brown fox"), "The Quick Brown Fox");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for ch in s.chars() {
        if ch.is_whitespace() {
            in_word = false;
            out.push(ch);
        } else if in_word {
            push_lower(&mut out, ch);
        } else if is_word_char(ch) {
            in_word = true;
            push_upper(&mut out, ch);
        } else {
            out.push(ch);
        }
    }

    out
}

/// Convert a string to camelCase.
///
/// Tokens are split on `-`, `_` and whitespace. The first token starts
/// lowercase and every following token starts uppercase; the remaining
/// characters of each token are kept as they are.
///
/// # Examples
///
/// ```
/// use casoon_util::strings::camel_case;
///
/// assert_eq!(camel_case("hello world"), "helloWorld");
/// assert_eq!(camel_case("user-name"), "userName");
/// assert_eq!(camel_case("first_name"), "firstName");
/// assert_eq!(camel_case("HelloWorld"), "helloWorld");
/// ```
pub fn camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for (i, token) in s.split(is_separator).filter(|t| !t.is_empty()).enumerate() {
        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                push_lower(&mut out, first);
            } else {
                push_upper(&mut out, first);
            }
            out.push_str(chars.as_str());
        }
    }

    out
}

/// Convert a string to kebab-case.
///
/// # Examples
///
/// ```
/// use casoon_util::strings::kebab_case;
///
/// assert_eq!(kebab_case("Hello World"), "hello-world");
/// assert_eq!(kebab_case("firstName"), "first-name");
/// assert_eq!(kebab_case("snake_case_value"), "snake-case-value");
/// ```
pub fn kebab_case(s: &str) -> String {
    let split = lower_upper_boundary().replace_all(s, "$1-$2");
    kebab_separators().replace_all(&split, "-").to_lowercase()
}

/// Convert a string to snake_case.
///
/// # Examples
///
/// ```
/// use casoon_util::strings::snake_case;
///
/// assert_eq!(snake_case("Hello World"), "hello_world");
/// assert_eq!(snake_case("firstName"), "first_name");
/// assert_eq!(snake_case("kebab-case-value"), "kebab_case_value");
/// ```
pub fn snake_case(s: &str) -> String {
    let split = lower_upper_boundary().replace_all(s, "${1}_$2");
    snake_separators().replace_all(&split, "_").to_lowercase()
}
