//! JSON helpers that never fail.
//!
//! The `try_*` functions expose the fallible core as a `Result`; the
//! `safe_*` functions turn every failure into the caller's fallback.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use thiserror::Error;

/// Indentation is capped at ten spaces, like `JSON.stringify`.
const MAX_INDENT: usize = 10;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("JSON parse failed: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("JSON value is null")]
    Null,
    #[error("JSON stringify failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Parse `input` into `T`, treating a literal `null` as an error.
///
/// # Errors
///
/// - `JsonError::Parse` - malformed JSON, or JSON that does not fit `T`
/// - `JsonError::Null` - the document is `null`
pub fn try_parse_json<T: DeserializeOwned>(input: &str) -> Result<T, JsonError> {
    let value: Value = serde_json::from_str(input).map_err(JsonError::Parse)?;
    if value.is_null() {
        return Err(JsonError::Null);
    }
    serde_json::from_value(value).map_err(JsonError::Parse)
}

/// Serialize `value`, pretty-printed with `space` spaces when given.
///
/// A `space` of zero produces compact output; values above ten are capped.
///
/// # Errors
///
/// Returns `JsonError::Serialize` when the value cannot be represented as
/// JSON (for example a map with non-string keys).
pub fn try_stringify_json<T: Serialize + ?Sized>(
    value: &T,
    space: Option<usize>,
) -> Result<String, JsonError> {
    match space.map(|n| n.min(MAX_INDENT)) {
        None | Some(0) => serde_json::to_string(value).map_err(JsonError::Serialize),
        Some(n) => {
            let indent = vec![b' '; n];
            let mut buf = Vec::new();
            let mut ser =
                serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
            value.serialize(&mut ser).map_err(JsonError::Serialize)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }
}

/// Parse JSON, returning `fallback` on absent input, malformed JSON, a
/// `null` document, or a shape that does not fit `T`.
///
/// # Examples
///
/// ```
/// use serde_json::{json, Value};
/// use casoon_util::json::safe_json_parse;
///
/// assert_eq!(safe_json_parse(Some(r#"{"theme":"dark"}"#), json!({})), json!({"theme": "dark"}));
/// assert_eq!(safe_json_parse(Some("{oops"), json!({"theme": "light"})), json!({"theme": "light"}));
/// assert_eq!(safe_json_parse(None, json!({})), json!({}));
/// assert_eq!(safe_json_parse::<Vec<u8>>(Some("null"), vec![]), Vec::<u8>::new());
/// ```
pub fn safe_json_parse<T: DeserializeOwned>(input: Option<&str>, fallback: T) -> T {
    let Some(input) = input else {
        return fallback;
    };

    match try_parse_json(input) {
        Ok(value) => value,
        Err(JsonError::Null) => fallback,
        Err(err) => {
            tracing::warn!(error = %err, "JSON parse failed, using fallback");
            fallback
        }
    }
}

/// Serialize to JSON, returning `fallback` when serialization fails.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use serde_json::json;
/// use casoon_util::json::safe_json_stringify;
///
/// assert_eq!(safe_json_stringify(&json!({"a": [1, 2]}), "{}", None), r#"{"a":[1,2]}"#);
/// assert_eq!(safe_json_stringify(&json!({"a": 1}), "{}", Some(2)), "{\n  \"a\": 1\n}");
///
/// let mut bad = HashMap::new();
/// bad.insert(vec![1u8], 1);
/// assert_eq!(safe_json_stringify(&bad, "{}", None), "{}");
/// ```
pub fn safe_json_stringify<T: Serialize + ?Sized>(
    value: &T,
    fallback: &str,
    space: Option<usize>,
) -> String {
    try_stringify_json(value, space).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "JSON stringify failed, using fallback");
        fallback.to_string()
    })
}

/// Deep-clone through a JSON round trip.
///
/// Anything JSON cannot carry is lost, and any failure along the way (or a
/// `null` result) yields `fallback`.
///
/// # Examples
///
/// ```
/// use serde_json::{json, Value};
/// use casoon_util::json::deep_clone_json;
///
/// let original = json!({"user": {"tags": ["a"]}});
/// let cloned: Value = deep_clone_json(&original, Value::Null);
/// assert_eq!(cloned, original);
/// ```
pub fn deep_clone_json<T, U>(value: &T, fallback: U) -> U
where
    T: Serialize + ?Sized,
    U: DeserializeOwned,
{
    match try_stringify_json(value, None).and_then(|s| try_parse_json(&s)) {
        Ok(cloned) => cloned,
        Err(JsonError::Null) => fallback,
        Err(err) => {
            tracing::warn!(error = %err, "JSON clone failed, using fallback");
            fallback
        }
    }
}

/// Check whether `input` is well-formed JSON.
///
/// # Examples
///
/// ```
/// use casoon_util::json::is_valid_json;
///
/// assert!(is_valid_json(Some(r#"{"a": 1}"#)));
/// assert!(is_valid_json(Some("null")));
/// assert!(!is_valid_json(Some("{a: 1}")));
/// assert!(!is_valid_json(None));
/// ```
pub fn is_valid_json(input: Option<&str>) -> bool {
    input.is_some_and(|s| serde_json::from_str::<IgnoredAny>(s).is_ok())
}
