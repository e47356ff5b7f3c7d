//! Object utilities over `serde_json::Value`.
//!
//! A "plain object" is a `Value::Object`. Everything here is non-failing:
//! inputs of the wrong shape yield an empty object, `false`, or the
//! caller's default.

mod merge;
mod path;

pub use merge::{deep_merge, omit, pick};
pub use path::{get, get_ref};

use serde_json::Value;

/// Check whether a value is an object with no keys.
///
/// Arrays, `null` and scalars are never "empty objects".
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use casoon_util::object::is_empty;
///
/// assert!(is_empty(&json!({})));
/// assert!(!is_empty(&json!({"name": "John"})));
/// assert!(!is_empty(&json!(null)));
/// assert!(!is_empty(&json!([])));
/// ```
pub fn is_empty(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.is_empty())
}

/// Check whether a value is a plain object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use casoon_util::object::is_plain_object;
///
/// assert!(is_plain_object(&json!({})));
/// assert!(!is_plain_object(&json!([])));
/// assert!(!is_plain_object(&json!("2024-04-22")));
/// ```
pub fn is_plain_object(value: &Value) -> bool {
    value.is_object()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty_scalars() {
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!("")));
        assert!(!is_empty(&json!(false)));
    }

    #[test]
    fn test_is_empty_nested_empty() {
        assert!(!is_empty(&json!({"a": {}})));
    }

    #[test]
    fn test_is_plain_object_null() {
        assert!(!is_plain_object(&json!(null)));
        assert!(is_plain_object(&json!({"a": [1]})));
    }
}
