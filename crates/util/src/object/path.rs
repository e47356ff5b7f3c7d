use serde_json::Value;

/// Follow a dot-separated path through objects (by key) and arrays (by index).
///
/// Returns `None` as soon as a segment is missing or the current value
/// cannot be indexed (null, a scalar).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use casoon_util::object::get_ref;
///
/// let data = json!({"user": {"tags": ["a", "b"]}});
/// assert_eq!(get_ref(&data, "user.tags.1"), Some(&json!("b")));
/// assert_eq!(get_ref(&data, "user.name"), None);
/// ```
pub fn get_ref<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Read a nested value by dot-separated path, or `default` when any segment
/// is missing.
///
/// A `null` found at the end of the path is returned as is; a `null` in the
/// middle of the path yields `default`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use casoon_util::object::get;
///
/// assert_eq!(get(&json!({"a": {"b": {"c": 1}}}), "a.b.c", json!(0)), json!(1));
/// assert_eq!(get(&json!({"a": {}}), "a.b.c", json!(0)), json!(0));
/// ```
pub fn get(value: &Value, path: &str, default: Value) -> Value {
    get_ref(value, path).cloned().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_null_intermediate() {
        assert_eq!(get(&json!({"a": null}), "a.b", json!("d")), json!("d"));
    }

    #[test]
    fn test_get_null_leaf() {
        assert_eq!(get(&json!({"a": null}), "a", json!("d")), json!(null));
    }

    #[test]
    fn test_get_through_scalar() {
        assert_eq!(get(&json!({"a": "text"}), "a.length", json!(-1)), json!(-1));
    }

    #[test]
    fn test_get_array_index() {
        let data = json!({"items": [{"id": 7}]});
        assert_eq!(get(&data, "items.0.id", json!(null)), json!(7));
        assert_eq!(get(&data, "items.5.id", json!(null)), json!(null));
        assert_eq!(get(&data, "items.x", json!("none")), json!("none"));
    }

    #[test]
    fn test_get_empty_key_segment() {
        assert_eq!(get(&json!({"": {"x": 1}}), ".x", json!(0)), json!(1));
    }

    #[test]
    fn test_get_ref_root_scalar() {
        assert_eq!(get_ref(&json!(5), "a"), None);
    }
}
