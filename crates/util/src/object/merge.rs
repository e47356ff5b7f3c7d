use serde_json::{Map, Value};

/// Deep-merge objects from left to right.
///
/// Later objects win on conflicting keys; when both sides of a key are
/// objects they are merged recursively. Arguments that are not objects are
/// skipped. The result is always an object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use casoon_util::object::deep_merge;
///
/// let defaults = json!({"theme": "light", "size": "medium", "colors": {"bg": "#fff", "fg": "#000"}});
/// let prefs = json!({"theme": "dark", "colors": {"bg": "#111"}});
///
/// assert_eq!(
///     deep_merge(&[defaults, prefs]),
///     json!({"theme": "dark", "size": "medium", "colors": {"bg": "#111", "fg": "#000"}})
/// );
/// ```
pub fn deep_merge(objects: &[Value]) -> Value {
    let mut result = Map::new();
    for obj in objects {
        if let Value::Object(map) = obj {
            merge_into(&mut result, map);
        }
    }
    Value::Object(result)
}

fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        let merged = match (target.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_into(existing, incoming);
                true
            }
            _ => false,
        };
        if !merged {
            target.insert(key.clone(), value.clone());
        }
    }
}

/// Copy only the listed keys that exist on `obj`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use casoon_util::object::pick;
///
/// let user = json!({"id": 1, "name": "John", "password": "secret"});
/// assert_eq!(pick(&user, ["id", "name", "missing"]), json!({"id": 1, "name": "John"}));
/// ```
pub fn pick<I, K>(obj: &Value, keys: I) -> Value
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut result = Map::new();
    if let Value::Object(map) = obj {
        for key in keys {
            let key = key.as_ref();
            if let Some(value) = map.get(key) {
                result.insert(key.to_string(), value.clone());
            }
        }
    }
    Value::Object(result)
}

/// Copy `obj` without the listed keys.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use casoon_util::object::omit;
///
/// let user = json!({"id": 1, "name": "John", "password": "secret"});
/// assert_eq!(omit(&user, ["password"]), json!({"id": 1, "name": "John"}));
/// ```
pub fn omit<I, K>(obj: &Value, keys: I) -> Value
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut result = match obj {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    for key in keys {
        result.shift_remove(key.as_ref());
    }
    Value::Object(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deep_merge_skips_non_objects() {
        let merged = deep_merge(&[json!({"a": 1}), json!(null), json!([1, 2]), json!("x"), json!({"b": 2})]);
        assert_eq!(merged, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_deep_merge_empty() {
        assert_eq!(deep_merge(&[]), json!({}));
    }

    #[test]
    fn test_deep_merge_scalar_replaces_object() {
        let merged = deep_merge(&[json!({"a": {"x": 1}}), json!({"a": 5})]);
        assert_eq!(merged, json!({"a": 5}));
    }

    #[test]
    fn test_deep_merge_object_replaces_scalar() {
        let merged = deep_merge(&[json!({"a": 5}), json!({"a": {"x": 1}})]);
        assert_eq!(merged, json!({"a": {"x": 1}}));
    }

    #[test]
    fn test_deep_merge_arrays_are_replaced() {
        let merged = deep_merge(&[json!({"a": [1, 2]}), json!({"a": [3]})]);
        assert_eq!(merged, json!({"a": [3]}));
    }

    #[test]
    fn test_deep_merge_three_levels() {
        let merged = deep_merge(&[
            json!({"a": {"b": {"c": 1, "d": 2}}}),
            json!({"a": {"b": {"c": 3}}}),
            json!({"a": {"e": 4}}),
        ]);
        assert_eq!(merged, json!({"a": {"b": {"c": 3, "d": 2}, "e": 4}}));
    }

    #[test]
    fn test_deep_merge_does_not_touch_inputs() {
        let base = json!({"a": {"x": 1}});
        let _ = deep_merge(&[base.clone(), json!({"a": {"y": 2}})]);
        assert_eq!(base, json!({"a": {"x": 1}}));
    }

    #[test]
    fn test_pick_non_object() {
        assert_eq!(pick(&json!([1, 2]), ["0"]), json!({}));
    }

    #[test]
    fn test_pick_keeps_null_values() {
        assert_eq!(pick(&json!({"a": null}), ["a"]), json!({"a": null}));
    }

    #[test]
    fn test_omit_owned_keys() {
        let keys = vec!["a".to_string()];
        assert_eq!(omit(&json!({"a": 1, "b": 2}), &keys), json!({"b": 2}));
    }

    #[test]
    fn test_omit_preserves_order() {
        let result = omit(&json!({"z": 1, "y": 2, "x": 3}), ["y"]);
        let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "x"]);
    }
}
