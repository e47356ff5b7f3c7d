use indexmap::IndexMap;
use std::collections::HashSet;
use std::hash::Hash;

use super::record::{identity_key, key_to_string, Record, Selector};

/// Remove duplicate values, keeping the first occurrence of each.
///
/// # Examples
///
/// ```
/// use casoon_util::array::unique_array;
///
/// assert_eq!(unique_array(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// assert_eq!(unique_array(&["b", "a", "b"]), vec!["b", "a"]);
/// ```
pub fn unique_array<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Remove items whose selected key was already seen, keeping the first.
///
/// # Examples
///
/// ```
/// use serde_json::{json, Value};
/// use casoon_util::array::{unique_array_by, Selector};
///
/// let users = vec![
///     json!({"id": 1, "email": "A@x.io"}),
///     json!({"id": 2, "email": "a@x.io"}),
///     json!({"id": 1, "email": "b@x.io"}),
/// ];
///
/// assert_eq!(unique_array_by(&users, "id".into()).len(), 2);
///
/// let by_email = Selector::func(|u: &Value| json!(u["email"].as_str().unwrap_or("").to_lowercase()));
/// assert_eq!(unique_array_by(&users, by_email).len(), 2);
/// ```
pub fn unique_array_by<T>(items: &[T], selector: Selector<'_, T>) -> Vec<T>
where
    T: Record + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(identity_key(selector.select(item).as_ref())))
        .cloned()
        .collect()
}

/// Group items by selected key, preserving first-appearance order.
///
/// Keys are stringified like dynamic object keys (see
/// [`key_to_string`](super::key_to_string)).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use casoon_util::array::group_by;
///
/// let users = vec![
///     json!({"name": "John", "role": "admin"}),
///     json!({"name": "Jane", "role": "user"}),
///     json!({"name": "Bob", "role": "admin"}),
/// ];
///
/// let groups = group_by(&users, "role".into());
/// assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["admin", "user"]);
/// assert_eq!(groups["admin"].len(), 2);
/// ```
pub fn group_by<T>(items: &[T], selector: Selector<'_, T>) -> IndexMap<String, Vec<T>>
where
    T: Record + Clone,
{
    group_by_key(items, |item| key_to_string(selector.select(item).as_ref()))
}

/// Group items by a key computed with a plain closure.
///
/// # Examples
///
/// ```
/// use casoon_util::array::group_by_key;
///
/// let groups = group_by_key(&[1, 2, 3, 4, 5], |n| if n % 2 == 0 { "even" } else { "odd" });
/// assert_eq!(groups["odd"], vec![1, 3, 5]);
/// assert_eq!(groups["even"], vec![2, 4]);
/// ```
pub fn group_by_key<T, K, F>(items: &[T], mut key: F) -> IndexMap<String, Vec<T>>
where
    T: Clone,
    K: ToString,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<String, Vec<T>> = IndexMap::new();
    for item in items {
        groups
            .entry(key(item).to_string())
            .or_default()
            .push(item.clone());
    }
    groups
}
