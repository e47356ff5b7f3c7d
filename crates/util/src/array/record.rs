use serde_json::{Map, Number, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Items whose fields can be looked up by name.
///
/// This is what lets a [`Selector::Property`] address `item["id"]` on
/// dynamic records. A missing field reads as `None` ("undefined").
pub trait Record {
    /// Look up a field by name.
    fn field(&self, name: &str) -> Option<&Value>;
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(name),
            Value::Array(arr) => name.parse::<usize>().ok().and_then(|i| arr.get(i)),
            _ => None,
        }
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Record for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// How to compute a key from an item: by field name or by function.
///
/// # Examples
///
/// ```
/// use serde_json::{json, Value};
/// use casoon_util::array::Selector;
///
/// let by_name: Selector<Value> = Selector::from("name");
/// let by_len: Selector<Value> = Selector::func(|v: &Value| json!(v["name"].as_str().map_or(0, str::len)));
///
/// let item = json!({"name": "Ada"});
/// assert_eq!(by_name.select(&item), Some(json!("Ada")));
/// assert_eq!(by_len.select(&item), Some(json!(3)));
/// ```
pub enum Selector<'a, T> {
    /// Read the named field of the item.
    Property(Cow<'a, str>),
    /// Compute the key with a function.
    Func(Box<dyn Fn(&T) -> Value + 'a>),
}

impl<'a, T: Record> Selector<'a, T> {
    /// Select by field name.
    pub fn property(name: impl Into<Cow<'a, str>>) -> Self {
        Selector::Property(name.into())
    }

    /// Select with a key function.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&T) -> Value + 'a,
    {
        Selector::Func(Box::new(f))
    }

    /// Compute the key of `item`; `None` means the field is missing.
    pub fn select(&self, item: &T) -> Option<Value> {
        match self {
            Selector::Property(name) => item.field(name).cloned(),
            Selector::Func(f) => Some(f(item)),
        }
    }
}

impl<'a, T> From<&'a str> for Selector<'a, T> {
    fn from(name: &'a str) -> Self {
        Selector::Property(Cow::Borrowed(name))
    }
}

impl<T> From<String> for Selector<'static, T> {
    fn from(name: String) -> Self {
        Selector::Property(Cow::Owned(name))
    }
}

impl<T> std::fmt::Debug for Selector<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Property(name) => f.debug_tuple("Property").field(name).finish(),
            Selector::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// Render a selected key the way a dynamic object key would be written.
///
/// Strings are used raw, `None` becomes `"undefined"`, arrays are joined
/// with commas and objects become `"[object Object]"`.
pub fn key_to_string(key: Option<&Value>) -> String {
    match key {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_to_string(n),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => key_to_string(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// Write a number the way a dynamic key would show it: integral floats lose
/// their fractional part (`1.0` -> `"1"`) and negative zero is `"0"`.
pub(crate) fn number_to_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.is_finite() && f.fract() == 0.0 => {
            if f == 0.0 {
                "0".to_string()
            } else if f.abs() < 1e21 {
                format!("{f:.0}")
            } else {
                n.to_string()
            }
        }
        _ => n.to_string(),
    }
}

/// Identity of a key for deduplication: distinguishes `"1"` from `1` and
/// a missing field from `null`.
pub(crate) fn identity_key(key: Option<&Value>) -> Option<String> {
    key.map(Value::to_string)
}
