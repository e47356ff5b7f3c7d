use serde_json::Value;
use std::cmp::Ordering;

use super::record::{Record, Selector};

/// One sort criterion: a key selector and a direction.
///
/// # Examples
///
/// ```
/// use serde_json::{json, Value};
/// use casoon_util::array::{sort_by, Criterion};
///
/// let users = vec![
///     json!({"name": "John", "age": 30}),
///     json!({"name": "Jane", "age": 25}),
///     json!({"name": "Bob", "age": 30}),
/// ];
///
/// // Age descending, then name ascending.
/// let sorted = sort_by(&users, &[Criterion::desc("age"), Criterion::asc("name")]);
/// let names: Vec<&str> = sorted.iter().map(|u| u["name"].as_str().unwrap()).collect();
/// assert_eq!(names, vec!["Bob", "John", "Jane"]);
/// ```
#[derive(Debug)]
pub struct Criterion<'a, T> {
    selector: Selector<'a, T>,
    desc: bool,
}

impl<'a, T: Record> Criterion<'a, T> {
    /// Ascending order on the selected key.
    pub fn asc(selector: impl Into<Selector<'a, T>>) -> Self {
        Self {
            selector: selector.into(),
            desc: false,
        }
    }

    /// Descending order on the selected key.
    pub fn desc(selector: impl Into<Selector<'a, T>>) -> Self {
        Self {
            selector: selector.into(),
            desc: true,
        }
    }

    /// Ascending order on a key computed by `f`.
    pub fn by<F>(f: F) -> Self
    where
        F: Fn(&T) -> Value + 'a,
    {
        Self::asc(Selector::func(f))
    }

    /// Reverse this criterion's direction.
    pub fn reversed(mut self) -> Self {
        self.desc = !self.desc;
        self
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        let ord = compare_keys(self.selector.select(a).as_ref(), self.selector.select(b).as_ref());
        if self.desc {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl<'a, T> From<&'a str> for Criterion<'a, T> {
    fn from(name: &'a str) -> Self {
        Self {
            selector: Selector::from(name),
            desc: false,
        }
    }
}

/// Return a stably sorted copy of `items`, ordered by `criteria` in turn.
///
/// The first criterion that tells two items apart decides their order;
/// items equal under every criterion keep their input order.
pub fn sort_by<T>(items: &[T], criteria: &[Criterion<'_, T>]) -> Vec<T>
where
    T: Record + Clone,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        criteria
            .iter()
            .map(|criterion| criterion.compare(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

/// Total order over selected keys.
///
/// Booleans, numbers and strings compare within their kind (`false < true`,
/// numerically, lexicographically). Different kinds order as
/// bool < number < string < null < array/object < missing, and arrays and
/// objects compare equal to each other.
pub fn compare_keys(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.total_cmp(&y)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn rank(key: Option<&Value>) -> u8 {
    match key {
        Some(Value::Bool(_)) => 0,
        Some(Value::Number(_)) => 1,
        Some(Value::String(_)) => 2,
        Some(Value::Null) => 3,
        Some(Value::Array(_)) | Some(Value::Object(_)) => 4,
        None => 5,
    }
}
