//! Conditional CSS class-list joining.

use crate::array::number_to_string;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

/// One argument to [`class_names`].
#[derive(Debug, Clone, PartialEq)]
pub enum ClassArg<'a> {
    /// A class name, skipped when empty.
    Name(Cow<'a, str>),
    /// A numeric class, skipped when zero.
    Number(i64),
    /// Class names switched on or off, in order.
    Toggles(Vec<(Cow<'a, str>, bool)>),
    /// A nested list of arguments.
    List(Vec<ClassArg<'a>>),
    /// Contributes nothing.
    Skip,
}

impl<'a> From<&'a str> for ClassArg<'a> {
    fn from(name: &'a str) -> Self {
        ClassArg::Name(Cow::Borrowed(name))
    }
}

impl From<String> for ClassArg<'_> {
    fn from(name: String) -> Self {
        ClassArg::Name(Cow::Owned(name))
    }
}

impl<'a> From<Option<&'a str>> for ClassArg<'a> {
    fn from(name: Option<&'a str>) -> Self {
        name.map_or(ClassArg::Skip, ClassArg::from)
    }
}

impl<'a> From<(&'a str, bool)> for ClassArg<'a> {
    fn from((name, enabled): (&'a str, bool)) -> Self {
        ClassArg::Toggles(vec![(Cow::Borrowed(name), enabled)])
    }
}

impl<'a> From<Vec<(&'a str, bool)>> for ClassArg<'a> {
    fn from(toggles: Vec<(&'a str, bool)>) -> Self {
        ClassArg::Toggles(
            toggles
                .into_iter()
                .map(|(name, enabled)| (Cow::Borrowed(name), enabled))
                .collect(),
        )
    }
}

impl<'a> From<Vec<ClassArg<'a>>> for ClassArg<'a> {
    fn from(args: Vec<ClassArg<'a>>) -> Self {
        ClassArg::List(args)
    }
}

impl From<i64> for ClassArg<'_> {
    fn from(n: i64) -> Self {
        ClassArg::Number(n)
    }
}

impl From<i32> for ClassArg<'_> {
    fn from(n: i32) -> Self {
        ClassArg::Number(n.into())
    }
}

impl From<bool> for ClassArg<'_> {
    /// A bare boolean never names a class.
    fn from(_: bool) -> Self {
        ClassArg::Skip
    }
}

impl From<Value> for ClassArg<'static> {
    /// Interpret a dynamic value: strings and numbers are names, arrays
    /// nest, objects toggle their keys by truthiness.
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => ClassArg::Name(Cow::Owned(s)),
            Value::Number(n) if n.as_f64() == Some(0.0) => ClassArg::Skip,
            Value::Number(n) => match n.as_i64() {
                Some(i) => ClassArg::Number(i),
                None => ClassArg::Name(Cow::Owned(number_to_string(&n))),
            },
            Value::Array(items) => ClassArg::List(items.into_iter().map(ClassArg::from).collect()),
            Value::Object(map) => ClassArg::Toggles(
                map.into_iter()
                    .map(|(key, flag)| (Cow::Owned(key), is_truthy(&flag)))
                    .collect(),
            ),
            Value::Null | Value::Bool(_) => ClassArg::Skip,
        }
    }
}

/// Truthiness of a dynamic value: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Join class names, skipping falsy entries.
///
/// # Examples
///
/// ```
/// use casoon_util::class_names::{class_names, ClassArg};
///
/// let is_active = true;
/// let is_disabled = false;
///
/// assert_eq!(class_names(&["btn".into(), "btn-primary".into()]), "btn btn-primary");
/// assert_eq!(
///     class_names(&[
///         "btn".into(),
///         is_active.then_some("active").into(),
///         vec![("btn-primary", is_active), ("btn-disabled", is_disabled)].into(),
///     ]),
///     "btn active btn-primary"
/// );
/// ```
pub fn class_names(args: &[ClassArg<'_>]) -> String {
    let mut classes = Vec::new();
    collect(args, &mut classes);
    classes.join(" ")
}

fn collect(args: &[ClassArg<'_>], classes: &mut Vec<String>) {
    for arg in args {
        match arg {
            ClassArg::Name(name) if !name.is_empty() => classes.push(name.to_string()),
            ClassArg::Number(n) if *n != 0 => classes.push(n.to_string()),
            ClassArg::Toggles(toggles) => classes.extend(
                toggles
                    .iter()
                    .filter(|(name, enabled)| *enabled && !name.is_empty())
                    .map(|(name, _)| name.to_string()),
            ),
            ClassArg::List(nested) => collect(nested, classes),
            _ => {}
        }
    }
}

/// [`class_names`] mapped through a CSS-module lookup table.
///
/// Names holding several space-separated classes are looked up one class at
/// a time. Classes missing from `styles` are kept as they are.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use casoon_util::class_names::class_names_module;
///
/// let styles = HashMap::from([("button".to_string(), "Button_button__x1".to_string())]);
/// assert_eq!(
///     class_names_module(&styles, &["button".into(), ("primary", true).into()]),
///     "Button_button__x1 primary"
/// );
/// ```
pub fn class_names_module(styles: &HashMap<String, String>, args: &[ClassArg<'_>]) -> String {
    let mut classes = Vec::new();
    collect(args, &mut classes);
    classes
        .iter()
        .flat_map(|name| name.split_whitespace())
        .map(|class| styles.get(class).map_or(class, String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_class_names_empty() {
        assert_eq!(class_names(&[]), "");
    }

    #[test]
    fn test_class_names_skips_falsy() {
        let args: Vec<ClassArg> = vec![
            "".into(),
            None::<&str>.into(),
            0i64.into(),
            false.into(),
            "kept".into(),
            ClassArg::Skip,
        ];
        assert_eq!(class_names(&args), "kept");
    }

    #[test]
    fn test_class_names_numbers() {
        assert_eq!(class_names(&[1i64.into(), "a".into()]), "1 a");
    }

    #[test]
    fn test_class_names_nested_lists() {
        let args = vec![
            ClassArg::List(vec![
                ClassArg::from("btn"),
                ClassArg::from(vec![ClassArg::from("btn-large")]),
            ]),
            ClassArg::from("active"),
        ];
        assert_eq!(class_names(&args), "btn btn-large active");
    }

    #[test]
    fn test_class_names_from_json() {
        let arg = ClassArg::from(json!(["btn", {"primary": true, "disabled": 0, "wide": "yes"}, null, 3]));
        assert_eq!(class_names(&[arg]), "btn primary wide 3");
    }

    #[test]
    fn test_class_names_owned_strings() {
        let dynamic = format!("col-{}", 6);
        assert_eq!(class_names(&[dynamic.into()]), "col-6");
    }

    #[test]
    fn test_class_names_module_empty() {
        assert_eq!(class_names_module(&HashMap::new(), &[]), "");
    }

    #[test]
    fn test_class_names_from_json_floats() {
        let arg = ClassArg::from(json!(["a", 0.0, 2.0, 1.5]));
        assert_eq!(class_names(&[arg]), "a 2 1.5");
    }

    #[test]
    fn test_class_names_module_splits_compound_names() {
        let styles = HashMap::from([
            ("btn".to_string(), "Btn_x1".to_string()),
            ("primary".to_string(), "Btn_primary_x2".to_string()),
        ]);
        assert_eq!(
            class_names_module(&styles, &["btn primary".into(), "extra".into()]),
            "Btn_x1 Btn_primary_x2 extra"
        );
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!(-1)));
    }
}
