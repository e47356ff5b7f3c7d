//! casoon-ui-lib - Utility layer of the casoon-ui-lib design system
//!
//! One import surface for the synchronous helpers in [`casoon_util`] and the
//! async helpers in [`casoon_util_async`]. Nothing here adds behaviour: the
//! crate re-exports, renames a few functions, and groups curated subsets in
//! [`essentials`] and [`defaults`].
//!
//! ```
//! use casoon_ui_lib::essentials::*;
//! use serde_json::json;
//!
//! assert_eq!(capitalize("button"), "Button");
//! assert!(is_empty(&safe_json_parse(Some("{}"), json!({"x": 1}))));
//! assert_eq!(unique_array(&[3, 1, 3]), vec![3, 1]);
//! ```

pub use casoon_util as util;
pub use casoon_util_async as util_async;

// Re-exports for convenience
pub use casoon_util::*;
pub use casoon_util_async::*;

/// Alias of [`unique_array`].
pub use casoon_util::unique_array as remove_duplicates;

/// Alias of [`safe_json_parse`].
pub use casoon_util::safe_json_parse as parse_json;

/// Alias of [`class_names`](fn@class_names).
pub use casoon_util::class_names as cx;

/// Alias of [`format_date`].
pub use casoon_util::format_date as date_format;

/// The handful of helpers most components need.
pub mod essentials {
    pub use casoon_util::{
        capitalize, class_names, format_date, is_empty, safe_json_parse, unique_array, DateFormat,
    };
    pub use casoon_util_async::{debounce, sleep};
}

/// The broader default selection: [`essentials`](crate::essentials) plus
/// retry, text and date formatting and grouping.
pub mod defaults {
    pub use casoon_util::{
        camel_case, capitalize, class_names, format_date, format_relative_date, group_by,
        is_empty, safe_json_parse, truncate, unique_array, DateFormat,
    };
    pub use casoon_util_async::{debounce, retry, sleep};
}
