//! casoon-util - Synchronous helpers for casoon-ui-lib
//!
//! String, array, object, date and JSON utilities plus conditional
//! class-name joining. Everything here is non-failing on malformed input: the helpers
//! return an empty value, `false`, or the caller's fallback instead.

pub mod array;
pub mod class_names;
pub mod date;
pub mod json;
pub mod object;
pub mod random;
pub mod strings;

// Re-exports for convenience
pub use array::{
    chunk, difference, group_by, group_by_key, intersection, random_item, random_item_with,
    random_items, random_items_with, shuffle, shuffle_with, sort_by, unique_array, unique_array_by,
    Criterion, Record, Selector,
};
pub use class_names::{class_names, class_names_module, ClassArg};
pub use date::{
    format_date, format_date_default, format_relative_date, format_relative_date_from,
    parse_date, DateFormat, DateInput, INVALID_DATE,
};
pub use json::{
    deep_clone_json, is_valid_json, safe_json_parse, safe_json_stringify, try_parse_json,
    try_stringify_json, JsonError,
};
pub use object::{deep_merge, get, get_ref, is_empty, is_plain_object, omit, pick};
pub use random::{seeded_rng, SeededRng};
pub use strings::{
    camel_case, capitalize, clean_whitespace, escape_html, kebab_case, random_string,
    random_string_with, snake_case, strip_html, title_case, truncate, truncate_default,
    DEFAULT_CHARSET,
};
