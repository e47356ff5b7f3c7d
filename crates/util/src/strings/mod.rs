//! String utilities.
//!
//! Case conversion, truncation, whitespace cleanup, random strings and HTML
//! escaping/stripping.

mod case;
mod escape;
mod format;
mod html;
mod util;

pub use case::{camel_case, capitalize, kebab_case, snake_case, title_case};
pub use escape::escape_html;
pub use format::{
    clean_whitespace, random_string, random_string_with, truncate, truncate_default,
    DEFAULT_CHARSET, DEFAULT_TRUNCATE_SUFFIX,
};
pub use html::strip_html;
pub use util::{is_separator, is_word_char};
