//! Array utilities.
//!
//! Deduplication, grouping, chunking, random sampling, multi-key sorting and
//! set-style filtering over slices. Helpers that address items by field name
//! work on any [`Record`] (such as `serde_json::Value`).

mod record;
mod sample;
mod set;
mod sort;
mod unique;

pub use record::{key_to_string, Record, Selector};
pub(crate) use record::number_to_string;
pub use sample::{chunk, random_item, random_item_with, random_items, random_items_with, shuffle, shuffle_with};
pub use set::{difference, intersection};
pub use sort::{compare_keys, sort_by, Criterion};
pub use unique::{group_by, group_by_key, unique_array, unique_array_by};
