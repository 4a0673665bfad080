//! Utility functions for padding ragged columns
use indexmap::IndexMap;

/// Right pad every column with `filler` until all columns have the length of the longest one
pub(crate) fn pad_columns(columns: &mut IndexMap<String, Vec<String>>, filler: &str) {
    let longest = columns.values().map(Vec::len).max().unwrap_or(0);
    for column in columns.values_mut() {
        column.resize(longest, filler.to_string());
    }
}
