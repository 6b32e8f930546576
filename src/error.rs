//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for rustdoc-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a raw search index cannot be turned into a [`crate::SearchIndex`].
///
/// The builder rejects structurally invalid input up front instead of indexing
/// garbage that would only surface later as wrong search results.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The input is not a mapping of group id to `{items, paths}`.
    #[error("failed to parse search index: {0}")]
    Parse(#[from] serde_json::Error),

    /// An item tuple is too short or has a field of the wrong type.
    #[error("group '{group}': item {position} is malformed: {reason}")]
    MalformedItem {
        group: String,
        position: usize,
        reason: String,
    },

    /// A kind code outside the known kind enumeration.
    #[error("group '{group}': {table}[{position}] has unknown kind code {code}")]
    UnknownKind {
        group: String,
        table: &'static str,
        position: usize,
        code: u64,
    },

    /// An item's parent index does not address the group's path table.
    #[error(
        "group '{group}': item {position} refers to parent {parent}, but the path table has {paths} entries"
    )]
    ParentOutOfRange {
        group: String,
        position: usize,
        parent: usize,
        paths: usize,
    },
}
