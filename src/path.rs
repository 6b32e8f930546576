//! Helpers for `::`-separated item paths, plus `~` expansion for file arguments.

use std::path::{Path, PathBuf};

/// Split a query into its non-empty `::`-delimited segments.
///
/// Examples:
/// - `open` → `["open"]`
/// - `file::open` → `["file", "open"]`
/// - `::fs::::file::` → `["fs", "file"]`
///
/// Segments are not trimmed; whitespace is part of the probe text.
pub fn segments(query: &str) -> Vec<&str> {
    query.split("::").filter(|s| !s.is_empty()).collect()
}

/// Convert an item path like `std::collections` into the URL directory
/// `std/collections`.
pub fn url_dir(path: &str) -> String {
    path.replace("::", "/")
}

/// Expand a leading `~` to the home directory. Other paths, and `~` when no
/// home directory is known, are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}
