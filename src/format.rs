//! Display strings and documentation links for search hits.
//!
//! Links follow rustdoc's page layout under a configurable root:
//!
//! | item                      | display                  | link                                     |
//! |---------------------------|--------------------------|------------------------------------------|
//! | module                    | `path::name`             | `path/name/index.html`                   |
//! | static, import            | `path::name`             | `path/index.html`                        |
//! | with a parent             | `path::parent::name`     | `path/parentkind.parent.html#kind.name`  |
//! | anything else             | `path::name`             | `path/kind.name.html`                    |

use crate::path::url_dir;
use crate::search::Candidate;
use crate::types::{ItemKind, SearchRecord, SearchResult};

/// Format one record. `root_url` is prepended verbatim and should end in `/`.
pub fn format_record(record: &SearchRecord, root_url: &str) -> SearchResult {
    let dir = url_dir(&record.path);
    let name = &record.name;

    let (display, url) = match (record.kind, &record.parent) {
        (ItemKind::Module, _) => (
            format!("{}::{}", record.path, name),
            format!("{}{}/{}/index.html", root_url, dir, name),
        ),
        // The item's own name is not part of the link.
        (ItemKind::Static | ItemKind::Import, _) => (
            format!("{}::{}", record.path, name),
            format!("{}{}/index.html", root_url, dir),
        ),
        (kind, Some(parent)) => (
            format!("{}::{}::{}", record.path, parent.name, name),
            format!(
                "{}{}/{}.{}.html#{}.{}",
                root_url, dir, parent.kind, parent.name, kind, name
            ),
        ),
        (kind, None) => (
            format!("{}::{}", record.path, name),
            format!("{}{}/{}.{}.html", root_url, dir, kind, name),
        ),
    };

    SearchResult { display, url }
}

/// Format the first `limit` candidates that were not excluded.
pub(crate) fn format_results(
    candidates: &[Candidate<'_>],
    root_url: &str,
    limit: usize,
) -> Vec<SearchResult> {
    candidates
        .iter()
        .filter(|candidate| !candidate.excluded)
        .take(limit)
        .map(|candidate| format_record(candidate.record, root_url))
        .collect()
}
