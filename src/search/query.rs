//! Query parsing: kind-filter prefixes and search text.

use crate::types::ItemKind;
use regex::Regex;
use std::sync::LazyLock;

/// Leading `kind:` / `kind ` filter. A `::` after the keyword is a path and is
/// rejected in [`Query::parse`].
static KIND_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(fn|mod|struct|enum|trait|t(?:ype)?d(?:ef)?)(?:\s*:|\s)\s*")
        .expect("kind prefix pattern is valid")
});

/// A parsed search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The input exactly as typed.
    pub raw: String,
    /// Search text with any kind prefix removed. Not lowercased.
    pub text: String,
    /// Kind filter from the prefix, if any.
    pub kind: Option<ItemKind>,
}

/// Identity of a query: two queries with equal ids return equal results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryId {
    pub text: String,
    pub kind: Option<ItemKind>,
}

impl Query {
    /// Parse a raw query.
    ///
    /// Examples:
    /// - `open` → text `open`, no filter
    /// - `fn: open` / `FN open` → text `open`, filter function
    /// - `tdef Result` → text `Result`, filter type alias
    /// - `fn::open` → text `fn::open`, no filter
    pub fn parse(raw: &str) -> Self {
        if let Some(captures) = KIND_PREFIX.captures(raw)
            && let (Some(whole), Some(keyword)) = (captures.get(0), captures.get(1))
            && !raw[whole.end()..].starts_with(':')
        {
            return Self {
                raw: raw.to_string(),
                text: raw[whole.end()..].to_string(),
                kind: keyword_kind(keyword.as_str()),
            };
        }

        Self {
            raw: raw.to_string(),
            text: raw.to_string(),
            kind: None,
        }
    }

    /// Whether there is nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn id(&self) -> QueryId {
        QueryId {
            text: self.text.clone(),
            kind: self.kind,
        }
    }
}

/// Canonical kind for a prefix keyword.
fn keyword_kind(keyword: &str) -> Option<ItemKind> {
    match keyword.to_ascii_lowercase().as_str() {
        "fn" => Some(ItemKind::Function),
        "mod" => Some(ItemKind::Module),
        "struct" => Some(ItemKind::Struct),
        "enum" => Some(ItemKind::Enum),
        "trait" => Some(ItemKind::Trait),
        "td" | "tdef" | "typed" | "typedef" => Some(ItemKind::TypeAlias),
        _ => None,
    }
}
