//! Search pipeline over a flat index of rustdoc items.
//!
//! A query runs through matching, validation, ranking and deduplication before
//! the surviving candidates are formatted.

// Module declarations
pub(crate) mod index;
pub(crate) mod levenshtein;
pub(crate) mod matcher;
pub(crate) mod query;
pub(crate) mod ranking;
pub(crate) mod validate;

// Public re-exports (used via lib.rs)
pub use index::{RawGroup, RawIndex, SearchIndex};
pub use levenshtein::{Levenshtein, distance};
pub use query::{Query, QueryId};

// Internal re-exports
pub(crate) use matcher::{Candidate, Matcher};
pub(crate) use ranking::{dedup, rank};
pub(crate) use validate::validate;
