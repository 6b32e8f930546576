pub mod cache;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod path;
pub(crate) mod search;
pub mod tracing;
pub mod types;

pub use config::SearchConfig;
pub use engine::{IndexStats, SearchEngine};
pub use error::IndexError;
pub use search::{Levenshtein, Query, QueryId, RawGroup, RawIndex, SearchIndex, distance};
pub use types::{ItemKind, PathEntry, SearchRecord, SearchResult, Signature, TypeName};
