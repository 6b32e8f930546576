//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `engine`: a [`SearchEngine`] over `tests/fixtures/search-index.json` with
//!   the default config
//! - `uncached_engine`: the same index with the result cache disabled
//!
//! [`TempIndex`] writes index or config files into a temporary directory for
//! tests that go through the filesystem.

use rstest::fixture;
use rustdoc_search::{SearchConfig, SearchEngine, SearchResult};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The fixture index: a slice of `std` plus a `core` group holding duplicates.
pub const INDEX_JSON: &str = include_str!("../fixtures/search-index.json");

/// Link prefix used by the default config.
pub const ROOT: &str = "https://doc.rust-lang.org/stable/";

/// A temporary directory that is removed on drop.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempIndex {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl TempIndex {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write `contents` to `name` inside the directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("Failed to write temp file");
        path
    }
}

#[fixture]
pub fn engine() -> SearchEngine {
    rustdoc_search::tracing::init(false);
    SearchEngine::from_json(INDEX_JSON, SearchConfig::default()).expect("fixture index builds")
}

#[fixture]
pub fn uncached_engine() -> SearchEngine {
    rustdoc_search::tracing::init(false);
    let config = SearchConfig {
        cache_capacity: 0,
        ..SearchConfig::default()
    };
    SearchEngine::from_json(INDEX_JSON, config).expect("fixture index builds")
}

/// Display strings of `results`, in order.
#[allow(dead_code)]
pub fn displays(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.display.as_str()).collect()
}

/// Links of `results` with the root prefix removed.
#[allow(dead_code)]
pub fn links(results: &[SearchResult]) -> Vec<&str> {
    results
        .iter()
        .map(|r| r.url.strip_prefix(ROOT).unwrap_or(&r.url))
        .collect()
}
