//! Query entry point: owns a built index and runs the search pipeline.

use crate::cache::{CacheKey, ResultCache};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::format::format_results;
use crate::search::{Matcher, Query, SearchIndex, dedup, rank, validate};
use crate::types::{ItemKind, SearchResult};
use serde::Serialize;
use std::path::Path;

/// Summary of an index, as printed by `rustdoc-search inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub records: usize,
    pub groups: Vec<String>,
    pub kinds: Vec<(ItemKind, usize)>,
}

/// A search index together with the settings used to query it.
///
/// The index is immutable once built; to pick up a new index, build a new
/// engine.
#[derive(Debug)]
pub struct SearchEngine {
    index: SearchIndex,
    config: SearchConfig,
    cache: ResultCache,
}

impl SearchEngine {
    pub fn new(index: SearchIndex, config: SearchConfig) -> Self {
        let cache = ResultCache::new(config.cache_capacity);
        Self {
            index,
            config,
            cache,
        }
    }

    /// Build an engine from the JSON form of a search index.
    pub fn from_json(json: &str, config: SearchConfig) -> Result<Self> {
        Ok(Self::new(SearchIndex::from_json(json)?, config))
    }

    /// Build an engine from a search index file.
    pub fn load<P: AsRef<Path>>(path: P, config: SearchConfig) -> Result<Self> {
        Ok(Self::new(SearchIndex::load(path)?, config))
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search with the configured result limit.
    pub fn search(&self, raw: &str) -> Vec<SearchResult> {
        self.search_limited(raw, self.config.result_limit)
    }

    /// Search for `raw`, returning at most `max_results` hits, best first.
    ///
    /// An empty query, or one that is empty after its kind prefix, returns no
    /// results.
    pub fn search_limited(&self, raw: &str, max_results: usize) -> Vec<SearchResult> {
        let query = Query::parse(raw);
        if query.is_empty() {
            tracing::debug!("Ignoring empty query '{}'", raw);
            return Vec::new();
        }

        let key = CacheKey {
            query: query.id(),
            max_results,
        };
        if let Some(results) = self.cache.get(&key) {
            return results;
        }

        let results = self.execute(&query, max_results);
        self.cache.insert(key, results.clone());
        results
    }

    fn execute(&self, query: &Query, max_results: usize) -> Vec<SearchResult> {
        let start = std::time::Instant::now();
        let lowered = query.text.to_lowercase();

        let mut matcher = Matcher::new(&self.index, self.config.max_distance);
        let mut candidates = matcher.candidates(query, self.config.candidate_limit);
        if candidates.is_empty() {
            return Vec::new();
        }

        validate(&mut candidates, &lowered, self.config.max_distance);
        rank(&mut candidates, &lowered);
        dedup(&mut candidates);
        let results = format_results(&candidates, &self.config.root_url, max_results);

        tracing::debug!(
            "Search '{}' returned {} of {} candidates in {:?}",
            query.raw,
            results.len(),
            candidates.len(),
            start.elapsed()
        );

        results
    }

    /// Number of result lists currently cached.
    pub fn cached_searches(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.index.len(),
            groups: self.index.groups().to_vec(),
            kinds: self.index.kind_counts(),
        }
    }
}
