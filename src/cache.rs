//! LRU memo of formatted results.
//!
//! Searching is a pure function of the index, the config and the query, so a
//! cached list is always identical to what a fresh search would produce.

use crate::search::QueryId;
use crate::types::SearchResult;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Identity of a search call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub query: QueryId,
    pub max_results: usize,
}

/// Bounded cache of result lists, keyed by [`CacheKey`].
pub struct ResultCache {
    /// `None` when the capacity is zero.
    entries: Option<Mutex<LruCache<CacheKey, Vec<SearchResult>>>>,
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("enabled", &self.is_enabled())
            .field("len", &self.len())
            .finish()
    }
}

impl ResultCache {
    /// Create a cache holding up to `capacity` result lists. `0` disables it.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Vec<SearchResult>> {
        let mut entries = self.lock()?;
        let hit = entries.get(key).cloned();
        if hit.is_some() {
            tracing::trace!("Cache hit for '{}'", key.query.text);
        }
        hit
    }

    pub fn insert(&self, key: CacheKey, results: Vec<SearchResult>) {
        if let Some(mut entries) = self.lock() {
            entries.put(key, results);
        }
    }

    /// Number of cached result lists.
    pub fn len(&self) -> usize {
        self.lock().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Some(mut entries) = self.lock() {
            entries.clear();
        }
    }

    // Entries are replaced whole; a poisoned lock still guards a valid cache.
    fn lock(&self) -> Option<MutexGuard<'_, LruCache<CacheKey, Vec<SearchResult>>>> {
        self.entries
            .as_ref()
            .map(|entries| entries.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
