//! # Search Configuration Module
//!
//! Tunables for matching, result limits and link generation. Every key is
//! optional; a missing config file means [`SearchConfig::default`].

use crate::error::Result;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Documentation site prefix for generated links.
pub const DEFAULT_ROOT_URL: &str = "https://doc.rust-lang.org/stable/";

/// Edit distance up to which a name still counts as a fuzzy match.
pub const DEFAULT_MAX_DISTANCE: usize = 3;

/// Early-exit cap handed to the matcher.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 20_000;

/// Default number of formatted results.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Default number of cached result lists.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub root_url: String,
    pub max_distance: usize,
    pub candidate_limit: usize,
    pub result_limit: usize,
    /// `0` disables the result cache.
    pub cache_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            root_url: DEFAULT_ROOT_URL.to_string(),
            max_distance: DEFAULT_MAX_DISTANCE,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            result_limit: DEFAULT_RESULT_LIMIT,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl SearchConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse search config")?;
        Ok(config.normalized())
    }

    /// Load a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config at {}", path.display()))
    }

    fn normalized(mut self) -> Self {
        if !self.root_url.is_empty() && !self.root_url.ends_with('/') {
            self.root_url.push('/');
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SearchConfig::from_toml("").unwrap();
        check!(config == SearchConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = SearchConfig::from_toml("max_distance = 1\nresult_limit = 5\n").unwrap();
        check!(config.max_distance == 1);
        check!(config.result_limit == 5);
        check!(config.root_url == DEFAULT_ROOT_URL);
        check!(config.candidate_limit == DEFAULT_CANDIDATE_LIMIT);
    }

    #[test]
    fn test_root_url_gets_trailing_slash() {
        let config = SearchConfig::from_toml(r#"root_url = "https://docs.rs/tokio/latest""#)
            .unwrap();
        check!(config.root_url == "https://docs.rs/tokio/latest/");
    }

    #[test]
    fn test_unknown_key_rejected() {
        check!(SearchConfig::from_toml("max_lev = 2").is_err());
    }
}
