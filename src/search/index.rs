//! Search index construction.
//!
//! The raw index maps each group (crate) to two tables:
//!
//! - `paths`: `[kindCode, name]` pairs describing container items
//! - `items`: `[kindCode, name, path, desc, parentIndex?, signature?]` tuples
//!
//! An empty `path` means "same path as the previous item of this group".
//! [`SearchIndex::build`] flattens every group into one ordered record list and
//! the parallel list of lowercased search words.

use crate::error::IndexError;
use crate::types::{ItemKind, PathEntry, SearchRecord, Signature};
use anyhow::Context;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// The raw index, with groups in document order.
#[derive(Debug, Clone, Default)]
pub struct RawIndex {
    groups: Vec<(String, RawGroup)>,
}

/// One group's raw tables.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGroup {
    items: Vec<Vec<Value>>,
    paths: Vec<(u64, String)>,
}

impl RawIndex {
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Group ids in iteration order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }
}

// serde_json's `Map` sorts keys unless `preserve_order` is enabled; group order
// decides record positions, so the map is read entry by entry instead.
impl<'de> Deserialize<'de> for RawIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = RawIndex;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of group id to {items, paths}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawIndex, A::Error> {
                let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, group)) = map.next_entry::<String, RawGroup>()? {
                    groups.push((name, group));
                }
                Ok(RawIndex { groups })
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

/// Flat, position-addressed search index.
///
/// `words[i]` is the lowercased name of `records[i]`. Positions are assigned
/// once by [`SearchIndex::build`] and never change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
    words: Vec<String>,
    groups: Vec<String>,
}

impl SearchIndex {
    /// Normalize a raw index into records and search words.
    pub fn build(raw: RawIndex) -> Result<Self, IndexError> {
        let start = std::time::Instant::now();
        let mut index = Self::default();

        for (group, raw_group) in raw.groups {
            index.add_group(&group, raw_group)?;
            index.groups.push(group);
        }

        tracing::info!(
            "Built search index: {} records across {} groups in {:?}",
            index.records.len(),
            index.groups.len(),
            start.elapsed()
        );

        Ok(index)
    }

    /// Parse and build an index from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        Self::build(RawIndex::from_json(json)?)
    }

    /// Read, parse and build an index file.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read search index at {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to build search index from {}", path.display()))
    }

    fn add_group(&mut self, group: &str, raw: RawGroup) -> Result<(), IndexError> {
        let paths = raw
            .paths
            .into_iter()
            .enumerate()
            .map(|(position, (code, name))| {
                ItemKind::from_code(code)
                    .map(|kind| PathEntry { kind, name })
                    .ok_or_else(|| IndexError::UnknownKind {
                        group: group.to_string(),
                        table: "paths",
                        position,
                        code,
                    })
            })
            .collect::<Result<Vec<_>, IndexError>>()?;

        self.records.reserve(raw.items.len());
        self.words.reserve(raw.items.len());

        let mut last_path = String::new();
        for (position, fields) in raw.items.iter().enumerate() {
            let fields = ItemFields {
                group,
                position,
                fields: fields.as_slice(),
            };
            let record = fields.into_record(&paths, &last_path)?;
            last_path.clone_from(&record.path);
            self.words.push(record.name.to_lowercase());
            self.records.push(record);
        }

        tracing::debug!(
            "Indexed group '{}': {} items, {} paths",
            group,
            raw.items.len(),
            paths.len()
        );
        Ok(())
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Lowercased record names, parallel to [`SearchIndex::records`].
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn record(&self, position: usize) -> Option<&SearchRecord> {
        self.records.get(position)
    }

    /// Group ids in build order.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records per kind, in kind order, omitting kinds with no records.
    pub fn kind_counts(&self) -> Vec<(ItemKind, usize)> {
        let mut counts = [0usize; ItemKind::ALL.len()];
        for record in &self.records {
            counts[usize::from(record.kind.code())] += 1;
        }
        ItemKind::ALL
            .into_iter()
            .zip(counts)
            .filter(|&(_, count)| count > 0)
            .collect()
    }
}

/// A raw item tuple with enough context to report errors.
struct ItemFields<'a> {
    group: &'a str,
    position: usize,
    fields: &'a [Value],
}

impl ItemFields<'_> {
    fn into_record(self, paths: &[PathEntry], last_path: &str) -> Result<SearchRecord, IndexError> {
        if self.fields.len() < 4 {
            return Err(self.malformed(format!(
                "expected at least 4 fields, found {}",
                self.fields.len()
            )));
        }

        let code = self.fields[0]
            .as_u64()
            .ok_or_else(|| self.malformed("kind code is not a non-negative integer"))?;
        let kind = ItemKind::from_code(code).ok_or_else(|| IndexError::UnknownKind {
            group: self.group.to_string(),
            table: "items",
            position: self.position,
            code,
        })?;

        // Non-string names are indexed with an empty search word.
        let name = self.fields[1].as_str().unwrap_or_default().to_string();

        let path = match &self.fields[2] {
            Value::String(path) if !path.is_empty() => path.clone(),
            Value::String(_) | Value::Null => last_path.to_string(),
            _ => return Err(self.malformed("path is not a string")),
        };

        let description = match &self.fields[3] {
            Value::String(desc) => desc.clone(),
            Value::Null => String::new(),
            _ => return Err(self.malformed("description is not a string")),
        };

        let parent = match self.fields.get(4) {
            None | Some(Value::Null) => None,
            Some(value) => {
                let parent = value
                    .as_u64()
                    .and_then(|p| usize::try_from(p).ok())
                    .ok_or_else(|| self.malformed("parent index is not a non-negative integer"))?;
                let entry = paths.get(parent).ok_or_else(|| IndexError::ParentOutOfRange {
                    group: self.group.to_string(),
                    position: self.position,
                    parent,
                    paths: paths.len(),
                })?;
                Some(entry.clone())
            }
        };

        let signature = match self.fields.get(5) {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                Signature::deserialize(value)
                    .map_err(|e| self.malformed(format!("invalid signature: {}", e)))?,
            ),
        };

        Ok(SearchRecord {
            group: self.group.to_string(),
            kind,
            name,
            path,
            description,
            parent,
            signature,
        })
    }

    fn malformed(&self, reason: impl Into<String>) -> IndexError {
        IndexError::MalformedItem {
            group: self.group.to_string(),
            position: self.position,
            reason: reason.into(),
        }
    }
}
