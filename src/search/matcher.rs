//! Candidate collection.
//!
//! A query is matched by exactly one strategy, picked from its lowercased text:
//!
//! - literal, for `"name"` or `'name'`: the search word must equal `name`
//! - signature, for `a, b -> c`: sorted input names and the output name must match
//! - general, for anything else: substring hits per `::` segment, with an
//!   edit-distance fallback
//!
//! Only search words are examined here. Validation and ranking look at the
//! full records afterwards.

use super::index::SearchIndex;
use super::levenshtein::Levenshtein;
use super::query::Query;
use crate::path::segments;
use crate::types::{ItemKind, SearchRecord, Signature};
use std::borrow::Cow;

/// A record that matched the query, plus the facts the ranker sorts on.
#[derive(Debug, Clone)]
pub(crate) struct Candidate<'a> {
    /// Position of the record in the index.
    pub(crate) index: usize,
    pub(crate) word: &'a str,
    pub(crate) record: &'a SearchRecord,
    /// Where the query occurs in the word; `None` for literal and signature hits.
    pub(crate) position: Option<usize>,
    /// Edit distance for fuzzy hits, `0` otherwise.
    pub(crate) distance: usize,
    /// Signature hits are exact and skip validation.
    pub(crate) validated: bool,
    /// Set by validation and deduplication; excluded candidates stay in place
    /// until formatting.
    pub(crate) excluded: bool,
}

/// How a query is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Strategy<'q> {
    Literal(&'q str),
    Signature { inputs: String, output: &'q str },
    General { segments: Vec<&'q str>, needle: String },
}

impl<'q> Strategy<'q> {
    /// Pick the strategy for an already lowercased query.
    pub(crate) fn select(lowered: &'q str) -> Self {
        if let Some(quote @ ('"' | '\'')) = lowered.chars().next()
            && lowered.ends_with(quote)
        {
            // Both quotes are one byte wide; a lone quote is an empty literal.
            return Self::Literal(lowered.get(1..lowered.len() - 1).unwrap_or_default());
        }

        if let Some((inputs, rest)) = lowered.split_once("->") {
            // Anything after a second arrow is ignored.
            let output = rest.split("->").next().unwrap_or_default().trim();
            let mut inputs: Vec<&str> = inputs.trim().split(',').map(str::trim).collect();
            inputs.sort_unstable();
            return Self::Signature {
                inputs: inputs.join(","),
                output,
            };
        }

        Self::General {
            segments: segments(lowered),
            needle: lowered.replace('_', ""),
        }
    }

    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Signature { .. } => "signature",
            Self::General { .. } => "general",
        }
    }
}

/// Collects candidates from an index.
pub(crate) struct Matcher<'a> {
    index: &'a SearchIndex,
    max_distance: usize,
    lev: Levenshtein,
}

impl<'a> Matcher<'a> {
    pub(crate) fn new(index: &'a SearchIndex, max_distance: usize) -> Self {
        Self {
            index,
            max_distance,
            lev: Levenshtein::new(),
        }
    }

    /// Find candidates for `query`, stopping early once about `limit` were found.
    ///
    /// The limit is checked after each record of a scan, so the general
    /// strategy can overshoot it by one record per extra `::` segment.
    pub(crate) fn candidates(&mut self, query: &Query, limit: usize) -> Vec<Candidate<'a>> {
        let lowered = query.text.to_lowercase();
        let strategy = Strategy::select(&lowered);

        let hits = match &strategy {
            Strategy::Literal(literal) => self.literal(literal, query.kind, limit),
            Strategy::Signature { inputs, output } => self.signature(inputs, output),
            Strategy::General { segments, needle } => {
                self.general(segments, needle, query.kind, limit)
            }
        };

        tracing::debug!(
            "Query '{}' matched {} candidates using the {} strategy",
            query.text,
            hits.len(),
            strategy.name()
        );

        hits
    }

    fn literal(&self, literal: &str, kind: Option<ItemKind>, limit: usize) -> Vec<Candidate<'a>> {
        let mut hits = Vec::new();
        for (index, word) in self.index.words().iter().enumerate() {
            if word == literal && self.kind_matches(index, kind) {
                hits.push(self.candidate(index, None, 0));
            }
            if hits.len() >= limit {
                break;
            }
        }
        hits
    }

    fn signature(&self, inputs: &str, output: &str) -> Vec<Candidate<'a>> {
        self.index
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                record
                    .signature
                    .as_ref()
                    .is_some_and(|signature| signature_matches(signature, inputs, output))
            })
            .map(|(index, _)| Candidate {
                validated: true,
                ..self.candidate(index, None, 0)
            })
            .collect()
    }

    fn general(
        &mut self,
        segments: &[&str],
        needle: &str,
        kind: Option<ItemKind>,
        limit: usize,
    ) -> Vec<Candidate<'a>> {
        let index = self.index;
        let needle_len = needle.chars().count();
        let mut hits = Vec::new();

        for segment in segments {
            for (position, word) in index.words().iter().enumerate() {
                let stripped = strip_underscores(word);
                if word.contains(*segment) || word.contains(needle) || stripped.contains(needle) {
                    if self.kind_matches(position, kind) {
                        let at = char_offset(&stripped, needle);
                        hits.push(self.candidate(position, at, 0));
                    }
                } else if word.chars().count().abs_diff(needle_len) <= self.max_distance {
                    let distance = self.lev.distance(word, needle);
                    if distance <= self.max_distance && self.kind_matches(position, kind) {
                        hits.push(self.candidate(position, Some(0), distance));
                    }
                }
                if hits.len() >= limit {
                    break;
                }
            }
        }
        hits
    }

    fn kind_matches(&self, index: usize, kind: Option<ItemKind>) -> bool {
        kind.is_none_or(|kind| self.index.records()[index].kind == kind)
    }

    fn candidate(&self, index: usize, position: Option<usize>, distance: usize) -> Candidate<'a> {
        Candidate {
            index,
            word: &self.index.words()[index],
            record: &self.index.records()[index],
            position,
            distance,
            validated: false,
            excluded: false,
        }
    }
}

/// Order-independent comparison of a signature against a parsed query.
fn signature_matches(signature: &Signature, inputs: &str, output: &str) -> bool {
    let signature_output = signature
        .output
        .as_ref()
        .map(|o| o.name.to_lowercase())
        .unwrap_or_default();
    if signature_output != output {
        return false;
    }

    let mut names: Vec<String> = signature
        .inputs
        .iter()
        .map(|input| input.name.to_lowercase())
        .collect();
    names.sort_unstable();
    // Compared in joined form: no inputs and a single empty input are the same.
    names.join(",") == inputs
}

fn strip_underscores(word: &str) -> Cow<'_, str> {
    if word.contains('_') {
        Cow::Owned(word.replace('_', ""))
    } else {
        Cow::Borrowed(word)
    }
}

/// Character offset of `needle` in `haystack`.
fn char_offset(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte| haystack[..byte].chars().count())
}
