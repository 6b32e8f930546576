//! Candidate ordering and duplicate collapsing.

use super::matcher::Candidate;
use crate::types::ItemKind;
use std::cmp::Ordering;

/// Sort key, compared field by field:
///
/// 1. edit distance (substring hits first)
/// 2. word equal to the whole query first
/// 3. shorter word
/// 4. word, lexicographically
/// 5. hits with a known position first
/// 6. earlier position
/// 7. described records first
/// 8. kind, in declaration order
/// 9. path, lexicographically
type RankKey<'c> = (
    usize,
    bool,
    usize,
    &'c str,
    bool,
    usize,
    bool,
    ItemKind,
    &'c str,
);

fn rank_key<'c>(candidate: &'c Candidate<'_>, lowered: &str) -> RankKey<'c> {
    (
        candidate.distance,
        candidate.word != lowered,
        candidate.word.chars().count(),
        candidate.word,
        candidate.position.is_none(),
        candidate.position.unwrap_or_default(),
        candidate.record.description.is_empty(),
        candidate.record.kind,
        candidate.record.path.as_str(),
    )
}

fn compare(a: &Candidate<'_>, b: &Candidate<'_>, lowered: &str) -> Ordering {
    rank_key(a, lowered).cmp(&rank_key(b, lowered))
}

/// Sort candidates best first. Excluded candidates are sorted along with the
/// rest. The sort is stable, so full ties keep matcher order.
pub(crate) fn rank(candidates: &mut [Candidate<'_>], lowered: &str) {
    candidates.sort_by(|a, b| compare(a, b, lowered));
}

/// Exclude every candidate that repeats its predecessor's word, kind, path and
/// parent name. Only adjacent duplicates are caught, so call after [`rank`].
pub(crate) fn dedup(candidates: &mut [Candidate<'_>]) {
    for i in (1..candidates.len()).rev() {
        if same_item(&candidates[i], &candidates[i - 1]) {
            candidates[i].excluded = true;
        }
    }
}

fn same_item(a: &Candidate<'_>, b: &Candidate<'_>) -> bool {
    a.word == b.word
        && a.record.kind == b.record.kind
        && a.record.path == b.record.path
        && a.record.parent.as_ref().map(|p| &p.name) == b.record.parent.as_ref().map(|p| &p.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PathEntry, SearchRecord};
    use assert2::check;

    fn record(kind: ItemKind, name: &str, path: &str, description: &str) -> SearchRecord {
        SearchRecord {
            group: "std".to_string(),
            kind,
            name: name.to_string(),
            path: path.to_string(),
            description: description.to_string(),
            parent: None,
            signature: None,
        }
    }

    fn candidate(
        index: usize,
        record: &SearchRecord,
        position: Option<usize>,
        distance: usize,
    ) -> Candidate<'_> {
        Candidate {
            index,
            word: &record.name,
            record,
            position,
            distance,
            validated: false,
            excluded: false,
        }
    }

    fn order(candidates: &[Candidate<'_>]) -> Vec<usize> {
        candidates.iter().map(|c| c.index).collect()
    }

    #[test]
    fn test_distance_beats_everything() {
        let fuzzy = record(ItemKind::Function, "opem", "std", "d");
        let exact = record(ItemKind::Function, "openoptions", "std", "");
        let mut candidates = [candidate(0, &fuzzy, Some(0), 1), candidate(1, &exact, None, 0)];
        rank(&mut candidates, "open");
        check!(order(&candidates) == [1, 0]);
    }

    #[test]
    fn test_exact_word_then_length_then_word() {
        let long = record(ItemKind::Function, "opener", "std", "d");
        let exact = record(ItemKind::Function, "open", "std", "d");
        let short = record(ItemKind::Function, "opens", "std", "d");
        let also_short = record(ItemKind::Function, "apens", "std", "d");
        let mut candidates = [
            candidate(0, &long, Some(0), 0),
            candidate(1, &short, Some(0), 0),
            candidate(2, &exact, Some(0), 0),
            candidate(3, &also_short, Some(1), 0),
        ];
        rank(&mut candidates, "open");
        check!(order(&candidates) == [2, 3, 1, 0]);
    }

    #[test]
    fn test_position_then_description_then_kind_then_path() {
        let a = record(ItemKind::Method, "open", "std::fs", "d");
        let b = record(ItemKind::Method, "open", "std::fs", "");
        let c = record(ItemKind::Function, "open", "std::fs", "");
        let d = record(ItemKind::Function, "open", "core::fs", "");
        let e = record(ItemKind::Module, "open", "std::fs", "d");
        let mut candidates = [
            candidate(0, &e, None, 0),
            candidate(1, &c, Some(0), 0),
            candidate(2, &b, Some(0), 0),
            candidate(3, &a, Some(0), 0),
            candidate(4, &d, Some(0), 0),
        ];
        rank(&mut candidates, "x");
        check!(order(&candidates) == [3, 4, 1, 2, 0]);
    }

    #[test]
    fn test_earlier_position_first() {
        let a = record(ItemKind::Struct, "bufread", "std::io", "");
        let mut candidates = [candidate(0, &a, Some(3), 0), candidate(1, &a, Some(0), 0)];
        rank(&mut candidates, "read");
        check!(order(&candidates) == [1, 0]);
    }

    #[test]
    fn test_dedup_adjacent_only() {
        let first = record(ItemKind::Function, "open", "std::fs", "d");
        let twin = record(ItemKind::Function, "open", "std::fs", "other words");
        let elsewhere = record(ItemKind::Function, "open", "std::net", "d");
        let mut candidates = [
            candidate(0, &first, Some(0), 0),
            candidate(1, &twin, Some(0), 0),
            candidate(2, &elsewhere, Some(0), 0),
            candidate(3, &first, Some(0), 0),
        ];
        dedup(&mut candidates);
        let excluded: Vec<bool> = candidates.iter().map(|c| c.excluded).collect();
        check!(excluded == [false, true, false, false]);
    }

    #[test]
    fn test_dedup_respects_parent() {
        let mut on_file = record(ItemKind::Method, "open", "std::fs", "d");
        on_file.parent = Some(PathEntry {
            kind: ItemKind::Struct,
            name: "File".to_string(),
        });
        let mut on_options = on_file.clone();
        on_options.parent = Some(PathEntry {
            kind: ItemKind::Struct,
            name: "OpenOptions".to_string(),
        });
        let mut candidates = [
            candidate(0, &on_file, Some(0), 0),
            candidate(1, &on_options, Some(0), 0),
            candidate(2, &on_options, Some(0), 0),
        ];
        dedup(&mut candidates);
        check!(!candidates[1].excluded);
        check!(candidates[2].excluded);
    }
}
