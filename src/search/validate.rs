//! Second-pass filter for general matches.
//!
//! The matcher only looks at search words. Here every `::` segment of the
//! query must also be found somewhere in the record itself: in its name, its
//! path, its parent's name, or within edit distance of its name. `File::open`
//! therefore keeps `std::fs::File::open` but drops an unrelated `open` whose
//! path never mentions a file.

use super::levenshtein::Levenshtein;
use super::matcher::Candidate;
use crate::path::segments;
use crate::types::SearchRecord;

/// Mark candidates that fail any query segment as excluded.
///
/// `lowered` is the lowercased query text. Candidates already validated by
/// their strategy are left alone.
pub(crate) fn validate(candidates: &mut [Candidate<'_>], lowered: &str, max_distance: usize) {
    let keys = segments(lowered);
    let mut lev = Levenshtein::new();
    let mut excluded = 0usize;

    for candidate in candidates.iter_mut().filter(|c| !c.validated) {
        if !is_valid(candidate.record, &keys, &mut lev, max_distance) {
            candidate.excluded = true;
            excluded += 1;
        }
    }

    tracing::trace!("Validation excluded {} candidates", excluded);
}

fn is_valid(
    record: &SearchRecord,
    keys: &[&str],
    lev: &mut Levenshtein,
    max_distance: usize,
) -> bool {
    let name = record.name.to_lowercase();
    let path = record.path.to_lowercase();
    let parent = record.parent.as_ref().map(|parent| parent.name.to_lowercase());

    keys.iter().all(|key| {
        name.contains(key)
            || path.contains(key)
            || parent.as_deref().is_some_and(|parent| parent.contains(key))
            || lev.within(&name, key, max_distance)
    })
}
