//! Levenshtein edit distance.
//!
//! Single-row dynamic programming: O(len(a) · len(b)) time, O(len(a)) space.
//! [`Levenshtein`] keeps that row between calls so a matcher scanning the whole
//! index allocates it once.

/// Edit distance calculator with a reusable row buffer.
#[derive(Debug, Default)]
pub struct Levenshtein {
    row: Vec<usize>,
}

impl Levenshtein {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum number of single-character insertions, deletions and
    /// substitutions turning `a` into `b`. Works on `char`s, not bytes.
    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        if a == b {
            return 0;
        }

        let a_len = a.chars().count();
        if a_len == 0 {
            return b.chars().count();
        }
        if b.is_empty() {
            return a_len;
        }

        self.row.clear();
        self.row.extend(1..=a_len);

        let mut last = 0;
        for (j, bc) in b.chars().enumerate() {
            // `diagonal` is the cell up-left of the one being computed, `last`
            // the cell to its left.
            let mut diagonal = j;
            last = j + 1;
            for (cell, ac) in self.row.iter_mut().zip(a.chars()) {
                let substitute = diagonal + usize::from(ac != bc);
                diagonal = *cell;
                last = (last.min(diagonal) + 1).min(substitute);
                *cell = last;
            }
        }
        last
    }

    /// Whether `a` and `b` are at most `max` edits apart.
    pub fn within(&mut self, a: &str, b: &str, max: usize) -> bool {
        let a_len = a.chars().count();
        let b_len = b.chars().count();
        // Length difference is a lower bound on the distance.
        if a_len.abs_diff(b_len) > max {
            return false;
        }
        self.distance(a, b) <= max
    }
}

/// Edit distance between `a` and `b`. See [`Levenshtein::distance`].
pub fn distance(a: &str, b: &str) -> usize {
    Levenshtein::new().distance(a, b)
}
