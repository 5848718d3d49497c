//! Distance metric implementations.
//!
//! Whole-string edit distances computed by dynamic programming over a few
//! rolling rows. The transducer never calls these; they serve callers that
//! need the distance of one known pair, and act as the reference the
//! automaton is tested against.

use crate::transducer::Algorithm;
use smallvec::SmallVec;

type Chars = SmallVec<[char; 32]>;

/// Edit distance between `source` and `target` under `algorithm`.
///
/// # Example
///
/// ```rust
/// use levdawg::distance::edit_distance;
/// use levdawg::transducer::Algorithm;
///
/// assert_eq!(edit_distance("abdc", "abcd", Algorithm::Standard), 2);
/// assert_eq!(edit_distance("abdc", "abcd", Algorithm::Transposition), 1);
/// assert_eq!(edit_distance("m", "rn", Algorithm::MergeAndSplit), 1);
/// ```
pub fn edit_distance(source: &str, target: &str, algorithm: Algorithm) -> usize {
    match algorithm {
        Algorithm::Standard => standard_distance(source, target),
        Algorithm::Transposition => transposition_distance(source, target),
        Algorithm::MergeAndSplit => merge_and_split_distance(source, target),
    }
}

/// Compute standard Levenshtein distance between two strings.
///
/// Uses dynamic programming to compute the minimum number of
/// single-character edits (insertions, deletions, substitutions)
/// required to transform `source` into `target`.
///
/// ```rust
/// use levdawg::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("test", "test"), 0);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: Chars = source.chars().collect();
    let target_chars: Chars = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute Levenshtein distance with transposition support.
///
/// Swapping two adjacent characters costs one edit. This is the optimal
/// string alignment variant: no substring is edited more than once, so
/// `"ca"` to `"abc"` is 3, not 2.
///
/// ```rust
/// use levdawg::distance::transposition_distance;
///
/// assert_eq!(transposition_distance("test", "tset"), 1);
/// ```
pub fn transposition_distance(source: &str, target: &str) -> usize {
    let source_chars: Chars = source.chars().collect();
    let target_chars: Chars = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_prev_row = vec![0; n + 1];
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            let mut best = (prev_row[j] + 1)
                .min(curr_row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);

            if i > 1
                && j > 1
                && source_chars[i - 1] == target_chars[j - 2]
                && source_chars[i - 2] == target_chars[j - 1]
            {
                best = best.min(prev_prev_row[j - 2] + 1); // transposition
            }

            curr_row[j] = best;
        }

        std::mem::swap(&mut prev_prev_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute Levenshtein distance with merge and split support.
///
/// Besides the standard operations, two characters may be merged into any
/// single character and one character may be split into any two, each at
/// cost one. Both directions are available, so the distance is symmetric.
///
/// ```rust
/// use levdawg::distance::merge_and_split_distance;
///
/// assert_eq!(merge_and_split_distance("rn", "m"), 1);
/// assert_eq!(merge_and_split_distance("m", "rn"), 1);
/// ```
pub fn merge_and_split_distance(source: &str, target: &str) -> usize {
    let v: Chars = source.chars().collect();
    let w: Chars = target.chars().collect();

    let m = v.len();
    let n = w.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Rows hold distances between suffixes: row i, column j is the distance
    // from v[i..] to w[j..]. Rows are filled from i = m down to 0.
    let mut next_next_row = vec![0; n + 1];
    let mut next_row: Vec<usize> = (0..=n).map(|j| n - j).collect();
    let mut curr_row = vec![0; n + 1];

    for i in (0..m).rev() {
        curr_row[n] = m - i;

        for j in (0..n).rev() {
            curr_row[j] = if v[i] == w[j] {
                next_row[j + 1]
            } else {
                let mut best = next_row[j] // deletion
                    .min(curr_row[j + 1]) // insertion
                    .min(next_row[j + 1]); // substitution
                if n - j > 1 {
                    best = best.min(next_row[j + 2]); // split
                }
                if m - i > 1 {
                    best = best.min(next_next_row[j + 1]); // merge
                }
                best + 1
            };
        }

        std::mem::swap(&mut next_next_row, &mut next_row);
        std::mem::swap(&mut next_row, &mut curr_row);
    }

    next_row[0]
}
