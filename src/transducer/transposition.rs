//! Elementary transitions for Levenshtein distance with adjacent
//! transpositions.
//!
//! A flagged position `(i, e, 1)` has read the first character of a swapped
//! pair; it may only continue by reading the character at `i`, which
//! completes the swap and advances two query characters at once.

use super::position::{FlaggedPosition, Position};
use super::transition::{index_of, EditModel, Successors};
use smallvec::smallvec;

/// Standard operations plus transposition of adjacent characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranspositionModel;

impl EditModel for TranspositionModel {
    type Position = FlaggedPosition;

    fn transition(
        n: usize,
        position: FlaggedPosition,
        v: &[bool],
        offset: usize,
    ) -> Option<Successors<FlaggedPosition>> {
        let FlaggedPosition {
            offset: i,
            errors: e,
            flagged,
        } = position;
        let h = i - offset;
        let w = v.len();
        let p = FlaggedPosition::new;
        let t = FlaggedPosition::new_flagged;

        if e < n {
            if h + 2 <= w {
                if flagged {
                    return v[h].then(|| smallvec![p(i + 2, e)]);
                }
                let k = (n - e + 1).min(w - h);
                Some(match index_of(v, k, h) {
                    Some(0) => smallvec![p(i + 1, e)],
                    Some(1) => smallvec![
                        p(i, e + 1),
                        t(i, e + 1),
                        p(i + 1, e + 1),
                        p(i + 2, e + 1)
                    ],
                    Some(j) => smallvec![p(i, e + 1), p(i + 1, e + 1), p(i + j + 1, e + j)],
                    None => smallvec![p(i, e + 1), p(i + 1, e + 1)],
                })
            } else if h + 1 == w {
                Some(if v[h] {
                    smallvec![p(i + 1, e)]
                } else {
                    smallvec![p(i, e + 1), p(i + 1, e + 1)]
                })
            } else {
                Some(smallvec![p(i, e + 1)])
            }
        } else if !flagged {
            (h < w && v[h]).then(|| smallvec![p(i + 1, n)])
        } else {
            (h + 2 <= w && v[h]).then(|| smallvec![p(i + 2, n)])
        }
    }

    fn subsumes(lhs: &FlaggedPosition, rhs: &FlaggedPosition, n: usize) -> bool {
        let (i, e) = (lhs.offset(), lhs.errors());
        let (j, f) = (rhs.offset(), rhs.errors());
        let Some(budget) = f.checked_sub(e) else {
            return false;
        };

        match (lhs.flagged, rhs.flagged) {
            (true, true) => i == j,
            (true, false) => f == n && i == j,
            (false, true) => i.abs_diff(j) < budget,
            (false, false) => i.abs_diff(j) <= budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize, e: usize) -> FlaggedPosition {
        FlaggedPosition::new(i, e)
    }

    fn t(i: usize, e: usize) -> FlaggedPosition {
        FlaggedPosition::new_flagged(i, e)
    }

    fn step(n: usize, pos: FlaggedPosition, v: &[bool]) -> Option<Vec<FlaggedPosition>> {
        TranspositionModel::transition(n, pos, v, 0).map(|s| s.into_vec())
    }

    #[test]
    fn test_next_character_starts_a_swap() {
        // Reading 'b' against query "ab..": the swap "ba" becomes possible.
        assert_eq!(
            step(1, p(0, 0), &[false, true, false]),
            Some(vec![p(0, 1), t(0, 1), p(1, 1), p(2, 1)])
        );
    }

    #[test]
    fn test_pending_swap_completes() {
        assert_eq!(step(2, t(0, 1), &[true, false, false]), Some(vec![p(2, 1)]));
        assert_eq!(step(2, t(0, 1), &[false, true, false]), None);
    }

    #[test]
    fn test_pending_swap_at_budget() {
        assert_eq!(step(1, t(0, 1), &[true, false]), Some(vec![p(2, 1)]));
        assert_eq!(step(1, t(0, 1), &[true]), None);
    }

    #[test]
    fn test_far_hit_behaves_like_standard() {
        assert_eq!(
            step(2, p(0, 0), &[false, false, true, false]),
            Some(vec![p(0, 1), p(1, 1), p(3, 2)])
        );
    }

    #[test]
    fn test_exact_only_when_budget_is_zero() {
        assert_eq!(step(0, p(0, 0), &[true]), Some(vec![p(1, 0)]));
        assert_eq!(step(0, p(0, 0), &[false]), None);
    }

    #[test]
    fn test_subsumption_flag_rules() {
        // Flagged subsumed position needs one extra unit of slack.
        assert!(!TranspositionModel::subsumes(&p(0, 0), &t(1, 1), 2));
        assert!(TranspositionModel::subsumes(&p(0, 0), &t(1, 2), 2));
        // Flagged subsumer only covers the same offset.
        assert!(TranspositionModel::subsumes(&t(1, 1), &t(1, 2), 2));
        assert!(!TranspositionModel::subsumes(&t(1, 1), &t(2, 2), 2));
        assert!(TranspositionModel::subsumes(&t(1, 1), &p(1, 2), 2));
        assert!(!TranspositionModel::subsumes(&t(1, 0), &p(1, 1), 2));
    }
}
