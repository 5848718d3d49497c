//! Elementary transitions for Levenshtein distance with merges and splits.
//!
//! A merge reads one dictionary character against two query characters and
//! jumps straight to `(i + 2, e + 1)`. A split reads two dictionary
//! characters against one query character: the first leaves a flagged
//! position `(i, e + 1, 1)` behind, the second resolves it unconditionally.

use super::position::{FlaggedPosition, Position};
use super::transition::{EditModel, Successors};
use smallvec::smallvec;

/// Standard operations plus merge and split.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeAndSplitModel;

impl EditModel for MergeAndSplitModel {
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
        let s = FlaggedPosition::new_flagged;

        if e < n {
            if h + 2 <= w {
                Some(if flagged || v[h] {
                    smallvec![p(i + 1, e)]
                } else {
                    smallvec![p(i, e + 1), s(i, e + 1), p(i + 1, e + 1), p(i + 2, e + 1)]
                })
            } else if h + 1 == w {
                Some(if flagged || v[h] {
                    smallvec![p(i + 1, e)]
                } else {
                    smallvec![p(i, e + 1), s(i, e + 1), p(i + 1, e + 1)]
                })
            } else {
                Some(smallvec![p(i, e + 1)])
            }
        } else if h < w {
            if flagged {
                Some(smallvec![p(i + 1, e)])
            } else {
                v[h].then(|| smallvec![p(i + 1, n)])
            }
        } else {
            None
        }
    }

    fn subsumes(lhs: &FlaggedPosition, rhs: &FlaggedPosition, _n: usize) -> bool {
        if lhs.flagged && !rhs.flagged {
            return false;
        }
        rhs.errors()
            .checked_sub(lhs.errors())
            .is_some_and(|budget| lhs.offset().abs_diff(rhs.offset()) <= budget)
    }
}
