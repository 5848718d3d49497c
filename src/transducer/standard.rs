//! Elementary transitions for the standard Levenshtein model.
//!
//! Notation: `(i, e)` is the position being stepped, `h = i - offset` its
//! index into the characteristic vector `v`, `w = |v|` and `n` the error
//! bound. The cases follow Schulz & Mihov, table 4.

use super::position::{Position, SimplePosition};
use super::transition::{index_of, EditModel, Successors};
use smallvec::smallvec;

/// Insert, delete and substitute, each at cost one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardModel;

impl EditModel for StandardModel {
    type Position = SimplePosition;

    fn transition(
        n: usize,
        position: SimplePosition,
        v: &[bool],
        offset: usize,
    ) -> Option<Successors<SimplePosition>> {
        let SimplePosition { offset: i, errors: e } = position;
        let h = i - offset;
        let w = v.len();
        let p = SimplePosition::new;

        if e < n {
            if h + 2 <= w {
                let k = (n - e + 1).min(w - h);
                Some(match index_of(v, k, h) {
                    Some(0) => smallvec![p(i + 1, e)],
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
        } else if e == n && h < w && v[h] {
            Some(smallvec![p(i + 1, n)])
        } else {
            None
        }
    }

    fn subsumes(lhs: &SimplePosition, rhs: &SimplePosition, _n: usize) -> bool {
        rhs.errors()
            .checked_sub(lhs.errors())
            .is_some_and(|budget| lhs.offset().abs_diff(rhs.offset()) <= budget)
    }
}
