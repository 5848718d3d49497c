//! Characteristic vectors and the per-model transition interface.

use super::position::Position;
use smallvec::SmallVec;

/// Successor positions produced by one elementary transition.
pub type Successors<P> = SmallVec<[P; 4]>;

/// Buffer type for characteristic vectors.
///
/// The window never exceeds `2n + 1`, so sixteen slots cover every bound up
/// to seven without spilling.
pub type CharacteristicVector = SmallVec<[bool; 16]>;

/// An edit-distance model in the sense of Schulz & Mihov.
///
/// Implementors are zero-sized markers; the search is monomorphised over
/// them, so the transition table of the configured model is inlined into the
/// traversal loop.
pub trait EditModel {
    /// Shape of the positions this model works with.
    type Position: Position;

    /// Successors of `position` after reading a dictionary character.
    ///
    /// `vector` is the characteristic vector of that character relative to
    /// `offset`, the smallest offset of the state being stepped. `None` means
    /// the position cannot advance.
    fn transition(
        max_distance: usize,
        position: Self::Position,
        vector: &[bool],
        offset: usize,
    ) -> Option<Successors<Self::Position>>;

    /// True if `lhs` makes `rhs` redundant.
    ///
    /// Only ever asked for `rhs` with strictly more errors than `lhs`.
    fn subsumes(lhs: &Self::Position, rhs: &Self::Position, max_distance: usize) -> bool;
}

/// Fill `buf` with `term[offset + j] == label` for `j` in `0..window`.
pub fn characteristic_vector(
    label: char,
    term: &[char],
    window: usize,
    offset: usize,
    buf: &mut CharacteristicVector,
) {
    buf.clear();
    buf.extend(
        term[offset..]
            .iter()
            .take(window)
            .map(|&c| c == label),
    );
}

/// First `j < k` with `vector[h + j]` set.
#[inline]
pub(crate) fn index_of(vector: &[bool], k: usize, h: usize) -> Option<usize> {
    vector[h..h + k].iter().position(|&hit| hit)
}

/// Simple lowercase folding: characters whose lowercase form is more than
/// one character are left untouched.
#[inline]
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_characteristic_vector_window() {
        let term = chars("abcab");
        let mut buf = CharacteristicVector::new();

        characteristic_vector('a', &term, 5, 0, &mut buf);
        assert_eq!(buf.as_slice(), &[true, false, false, true, false]);

        characteristic_vector('b', &term, 3, 1, &mut buf);
        assert_eq!(buf.as_slice(), &[true, false, false]);

        // Window is clipped at the end of the term.
        characteristic_vector('b', &term, 9, 3, &mut buf);
        assert_eq!(buf.as_slice(), &[false, true]);
    }

    #[test]
    fn test_characteristic_vector_past_end_is_empty() {
        let term = chars("ab");
        let mut buf = CharacteristicVector::new();
        characteristic_vector('a', &term, 3, 2, &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_index_of() {
        let v = [false, false, true, true];
        assert_eq!(index_of(&v, 4, 0), Some(2));
        assert_eq!(index_of(&v, 2, 0), None);
        assert_eq!(index_of(&v, 2, 1), Some(1));
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case('B'), 'b');
        assert_eq!(fold_case('b'), 'b');
        assert_eq!(fold_case('É'), 'é');
        // 'İ' lowercases to two characters and is kept as is.
        assert_eq!(fold_case('İ'), 'İ');
    }
}
