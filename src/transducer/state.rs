//! Automaton state (collection of positions).

use super::position::Position;
use super::transition::EditModel;
use smallvec::SmallVec;
use std::fmt;

/// A state of the Levenshtein automaton.
///
/// While successors are being collected the positions are ordered by
/// `(errors, offset, flag)`, which lets subsumption compare a position only
/// against the tail holding strictly more errors. Once a state is complete it
/// is re-sorted by `(offset, errors, flag)` so that its head carries the
/// smallest offset, the baseline for the next characteristic vector.
///
/// After subsumption a state holds O(n) positions, so eight are stored
/// inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State<P: Position> {
    positions: SmallVec<[P; 8]>,
}

impl<P: Position> State<P> {
    /// Create an empty state.
    pub fn new() -> Self {
        State {
            positions: SmallVec::new(),
        }
    }

    /// The start state `{(0, 0)}`.
    pub fn initial() -> Self {
        let mut positions = SmallVec::new();
        positions.push(P::initial());
        State { positions }
    }

    /// Positions in their current order.
    #[inline]
    pub fn positions(&self) -> &[P] {
        &self.positions
    }

    /// First position.
    pub fn head(&self) -> Option<&P> {
        self.positions.first()
    }

    /// Check if this state is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Insert keeping `(errors, offset, flag)` order; duplicates are skipped.
    pub fn insert(&mut self, position: P) {
        let key = position.insertion_key();
        if let Err(idx) = self
            .positions
            .binary_search_by(|p| p.insertion_key().cmp(&key))
        {
            self.positions.insert(idx, position);
        }
    }

    /// Drop every position subsumed by another one.
    ///
    /// Requires insertion order.
    pub fn unsubsume<M: EditModel<Position = P>>(&mut self, max_distance: usize) {
        let mut m = 0;
        while m < self.positions.len() {
            let lhs = self.positions[m];
            let mut n = self
                .positions
                .partition_point(|p| p.errors() <= lhs.errors());
            while n < self.positions.len() {
                if M::subsumes(&lhs, &self.positions[n], max_distance) {
                    self.positions.remove(n);
                } else {
                    n += 1;
                }
            }
            m += 1;
        }
    }

    /// Re-sort by `(offset, errors, flag)`.
    pub fn sort_for_traversal(&mut self) {
        self.positions.sort_unstable_by_key(|p| p.traversal_key());
    }

    /// Step every position over one dictionary character.
    ///
    /// `self` must be in traversal order. Returns `None` when no position
    /// survives, i.e. the dictionary path can be pruned.
    pub fn transition<M: EditModel<Position = P>>(
        &self,
        vector: &[bool],
        max_distance: usize,
    ) -> Option<Self> {
        let offset = self.head()?.offset();
        let mut next = State::new();
        for &position in &self.positions {
            if let Some(successors) = M::transition(max_distance, position, vector, offset) {
                for successor in successors {
                    next.insert(successor);
                }
            }
        }

        next.unsubsume::<M>(max_distance);
        if next.is_empty() {
            return None;
        }
        next.sort_for_traversal();
        Some(next)
    }

    /// Smallest `query_length - offset + errors` over positions without a
    /// pending operation.
    pub fn min_distance(&self, query_length: usize) -> Option<usize> {
        self.positions
            .iter()
            .filter(|p| !p.is_flagged())
            .map(|p| query_length.saturating_sub(p.offset()) + p.errors())
            .min()
    }

    /// Distance of the best accepting position, if any is within the bound.
    pub fn accepting_distance(&self, query_length: usize, max_distance: usize) -> Option<usize> {
        self.min_distance(query_length)
            .filter(|&distance| distance <= max_distance)
    }
}

impl<P: Position> Default for State<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Position> fmt::Display for State<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, position) in self.positions.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", position)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transducer::position::{FlaggedPosition, SimplePosition};
    use crate::transducer::standard::StandardModel;
    use crate::transducer::transposition::TranspositionModel;

    #[test]
    fn test_insert_sorted_and_deduplicated() {
        let mut state = State::new();
        state.insert(SimplePosition::new(2, 1));
        state.insert(SimplePosition::new(0, 0));
        state.insert(SimplePosition::new(1, 1));
        state.insert(SimplePosition::new(2, 1));

        assert_eq!(
            state.positions(),
            &[
                SimplePosition::new(0, 0),
                SimplePosition::new(1, 1),
                SimplePosition::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_unsubsume_standard() {
        let mut state = State::new();
        state.insert(SimplePosition::new(1, 0));
        state.insert(SimplePosition::new(2, 1));
        state.insert(SimplePosition::new(4, 1));
        state.unsubsume::<StandardModel>(2);

        // (1,0) covers (2,1) but not (4,1).
        assert_eq!(
            state.positions(),
            &[SimplePosition::new(1, 0), SimplePosition::new(4, 1)]
        );
    }

    #[test]
    fn test_equal_errors_never_subsume() {
        let mut state = State::new();
        state.insert(SimplePosition::new(1, 1));
        state.insert(SimplePosition::new(2, 1));
        state.unsubsume::<StandardModel>(2);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_flagged_position_survives_slack() {
        let mut state = State::new();
        state.insert(FlaggedPosition::new(0, 0));
        state.insert(FlaggedPosition::new_flagged(1, 1));
        state.unsubsume::<TranspositionModel>(1);

        // A pending transposition needs one extra unit of slack.
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_sort_for_traversal() {
        let mut state = State::new();
        state.insert(SimplePosition::new(3, 0));
        state.insert(SimplePosition::new(1, 1));
        state.sort_for_traversal();
        assert_eq!(state.head(), Some(&SimplePosition::new(1, 1)));
        assert_eq!(state.to_string(), "[(1,1),(3,0)]");
    }

    #[test]
    fn test_min_distance_skips_flagged() {
        let mut state = State::new();
        state.insert(FlaggedPosition::new_flagged(4, 1));
        state.insert(FlaggedPosition::new(2, 1));
        assert_eq!(state.min_distance(4), Some(3));
        assert_eq!(state.accepting_distance(4, 2), None);
        assert_eq!(state.accepting_distance(4, 3), Some(3));

        let only_flagged = {
            let mut s = State::new();
            s.insert(FlaggedPosition::new_flagged(4, 1));
            s
        };
        assert_eq!(only_flagged.min_distance(4), None);
    }

    #[test]
    fn test_transition_prunes_dead_state() {
        // n = 0 and a mismatching character: nothing survives.
        let state: State<SimplePosition> = State::initial();
        assert_eq!(state.transition::<StandardModel>(&[false], 0), None);

        let next = state
            .transition::<StandardModel>(&[true], 0)
            .expect("exact match advances");
        assert_eq!(next.positions(), &[SimplePosition::new(1, 0)]);
    }
}
