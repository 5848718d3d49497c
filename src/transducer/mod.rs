//! Levenshtein transducer for approximate string matching.
//!
//! A search walks the dictionary DAWG depth-first while stepping a
//! parametrised Levenshtein automaton alongside it. The automaton is never
//! built up front: each dictionary edge yields a characteristic vector, which
//! maps the current automaton state to its successor through the elementary
//! transitions of the configured [`Algorithm`]. Paths whose state empties out
//! are pruned.

pub mod algorithm;
pub mod builder;
pub mod matches;
pub mod merge_and_split;
pub mod position;
pub mod standard;
pub mod state;
pub mod transition;
pub mod transposition;

pub use algorithm::Algorithm;
pub use builder::{TransducerBuilder, TransducerConfig};
pub use matches::{Candidate, Match};
pub use merge_and_split::MergeAndSplitModel;
pub use position::{FlaggedPosition, Position, SimplePosition};
pub use standard::StandardModel;
pub use state::State;
pub use transition::{characteristic_vector, fold_case, EditModel};
pub use transposition::TranspositionModel;

use crate::dictionary::{Dawg, NodeId};
use matches::MatchCollector;
use std::fmt;
use tracing::trace;
use transition::CharacteristicVector;

type SearchFn = fn(&Dawg, &TransducerConfig, &str, usize) -> Vec<Match>;

/// Fuzzy matcher over a fixed dictionary.
///
/// Immutable once built; clones share the dictionary, and searches from
/// several threads need no synchronization.
///
/// # Example
///
/// ```rust
/// use levdawg::prelude::*;
///
/// let transducer = Transducer::builder()
///     .words(["cat", "cats", "bat", "bad", "cot"])
///     .build()?;
///
/// let found: Vec<String> = transducer
///     .search("cat", 1)
///     .into_iter()
///     .map(|m| m.to_string())
///     .collect();
/// assert_eq!(found, ["cat (0)", "bat (1)", "cats (1)", "cot (1)"]);
/// # Ok::<(), levdawg::ConfigurationError>(())
/// ```
#[derive(Clone)]
pub struct Transducer {
    dawg: Dawg,
    config: TransducerConfig,
    search_fn: SearchFn,
}

impl Transducer {
    /// Start configuring a transducer.
    pub fn builder() -> TransducerBuilder {
        TransducerBuilder::new()
    }

    /// Create a transducer over `dawg` with the given options.
    ///
    /// The edit model is selected here, once.
    pub fn new(dawg: Dawg, config: TransducerConfig) -> Self {
        let search_fn: SearchFn = match config.algorithm {
            Algorithm::Standard => search_with::<StandardModel>,
            Algorithm::Transposition => search_with::<TranspositionModel>,
            Algorithm::MergeAndSplit => search_with::<MergeAndSplitModel>,
        };
        Transducer {
            dawg,
            config,
            search_fn,
        }
    }

    /// The dictionary being searched.
    pub fn dawg(&self) -> &Dawg {
        &self.dawg
    }

    /// The options this transducer was built with.
    pub fn config(&self) -> &TransducerConfig {
        &self.config
    }

    /// The edit-distance model.
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    /// Every dictionary word within `max_distance` edits of `term`.
    pub fn search(&self, term: &str, max_distance: usize) -> Vec<Match> {
        (self.search_fn)(&self.dawg, &self.config, term, max_distance)
    }

    /// The search as a standalone function, detached from `self`.
    pub fn searcher(&self) -> impl Fn(&str, usize) -> Vec<Match> + Send + Sync + 'static {
        let transducer = self.clone();
        move |term: &str, max_distance: usize| transducer.search(term, max_distance)
    }
}

impl fmt::Debug for Transducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transducer")
            .field("config", &self.config)
            .field("words", &self.dawg.len())
            .field("nodes", &self.dawg.node_count())
            .finish()
    }
}

fn search_with<M: EditModel>(
    dawg: &Dawg,
    config: &TransducerConfig,
    term: &str,
    max_distance: usize,
) -> Vec<Match> {
    let fold = config.case_insensitive;
    let query: Vec<char> = if fold {
        term.chars().map(fold_case).collect()
    } else {
        term.chars().collect()
    };
    let query_length = query.len();
    // No edit distance exceeds the longer of the two words.
    let max_distance = max_distance.min(query_length.max(dawg.max_word_length()));
    let window = 2 * max_distance + 1;

    let mut collector =
        MatchCollector::new(config.sort_matches, config.include_distance, config.case_insensitive);

    if dawg.root().is_final() && query_length <= max_distance {
        collector.push(String::new(), query_length);
    }

    let mut vector = CharacteristicVector::new();
    let mut stack: Vec<(String, NodeId, State<M::Position>)> =
        vec![(String::new(), NodeId::ROOT, State::initial())];

    while let Some((path, node, state)) = stack.pop() {
        let Some(offset) = state.head().map(Position::offset) else {
            continue;
        };
        let k = window.min(query_length.saturating_sub(offset));

        for &(label, child) in dawg.node(node).edges() {
            let x = if fold { fold_case(label) } else { label };
            characteristic_vector(x, &query, k, offset, &mut vector);

            let Some(next) = state.transition::<M>(&vector, max_distance) else {
                continue;
            };

            let mut word = path.clone();
            word.push(label);

            if dawg.node(child).is_final() {
                if let Some(distance) = next.accepting_distance(query_length, max_distance) {
                    trace!(word = %word, distance, state = %next, "match");
                    collector.push(word.clone(), distance);
                }
            }
            stack.push((word, child, next));
        }
    }

    trace!(term, max_distance, matches = collector.len(), "search finished");
    collector.into_matches()
}
