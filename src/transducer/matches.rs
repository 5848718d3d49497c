//! Search results and their collection.

use super::transition::fold_case;
use std::fmt;

/// A dictionary word together with its distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Candidate {
    /// The matched dictionary word
    pub term: String,
    /// Edit distance from the query term
    pub distance: usize,
}

impl Candidate {
    /// Create a candidate.
    pub fn new(term: impl Into<String>, distance: usize) -> Self {
        Candidate {
            term: term.into(),
            distance,
        }
    }
}

/// One search result.
///
/// Whether results carry their distance is decided by the transducer's
/// `include_distance` option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Match {
    /// Bare matched word.
    Term(String),
    /// Matched word annotated with its distance.
    Candidate(Candidate),
}

impl Match {
    /// The matched word.
    pub fn term(&self) -> &str {
        match self {
            Match::Term(term) => term,
            Match::Candidate(candidate) => &candidate.term,
        }
    }

    /// The distance, when the match carries one.
    pub fn distance(&self) -> Option<usize> {
        match self {
            Match::Term(_) => None,
            Match::Candidate(candidate) => Some(candidate.distance),
        }
    }

    /// Take the matched word.
    pub fn into_term(self) -> String {
        match self {
            Match::Term(term) => term,
            Match::Candidate(candidate) => candidate.term,
        }
    }
}

impl From<Candidate> for Match {
    fn from(candidate: Candidate) -> Self {
        Match::Candidate(candidate)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Match::Term(term) => f.write_str(term),
            Match::Candidate(Candidate { term, distance }) => write!(f, "{} ({})", term, distance),
        }
    }
}

struct Entry {
    key: Option<String>,
    term: String,
    distance: usize,
}

impl Entry {
    fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.term)
    }
}

/// Accumulates matches as the traversal reports them.
///
/// Sorted collection inserts by binary search on `(distance, word)`, with the
/// word passed through [`fold_case`] when folding case, exactly as matching
/// compares it. Equal keys keep discovery order.
pub(crate) struct MatchCollector {
    entries: Vec<Entry>,
    sort_matches: bool,
    include_distance: bool,
    case_insensitive: bool,
}

impl MatchCollector {
    pub(crate) fn new(sort_matches: bool, include_distance: bool, case_insensitive: bool) -> Self {
        MatchCollector {
            entries: Vec::new(),
            sort_matches,
            include_distance,
            case_insensitive,
        }
    }

    pub(crate) fn push(&mut self, term: String, distance: usize) {
        let key = (self.sort_matches && self.case_insensitive)
            .then(|| term.chars().map(fold_case).collect());
        let entry = Entry {
            key,
            term,
            distance,
        };

        if self.sort_matches {
            let idx = self
                .entries
                .partition_point(|e| (e.distance, e.key()) <= (entry.distance, entry.key()));
            self.entries.insert(idx, entry);
        } else {
            self.entries.push(entry);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn into_matches(self) -> Vec<Match> {
        let include_distance = self.include_distance;
        self.entries
            .into_iter()
            .map(|Entry { term, distance, .. }| {
                if include_distance {
                    Match::Candidate(Candidate { term, distance })
                } else {
                    Match::Term(term)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(Match::term).collect()
    }

    #[test]
    fn test_unsorted_keeps_discovery_order() {
        let mut collector = MatchCollector::new(false, true, true);
        collector.push("zeta".into(), 0);
        collector.push("alpha".into(), 2);
        collector.push("beta".into(), 1);

        let matches = collector.into_matches();
        assert_eq!(terms(&matches), vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn test_sorted_by_distance_then_word() {
        let mut collector = MatchCollector::new(true, true, false);
        collector.push("cot".into(), 1);
        collector.push("cat".into(), 0);
        collector.push("bat".into(), 1);
        collector.push("cats".into(), 1);

        let matches = collector.into_matches();
        assert_eq!(
            matches,
            vec![
                Candidate::new("cat", 0).into(),
                Candidate::new("bat", 1).into(),
                Candidate::new("cats", 1).into(),
                Candidate::new("cot", 1).into(),
            ]
        );
    }

    #[test]
    fn test_folded_order_agrees_with_matching() {
        // 'İ' lowercases to two characters, so matching leaves it unchanged
        // and it sorts after every ASCII letter.
        let mut collector = MatchCollector::new(true, true, true);
        collector.push("İb".into(), 1);
        collector.push("j".into(), 1);
        assert_eq!(terms(&collector.into_matches()), vec!["j", "İb"]);
    }

    #[test]
    fn test_case_sensitive_order_puts_uppercase_first() {
        let mut collector = MatchCollector::new(true, false, false);
        collector.push("bat".into(), 0);
        collector.push("Cat".into(), 0);
        assert_eq!(terms(&collector.into_matches()), vec!["Cat", "bat"]);
    }

    #[test]
    fn test_case_insensitive_ties_are_stable() {
        let mut collector = MatchCollector::new(true, false, true);
        collector.push("bat".into(), 0);
        collector.push("Cat".into(), 0);
        collector.push("Bat".into(), 0);

        let matches = collector.into_matches();
        assert_eq!(terms(&matches), vec!["bat", "Bat", "Cat"]);
        assert!(matches.iter().all(|m| m.distance().is_none()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Match::Term("cat".into()).to_string(), "cat");
        assert_eq!(Match::from(Candidate::new("cat", 1)).to_string(), "cat (1)");
    }
}
