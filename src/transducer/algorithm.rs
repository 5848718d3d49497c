//! Levenshtein distance algorithm variants.

use crate::error::ConfigurationError;
use tracing::warn;

/// Edit-distance model used by a transducer.
///
/// Each variant pairs a position shape with its own transition table and
/// subsumption relation (see [`EditModel`](super::transition::EditModel)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Standard Levenshtein distance.
    ///
    /// Supports three edit operations:
    /// - Insert: add a character
    /// - Delete: remove a character
    /// - Substitute: replace one character with another
    #[default]
    Standard,

    /// Standard operations plus swapping two adjacent characters.
    ///
    /// Distances agree with optimal string alignment: a transposed pair is
    /// never edited again.
    Transposition,

    /// Standard operations plus merge and split.
    ///
    /// - Merge: two characters of the query collapse into one
    /// - Split: one character of the query expands into two
    ///
    /// Typical of OCR errors (`m` read as `rn`).
    MergeAndSplit,
}

impl Algorithm {
    /// All variants, in declaration order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Standard,
        Algorithm::Transposition,
        Algorithm::MergeAndSplit,
    ];

    /// Configuration name of this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Standard => "standard",
            Algorithm::Transposition => "transposition",
            Algorithm::MergeAndSplit => "merge_and_split",
        }
    }

    /// Parse a name, falling back to [`Algorithm::Standard`] for anything
    /// unrecognized.
    ///
    /// Prefer [`str::parse`], which rejects unknown names.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(name, fallback = "standard", "unrecognized algorithm");
            Algorithm::Standard
        })
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Algorithm::Standard),
            "transposition" | "trans" => Ok(Algorithm::Transposition),
            "merge_and_split" | "merge-and-split" | "mergesplit" | "merge" => {
                Ok(Algorithm::MergeAndSplit)
            }
            _ => Err(ConfigurationError::UnknownAlgorithm(s.to_owned())),
        }
    }
}
