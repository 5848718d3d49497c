//! Builder pattern for creating Transducer instances.
//!
//! The `TransducerBuilder` provides a fluent API for constructing
//! `Transducer` instances; all validation happens in [`TransducerBuilder::build`].

use crate::dictionary::{Dawg, DictionarySource, DictionaryType};
use crate::error::ConfigurationError;
use crate::transducer::{Algorithm, Transducer};
use tracing::{debug, warn};

/// Options that shape a transducer, minus the dictionary itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct TransducerConfig {
    /// The caller asserts the word list is already sorted.
    pub sorted: bool,
    /// Shape of the supplied dictionary.
    pub dictionary_type: DictionaryType,
    /// Edit-distance model.
    pub algorithm: Algorithm,
    /// Order results by distance, then word.
    pub sort_matches: bool,
    /// Annotate results with their distance.
    pub include_distance: bool,
    /// Ignore case when comparing characters and ordering results.
    pub case_insensitive: bool,
}

impl Default for TransducerConfig {
    fn default() -> Self {
        TransducerConfig {
            sorted: false,
            dictionary_type: DictionaryType::List,
            algorithm: Algorithm::Standard,
            sort_matches: true,
            include_distance: true,
            case_insensitive: true,
        }
    }
}

/// Builder for constructing a `Transducer` with a fluent API.
///
/// # Example
///
/// ```rust
/// use levdawg::prelude::*;
///
/// let transducer = TransducerBuilder::new()
///     .words(["cat", "cats", "bat", "bad", "cot"])
///     .algorithm(Algorithm::Transposition)
///     .build()?;
///
/// assert_eq!(transducer.search("cta", 1)[0].term(), "cat");
/// # Ok::<(), levdawg::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransducerBuilder {
    dictionary: Option<DictionarySource>,
    dictionary_type: Option<DictionaryType>,
    config: TransducerConfig,
}

impl TransducerBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dictionary from any supported source.
    #[must_use]
    pub fn dictionary(mut self, dictionary: impl Into<DictionarySource>) -> Self {
        self.dictionary = Some(dictionary.into());
        self
    }

    /// Use a word list; it is compiled into a DAWG by [`build`](Self::build).
    #[must_use]
    pub fn words<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dictionary(DictionarySource::List(
            words.into_iter().map(Into::into).collect(),
        ))
    }

    /// Reuse a prebuilt DAWG.
    #[must_use]
    pub fn dawg(self, dawg: Dawg) -> Self {
        self.dictionary(DictionarySource::Dawg(dawg))
    }

    /// Declare the dictionary shape. When set, it must match the dictionary
    /// supplied; when left unset it is taken from the dictionary.
    #[must_use]
    pub fn dictionary_type(mut self, dictionary_type: DictionaryType) -> Self {
        self.dictionary_type = Some(dictionary_type);
        self
    }

    /// Assert that the word list is already sorted, skipping the sort.
    #[must_use]
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.config.sorted = sorted;
        self
    }

    /// Set the Levenshtein distance algorithm to use.
    #[must_use]
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Order results by `(distance, word)`.
    #[must_use]
    pub fn sort_matches(mut self, sort_matches: bool) -> Self {
        self.config.sort_matches = sort_matches;
        self
    }

    /// Return [`Match::Candidate`](super::Match::Candidate) instead of bare
    /// words.
    #[must_use]
    pub fn include_distance(mut self, include_distance: bool) -> Self {
        self.config.include_distance = include_distance;
        self
    }

    /// Fold case when matching and ordering.
    #[must_use]
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.config.case_insensitive = case_insensitive;
        self
    }

    /// Replace every option at once.
    ///
    /// A `dictionary_type` inside `config` is treated as declared.
    #[must_use]
    pub fn config(mut self, config: TransducerConfig) -> Self {
        self.dictionary_type = Some(config.dictionary_type);
        self.config = config;
        self
    }

    /// Build the `Transducer`.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::MissingDictionary`] if no dictionary was set
    /// - [`ConfigurationError::DictionaryTypeMismatch`] if a declared
    ///   dictionary type disagrees with the dictionary supplied
    pub fn build(self) -> Result<Transducer, ConfigurationError> {
        let source = self
            .dictionary
            .ok_or(ConfigurationError::MissingDictionary)?;

        let supplied = source.dictionary_type();
        if let Some(declared) = self.dictionary_type {
            if declared != supplied {
                return Err(ConfigurationError::DictionaryTypeMismatch { declared, supplied });
            }
        }

        let config = TransducerConfig {
            dictionary_type: supplied,
            ..self.config
        };

        let dawg = match source {
            DictionarySource::List(words) => compile_word_list(words, config.sorted),
            DictionarySource::Dawg(dawg) => dawg,
        };

        debug!(
            algorithm = %config.algorithm,
            dictionary_type = %config.dictionary_type,
            words = dawg.len(),
            sort_matches = config.sort_matches,
            include_distance = config.include_distance,
            case_insensitive = config.case_insensitive,
            "built transducer"
        );

        Ok(Transducer::new(dawg, config))
    }
}

fn compile_word_list(mut words: Vec<String>, sorted: bool) -> Dawg {
    if sorted {
        if words.windows(2).all(|pair| pair[0] <= pair[1]) {
            return Dawg::from_sorted(&words);
        }
        warn!(
            words = words.len(),
            "word list declared sorted is out of order; sorting it"
        );
    }
    words.sort_unstable();
    words.dedup();
    Dawg::from_sorted(&words)
}
