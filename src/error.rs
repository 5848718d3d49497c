//! Error types.

use crate::dictionary::DictionaryType;

/// Rejected transducer configuration.
///
/// Raised by [`TransducerBuilder::build`](crate::transducer::TransducerBuilder::build)
/// and by the `FromStr` implementations of the configuration enums. Searching
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No dictionary was provided.
    #[error("No dictionary was specified. Use .words(), .dawg() or .dictionary() to set it.")]
    MissingDictionary,

    /// The declared dictionary type disagrees with the supplied dictionary.
    #[error("Dictionary type `{declared}` was declared, but a `{supplied}` dictionary was supplied")]
    DictionaryTypeMismatch {
        /// Type set through `.dictionary_type()`.
        declared: DictionaryType,
        /// Type of the dictionary actually supplied.
        supplied: DictionaryType,
    },

    /// Unrecognized algorithm name.
    #[error("Unknown algorithm: {0}. Valid options: standard, transposition, merge_and_split")]
    UnknownAlgorithm(String),

    /// Unrecognized dictionary type name.
    #[error("Unknown dictionary type: {0}. Valid options: list, dawg")]
    UnknownDictionaryType(String),
}
