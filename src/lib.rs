//! # levdawg
//!
//! Approximate string matching against a dictionary using Levenshtein
//! automata, based on:
//!
//! > Schulz, Klaus U., and Stoyan Mihov. "Fast string correction with
//! > Levenshtein automata." International Journal on Document Analysis and
//! > Recognition 5.1 (2002): 67-85.
//!
//! The dictionary is compiled into a minimal acyclic automaton (a DAWG). A
//! search walks that automaton while lazily stepping the Levenshtein
//! automaton for the query, so only dictionary prefixes that can still lead
//! to a match within the distance bound are ever visited.
//!
//! Three edit-distance models are supported: standard (insert, delete,
//! substitute), with adjacent transpositions, and with merges and splits.
//!
//! ## Example
//!
//! ```rust
//! use levdawg::prelude::*;
//!
//! let transducer = TransducerBuilder::new()
//!     .words(["cat", "cats", "bat", "bad", "cot"])
//!     .build()?;
//!
//! for found in transducer.search("cat", 1) {
//!     println!("{}", found);
//! }
//! # Ok::<(), levdawg::ConfigurationError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dictionary;
pub mod distance;
pub mod error;
pub mod transducer;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use error::ConfigurationError;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dictionary::{Dawg, DawgBuilder, DictionarySource, DictionaryType};
    pub use crate::distance::edit_distance;
    pub use crate::error::ConfigurationError;
    pub use crate::transducer::{
        Algorithm, Candidate, Match, Transducer, TransducerBuilder, TransducerConfig,
    };
}
