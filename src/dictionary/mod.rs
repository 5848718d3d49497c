//! Dictionary representation.
//!
//! The transducer walks a [`Dawg`]. Callers either hand over a prebuilt
//! automaton or a plain word list that is compiled into one at build time;
//! [`DictionarySource`] carries whichever of the two was supplied.

pub mod dawg;
pub mod node;

pub use dawg::{Dawg, DawgBuilder, Words};
pub use node::{GraphNode, NodeId, Signature};

use crate::error::ConfigurationError;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Shape of the dictionary handed to the transducer builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum DictionaryType {
    /// A sequence of words, compiled into a DAWG when the transducer is built.
    #[default]
    List,
    /// A prebuilt DAWG, reused as is.
    Dawg,
}

impl DictionaryType {
    /// Configuration name of this dictionary type.
    pub fn name(&self) -> &'static str {
        match self {
            DictionaryType::List => "list",
            DictionaryType::Dawg => "dawg",
        }
    }

    /// Parse a name, falling back to [`DictionaryType::List`] for anything
    /// unrecognized.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(name, fallback = "list", "unrecognized dictionary type");
            DictionaryType::List
        })
    }
}

impl fmt::Display for DictionaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DictionaryType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(DictionaryType::List),
            "dawg" => Ok(DictionaryType::Dawg),
            _ => Err(ConfigurationError::UnknownDictionaryType(s.to_owned())),
        }
    }
}

/// A dictionary as supplied by the caller.
#[derive(Debug, Clone)]
pub enum DictionarySource {
    /// Raw words, in any order unless declared sorted.
    List(Vec<String>),
    /// An already minimized automaton.
    Dawg(Dawg),
}

impl DictionarySource {
    /// Which [`DictionaryType`] this source is.
    pub fn dictionary_type(&self) -> DictionaryType {
        match self {
            DictionarySource::List(_) => DictionaryType::List,
            DictionarySource::Dawg(_) => DictionaryType::Dawg,
        }
    }
}

impl From<Dawg> for DictionarySource {
    fn from(dawg: Dawg) -> Self {
        DictionarySource::Dawg(dawg)
    }
}

impl From<Vec<String>> for DictionarySource {
    fn from(words: Vec<String>) -> Self {
        DictionarySource::List(words)
    }
}

impl From<Vec<&str>> for DictionarySource {
    fn from(words: Vec<&str>) -> Self {
        DictionarySource::List(words.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for DictionarySource {
    fn from(words: &[&str]) -> Self {
        DictionarySource::List(words.iter().map(|w| (*w).to_owned()).collect())
    }
}
