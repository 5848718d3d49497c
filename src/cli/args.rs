//! CLI argument definitions

use crate::transducer::Algorithm;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "levdawg")]
#[command(about = "Fuzzy string matching over a minimal DAWG with Levenshtein automata")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query a word list for fuzzy matches
    Query {
        /// Query term
        term: String,

        /// Word list, one word per line
        #[arg(short, long)]
        dict: PathBuf,

        /// Maximum edit distance
        #[arg(short = 'm', long, default_value = "2")]
        max_distance: usize,

        /// Levenshtein algorithm
        #[arg(short, long, default_value = "standard")]
        algorithm: Algorithm,

        /// Compare characters exactly instead of folding case
        #[arg(long)]
        case_sensitive: bool,

        /// Report matches in discovery order
        #[arg(long)]
        unsorted: bool,

        /// Show distances in query results
        #[arg(short = 's', long)]
        show_distances: bool,

        /// Result limit
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show word and node counts of a word list
    Info {
        /// Word list, one word per line
        #[arg(short, long)]
        dict: PathBuf,
    },

    /// Compute the edit distance between two strings
    Distance {
        /// First string
        source: String,

        /// Second string
        target: String,

        /// Levenshtein algorithm
        #[arg(short, long, default_value = "standard")]
        algorithm: Algorithm,
    },
}
