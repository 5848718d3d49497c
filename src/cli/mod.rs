//! CLI interface for levdawg
//!
//! Loads newline-delimited word lists and runs queries against them.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{execute, load_word_list};
