//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::BufRead;
use std::path::Path;

use crate::dictionary::Dawg;
use crate::distance::edit_distance;
use crate::transducer::{Algorithm, Transducer};

use super::args::Commands;

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Query {
            term,
            dict,
            max_distance,
            algorithm,
            case_sensitive,
            unsorted,
            show_distances,
            limit,
        } => cmd_query(
            &term,
            &dict,
            QueryOptions {
                max_distance,
                algorithm,
                case_sensitive,
                unsorted,
                show_distances,
                limit,
            },
        ),
        Commands::Info { dict } => cmd_info(&dict),
        Commands::Distance {
            source,
            target,
            algorithm,
        } => cmd_distance(&source, &target, algorithm),
    }
}

struct QueryOptions {
    max_distance: usize,
    algorithm: Algorithm,
    case_sensitive: bool,
    unsorted: bool,
    show_distances: bool,
    limit: Option<usize>,
}

/// Query command
fn cmd_query(term: &str, dict_path: &Path, options: QueryOptions) -> Result<()> {
    let words = load_word_list(dict_path)?;

    let transducer = Transducer::builder()
        .words(words)
        .algorithm(options.algorithm)
        .case_insensitive(!options.case_sensitive)
        .sort_matches(!options.unsorted)
        .build()?;

    let mut results = transducer.search(term, options.max_distance);

    if let Some(lim) = options.limit {
        results.truncate(lim);
    }

    if results.is_empty() {
        println!("{}", "No matches found".yellow());
    } else {
        for (i, result) in results.iter().enumerate() {
            match result.distance() {
                Some(distance) if options.show_distances => {
                    println!("   {}. {} (d={})", i + 1, result.term().green(), distance)
                }
                _ => println!("   {}. {}", i + 1, result.term().green()),
            }
        }
        println!();
        println!("{} match(es) found", results.len());
    }

    Ok(())
}

/// Info command
fn cmd_info(dict_path: &Path) -> Result<()> {
    let words = load_word_list(dict_path)?;
    let lines = words.len();
    let dawg = Dawg::from_words(words);

    println!("{}", "Dictionary Information".bold().underline());
    println!();
    println!("  Path:    {}", dict_path.display().to_string().cyan());
    println!("  Lines:   {}", lines);
    println!("  Words:   {}", dawg.len().to_string().green());
    println!("  Nodes:   {}", dawg.node_count().to_string().green());
    println!("  Edges:   {}", dawg.edge_count().to_string().green());
    if !dawg.is_empty() {
        let ratio = dawg.node_count() as f64 / dawg.len() as f64;
        println!("  Ratio:   {:.2} nodes/word", ratio);
    }
    println!();

    Ok(())
}

/// Distance command
fn cmd_distance(source: &str, target: &str, algorithm: Algorithm) -> Result<()> {
    let distance = edit_distance(source, target, algorithm);
    println!(
        "{} {} {} = {}",
        source.cyan(),
        "→".dimmed(),
        target.cyan(),
        distance.to_string().green().bold()
    );
    Ok(())
}

/// Load a plain text word list.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    read_word_list(std::io::BufReader::new(file))
        .with_context(|| format!("Failed to read word list: {}", path.display()))
}

fn read_word_list(reader: impl BufRead) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            words.push(trimmed.to_owned());
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_word_list_skips_comments_and_blanks() {
        let input = "# fruit\napple\n\n  pear  \n#skip\nfig\n";
        let words = read_word_list(input.as_bytes()).unwrap();
        assert_eq!(words, vec!["apple", "pear", "fig"]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_word_list(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}
