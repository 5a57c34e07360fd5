use crate::{Grid, Match, SearchResult};
use colored::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonMatch {
    word: String,
    row: usize,
    column: usize,
    direction: String,
    length: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    rows: usize,
    columns: usize,
    grid: Vec<String>,
    words_searched: usize,
    total_matches: usize,
    matches: Vec<JsonMatch>,
}

/// List one word's matches, teacher-style: a header line, then one indented
/// line per match.
pub fn print_word_matches(word: &str, result: &SearchResult, colored_output: bool) {
    if !result.found {
        if colored_output {
            println!("{} \"{}\" not found", "✗".red().bold(), word.red().bold());
        } else {
            println!("✗ \"{}\" not found", word);
        }
        return;
    }

    let match_word = if result.matches.len() == 1 {
        "match"
    } else {
        "matches"
    };

    if colored_output {
        println!(
            "{} ({} {})",
            word.bold().underline(),
            result.matches.len(),
            match_word
        );
    } else {
        println!("{} ({} {})", word, result.matches.len(), match_word);
    }

    for m in &result.matches {
        let position = format!("{}:{}", m.row, m.col);
        if colored_output {
            println!("  {} {}", position.blue().bold(), m.direction.to_string().green());
        } else {
            println!("  {} {}", position, m.direction);
        }
    }
}

/// Render the grid, painting every cell covered by a match yellow. Cells
/// are located by walking each match's direction unit step from its anchor.
pub fn print_grid(grid: &Grid, matches: &[Match], colored_output: bool) {
    let highlighted = highlighted_cells(matches);

    println!();
    for (row, cells) in grid.iter_rows().enumerate() {
        let rendered: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, &ch)| {
                if colored_output && highlighted.contains(&(row, col)) {
                    ch.to_string().black().on_yellow().to_string()
                } else {
                    ch.to_string()
                }
            })
            .collect();
        println!("{}", rendered.join(" "));
    }
}

fn highlighted_cells(matches: &[Match]) -> HashSet<(usize, usize)> {
    let mut cells = HashSet::new();
    for m in matches {
        let (dr, dc) = m.direction.step();
        for k in 0..m.length as isize {
            let row = (m.row as isize + dr * k) as usize;
            let col = (m.col as isize + dc * k) as usize;
            cells.insert((row, col));
        }
    }
    cells
}

pub fn print_search_summary(
    total_matches: usize,
    missing: &[String],
    words_searched: usize,
    colored_output: bool,
) {
    println!();
    if missing.is_empty() {
        let match_word = if total_matches == 1 { "match" } else { "matches" };
        let word_word = if words_searched == 1 { "word" } else { "words" };
        if colored_output {
            println!(
                "{} {} {} found for {} {}",
                "✓".green().bold(),
                total_matches.to_string().green().bold(),
                match_word,
                words_searched,
                word_word
            );
        } else {
            println!(
                "✓ {} {} found for {} {}",
                total_matches, match_word, words_searched, word_word
            );
        }
    } else {
        let word_word = if missing.len() == 1 { "word" } else { "words" };
        if colored_output {
            println!(
                "{} {} {} not found: {}",
                "✗".red().bold(),
                missing.len().to_string().red().bold(),
                word_word,
                missing.join(", ")
            );
        } else {
            println!("✗ {} {} not found: {}", missing.len(), word_word, missing.join(", "));
        }
    }
}

/// Emit the whole run as a single JSON document.
pub fn print_json(grid: &Grid, results: &[(String, SearchResult)]) {
    let matches: Vec<JsonMatch> = results
        .iter()
        .flat_map(|(word, result)| {
            result.matches.iter().map(move |m| JsonMatch {
                word: word.clone(),
                row: m.row,
                column: m.col,
                direction: m.direction.to_string(),
                length: m.length,
            })
        })
        .collect();

    let output = JsonOutput {
        rows: grid.rows(),
        columns: grid.columns(),
        grid: grid.iter_rows().map(|row| row.iter().collect()).collect(),
        words_searched: results.len(),
        total_matches: matches.len(),
        matches,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
