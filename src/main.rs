use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use gridseek::cli::output::{self, OutputFormat};
use gridseek::grid::{Alphabet, GridGenerator};
use gridseek::{search, Config};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "gridseek")]
#[command(version, about = "A blazingly fast word search puzzle CLI", long_about = None)]
struct Cli {
    /// Words to find in the generated grid
    #[arg(value_name = "WORDS")]
    words: Vec<String>,

    /// Number of grid rows
    #[arg(short, long)]
    rows: Option<usize>,

    /// Number of grid columns
    #[arg(short, long)]
    columns: Option<usize>,

    /// Seed for reproducible grid generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Characters to draw grid letters from (default: A-Z)
    #[arg(short, long)]
    alphabet: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if a word is not found
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "gridseek", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.alphabet.clone())?;

    // Validate grid dimensions
    let (rows, columns) = match (cli.rows, cli.columns) {
        (Some(rows), Some(columns)) => (rows, columns),
        _ => anyhow::bail!("Both --rows and --columns are required. Use --help for usage information."),
    };

    if rows > config.max_rows || columns > config.max_columns {
        anyhow::bail!(
            "Rows and columns should not exceed {}x{}",
            config.max_rows,
            config.max_columns
        );
    }

    // Build the puzzle grid
    let alphabet: Alphabet = config.alphabet.parse()?;
    let generator = GridGenerator::new(alphabet);

    let grid = match cli.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generator.generate_with(&mut rng, rows, columns)?
        }
        None => generator.generate(rows, columns)?,
    };

    let colored_output = !cli.no_color;

    // Search each requested word against the grid
    let mut results = Vec::new();
    for word in &cli.words {
        let word = word.trim();
        if word.is_empty() {
            eprintln!("Warning: Ignoring empty search word");
            continue;
        }

        let result = search(&grid, word)?;
        results.push((word.to_string(), result));
    }

    match cli.format {
        OutputFormat::Json => output::print_json(&grid, &results),
        OutputFormat::Text => {
            for (word, result) in &results {
                output::print_word_matches(word, result, colored_output);
            }

            let all_matches: Vec<_> = results
                .iter()
                .flat_map(|(_, result)| result.matches.iter().copied())
                .collect();
            output::print_grid(&grid, &all_matches, colored_output);

            if !results.is_empty() {
                let missing: Vec<String> = results
                    .iter()
                    .filter(|(_, result)| !result.found)
                    .map(|(word, _)| word.clone())
                    .collect();
                output::print_search_summary(
                    all_matches.len(),
                    &missing,
                    results.len(),
                    colored_output,
                );
            }
        }
    }

    // Exit with appropriate code
    let missing_words = results.iter().filter(|(_, result)| !result.found).count();
    if missing_words > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}
