//! Subwords - CLI
//!
//! Console word game with offline dictionary generation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use subwords::{
    commands::{dictionary_stats, run_play},
    dictionary::{Dictionary, load_from_file},
    game::{GameConfig, MINIMAL_AMOUNT, MINIMAL_LENGTH},
    output::print_stats_result,
};

#[derive(Parser)]
#[command(
    name = "subwords",
    about = "Find the subwords hidden in a secret word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary JSON file (default: built-in dictionary)
    #[arg(short, long, global = true, env = "SUBWORDS_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Subwords must be longer than this to count towards the target
    #[arg(short = 'l', long, global = true, default_value_t = MINIMAL_LENGTH)]
    min_length: usize,

    /// Maximum number of subwords to find
    #[arg(short, long, global = true, default_value_t = MINIMAL_AMOUNT)]
    amount: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play {
        /// Seed for choosing the secret word
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate a dictionary by looking up words online
    Generate {
        /// Word list with one word per line
        #[arg(short, long, default_value = "en_words_1000.txt")]
        words: PathBuf,

        /// Output dictionary file
        #[arg(short, long, default_value = "user_dict.json")]
        output: PathBuf,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show statistics about a dictionary
    Stats,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.min_length, cli.amount);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => {
            let dictionary = load_dictionary(cli.dictionary.as_deref())?;
            run_play_command(&config, &dictionary, seed)
        }
        Commands::Generate {
            words,
            output,
            quiet,
        } => run_generate_command(words, cli.min_length, output, quiet),
        Commands::Stats => {
            let dictionary = load_dictionary(cli.dictionary.as_deref())?;
            print_stats_result(&dictionary_stats(&dictionary, &config));
            Ok(())
        }
    }
}

/// Load the dictionary given on the command line, or the built-in one
fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load dictionary from '{}'", path.display())),
        None => Dictionary::embedded().context("Built-in dictionary is malformed"),
    }
}

fn run_play_command(config: &GameConfig, dictionary: &Dictionary, seed: Option<u64>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let result = match seed {
        Some(seed) => run_play(
            config,
            dictionary,
            &mut StdRng::seed_from_u64(seed),
            &mut input,
            &mut output,
        )?,
        None => run_play(config, dictionary, &mut rand::rng(), &mut input, &mut output)?,
    };

    log::info!(
        "game over: {:?} with {} of {} subwords",
        result.state,
        result.guessed.len(),
        result.target
    );
    Ok(())
}

#[cfg(feature = "scrape")]
fn run_generate_command(
    words: PathBuf,
    min_length: usize,
    output: PathBuf,
    quiet: bool,
) -> Result<()> {
    use subwords::commands::{GenerateConfig, WordFinder, run_generate};
    use subwords::output::print_generate_summary;

    let config = GenerateConfig {
        words_path: words,
        min_length,
        output,
    };
    let summary = run_generate(&config, &WordFinder::new(), !quiet)?;
    print_generate_summary(&summary);
    Ok(())
}

#[cfg(not(feature = "scrape"))]
fn run_generate_command(
    _words: PathBuf,
    _min_length: usize,
    _output: PathBuf,
    _quiet: bool,
) -> Result<()> {
    anyhow::bail!("dictionary generation requires the `scrape` feature")
}
