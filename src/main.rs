//! Word Ladder - CLI
//!
//! Play word-ladder puzzles, query shortest ladders, and benchmark the
//! search engine.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_ladder::{
    commands::{SolveConfig, run_benchmark, run_play, solve_pair},
    core::Word,
    output::{print_benchmark_result, print_solve_result},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word-ladder puzzle engine with BFS shortest-path solving",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Puzzle word length
    #[arg(short = 'l', long, global = true, default_value_t = 4)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play,

    /// Find the shortest ladder between two words
    Solve {
        /// The start word
        start: String,

        /// The target word
        target: String,
    },

    /// Benchmark shortest-path search on random pairs
    Benchmark {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Load the word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use word_ladder::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&words, cli.length).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { start, target } => {
            let config = SolveConfig::new(start, target);
            let result = solve_pair(&config, &words).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Solving {count} random pairs...");
            let result = run_benchmark(&words, cli.length, count);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
