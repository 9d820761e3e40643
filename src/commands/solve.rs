//! One-shot shortest-path query
//!
//! Solves a start/target pair against a word list and reports the ladder.

use crate::core::{Dictionary, Word};
use crate::solver::{Ladder, shortest_path};
use crate::wordlists::loader::filter_by_length;
use std::time::{Duration, Instant};

/// Configuration for a solve run
pub struct SolveConfig {
    pub start: String,
    pub target: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, target: String) -> Self {
        Self { start, target }
    }
}

/// Result of a solve run
pub struct SolveResult {
    pub start: String,
    pub target: String,
    pub ladder: Ladder,
    pub corpus_size: usize,
    pub duration: Duration,
}

/// Find the shortest ladder between two words
///
/// The corpus is filtered to the start word's length before searching;
/// words of other lengths can never appear in the ladder anyway.
///
/// # Errors
///
/// Returns an error if either word fails validation or the two words have
/// different lengths. "No ladder exists" is not an error: it comes back as
/// an empty ladder in the result.
pub fn solve_pair(config: &SolveConfig, words: &[Word]) -> Result<SolveResult, String> {
    let start = Word::new(&config.start).map_err(|e| format!("Invalid start word: {e}"))?;
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    if start.len() != target.len() {
        return Err("Start and target words must be the same length".to_string());
    }

    let corpus: Dictionary = filter_by_length(words, start.len()).into_iter().collect();

    let begun = Instant::now();
    let ladder = shortest_path(&start, &target, &corpus);
    let duration = begun.elapsed();

    Ok(SolveResult {
        start: start.text().to_string(),
        target: target.text().to_string(),
        ladder,
        corpus_size: corpus.len(),
        duration,
    })
}
