//! Benchmark command
//!
//! Solves many random start/target pairs and reports search statistics.

use crate::core::{Dictionary, Word};
use crate::solver::shortest_path;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub solved: usize,
    pub no_path: usize,
    pub average_steps: f64,
    pub min_steps: usize,
    pub max_steps: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Solve `count` random pairs drawn from the corpus
///
/// Pairs are drawn up front (sequentially, so the draw stays reproducible
/// per RNG state), then solved in parallel: each search is a pure function
/// over the shared read-only corpus.
#[must_use]
pub fn run_benchmark(words: &[Word], length: usize, count: usize) -> BenchmarkResult {
    let corpus: Dictionary = words.iter().filter(|w| w.len() == length).cloned().collect();

    let mut rng = rand::rng();
    let pool = corpus.words();
    let pairs: Vec<(Word, Word)> = (0..count)
        .filter_map(|_| {
            let start = pool.choose(&mut rng)?;
            let target = pool.choose(&mut rng)?;
            Some((start.clone(), target.clone()))
        })
        .collect();

    if pairs.is_empty() {
        // No words of the requested length to draw from; report zeroes
        // instead of dividing by an (almost) zero duration
        return BenchmarkResult {
            total_pairs: 0,
            solved: 0,
            no_path: 0,
            average_steps: 0.0,
            min_steps: 0,
            max_steps: 0,
            distribution: HashMap::new(),
            duration: Duration::ZERO,
            pairs_per_second: 0.0,
        };
    }

    let pb = ProgressBar::new(pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start_time = Instant::now();

    let step_counts: Vec<Option<usize>> = pairs
        .par_iter()
        .map(|(start, target)| {
            let path = shortest_path(start, target, &corpus);
            pb.inc(1);
            path.found().then_some(path.steps())
        })
        .collect();

    pb.finish_and_clear();
    let duration = start_time.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut solved = 0;
    let mut total_steps = 0;
    let mut min_steps = usize::MAX;
    let mut max_steps = 0;

    for steps in step_counts.into_iter().flatten() {
        solved += 1;
        total_steps += steps;
        min_steps = min_steps.min(steps);
        max_steps = max_steps.max(steps);
        *distribution.entry(steps).or_insert(0) += 1;
    }
    let no_path = pairs.len() - solved;

    let total_pairs = pairs.len();
    BenchmarkResult {
        total_pairs,
        solved,
        no_path,
        average_steps: if solved > 0 {
            total_steps as f64 / solved as f64
        } else {
            0.0
        },
        min_steps: if solved > 0 { min_steps } else { 0 },
        max_steps,
        distribution,
        duration,
        pairs_per_second: total_pairs as f64 / duration.as_secs_f64(),
    }
}
