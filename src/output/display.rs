//! Display functions for command results

use super::formatters::{create_progress_bar, format_ladder};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of a solve run
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.to_uppercase().bright_yellow().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\nDictionary: {} words", result.corpus_size);
    println!("Search:     {:.2}ms", result.duration.as_secs_f64() * 1000.0);

    println!();
    if result.ladder.found() {
        println!(
            "{}",
            format!("✅ Shortest ladder has {} steps:", result.ladder.steps())
                .green()
                .bold()
        );
        println!("   {}", format_ladder(&result.ladder).bright_cyan());
    } else {
        println!("{}", "❌ No path found".red().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    if result.total_pairs == 0 {
        println!(
            "{}",
            "No pairs to solve: the word list has no words of the requested length"
                .yellow()
                .bold()
        );
        return;
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs solved:     {} / {}", result.solved, result.total_pairs);
    println!(
        "   No path:          {}",
        format!("{}", result.no_path).yellow()
    );
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_steps)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Shortest ladder:  {}",
        format!("{}", result.min_steps).green()
    );
    println!(
        "   Longest ladder:   {}",
        format!("{}", result.max_steps).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Step distribution:".bright_cyan().bold());
    let mut step_counts: Vec<_> = result.distribution.iter().collect();
    step_counts.sort_unstable();
    for (steps, &count) in step_counts {
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {steps:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
