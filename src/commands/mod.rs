//! Command implementations
//!
//! Contains the implementation logic for all CLI commands.

mod benchmark;
mod play;
mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::run_play;
pub use solve::{SolveConfig, SolveResult, solve_pair};
