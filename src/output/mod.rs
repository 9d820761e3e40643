//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_solve_result};
