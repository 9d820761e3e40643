//! Word Ladder
//!
//! A word-ladder puzzle engine: move validation, scoring, and BFS
//! shortest-path solving over the one-letter-substitution word graph.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::{Dictionary, Word};
//! use word_ladder::solver::shortest_path;
//!
//! let corpus: Dictionary = ["cord", "card", "ward", "warm"]
//!     .iter()
//!     .map(|&w| Word::new(w).unwrap())
//!     .collect();
//!
//! let start = Word::new("cold").unwrap();
//! let target = Word::new("warm").unwrap();
//!
//! let path = shortest_path(&start, &target, &corpus);
//! assert!(path.found());
//! println!("{path}"); // cold -> cord -> card -> ward -> warm
//! ```

// Core domain types
pub mod core;

// Shortest-path search
pub mod solver;

// Puzzle sessions and rules
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
