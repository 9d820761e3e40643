//! Core domain types
//!
//! Word representation, dictionaries, and the one-letter adjacency relation.

mod dictionary;
mod graph;
mod word;

pub use dictionary::Dictionary;
pub use graph::{is_adjacent, neighbors};
pub use word::{Word, WordError};
