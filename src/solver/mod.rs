//! Shortest-path search over the word-adjacency graph

mod bfs;
mod ladder;

pub use bfs::shortest_path;
pub use ladder::Ladder;
