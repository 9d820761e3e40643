//! Ladder path value
//!
//! The result of a shortest-path search: an ordered word sequence from
//! start to target, or the empty ladder when no path exists.

use crate::core::{Word, is_adjacent};
use std::fmt;

/// An ordered sequence of words forming a ladder
///
/// Produced fresh by each solver invocation. The empty ladder is the
/// proven "no path found" outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    /// The empty ladder (no path found)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Whether a path was found
    #[inline]
    #[must_use]
    pub fn found(&self) -> bool {
        !self.words.is_empty()
    }

    /// The words of the path, start first
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of edges in the path (one less than the word count)
    ///
    /// Zero both for a single-word ladder and for the empty ladder.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// Check that every consecutive pair is one letter apart
    #[must_use]
    pub fn is_valid_chain(&self) -> bool {
        self.words
            .windows(2)
            .all(|pair| is_adjacent(&pair[0], &pair[1]))
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for word in &self.words {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{word}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(texts: &[&str]) -> Ladder {
        Ladder::from_words(texts.iter().map(|&t| Word::new(t).unwrap()).collect())
    }

    #[test]
    fn empty_ladder_not_found() {
        let empty = Ladder::empty();
        assert!(!empty.found());
        assert_eq!(empty.steps(), 0);
        assert!(empty.words().is_empty());
    }

    #[test]
    fn single_word_ladder() {
        let single = ladder(&["bark"]);
        assert!(single.found());
        assert_eq!(single.steps(), 0);
    }

    #[test]
    fn steps_counts_edges() {
        let path = ladder(&["bark", "dark", "dart"]);
        assert_eq!(path.steps(), 2);
    }

    #[test]
    fn valid_chain_check() {
        assert!(ladder(&["bark", "dark", "dart"]).is_valid_chain());
        // dark -> ward differs in two positions
        assert!(!ladder(&["bark", "dark", "ward"]).is_valid_chain());
    }

    #[test]
    fn display_joins_with_arrows() {
        let path = ladder(&["bark", "dark", "dart"]);
        assert_eq!(format!("{path}"), "bark -> dark -> dart");
        assert_eq!(format!("{}", Ladder::empty()), "");
    }
}
