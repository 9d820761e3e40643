//! Word adjacency
//!
//! Two words are adjacent when they have the same length and differ in
//! exactly one letter position. This relation induces the implicit graph
//! the ladder solver searches over.

use super::{Dictionary, Word};

/// Check whether two words differ in exactly one letter position
///
/// Words of different lengths are never adjacent, and a word is never
/// adjacent to itself (zero differing positions is not one).
///
/// # Examples
/// ```
/// use word_ladder::core::{is_adjacent, Word};
///
/// let bark = Word::new("bark").unwrap();
/// let dark = Word::new("dark").unwrap();
/// let ward = Word::new("ward").unwrap();
///
/// assert!(is_adjacent(&bark, &dark));
/// assert!(!is_adjacent(&bark, &bark));
/// assert!(!is_adjacent(&dark, &ward)); // two positions differ
/// ```
#[must_use]
pub fn is_adjacent(a: &Word, b: &Word) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut differences = 0;
    for (x, y) in a.as_bytes().iter().zip(b.as_bytes()) {
        if x != y {
            differences += 1;
            if differences > 1 {
                return false;
            }
        }
    }
    differences == 1
}

/// Collect every corpus word adjacent to `word`
///
/// Results follow corpus iteration order and never include `word` itself.
/// Linear scan over the corpus; at the target scale (thousands of words)
/// this needs no index.
#[must_use]
pub fn neighbors<'a>(word: &Word, corpus: &'a Dictionary) -> Vec<&'a Word> {
    corpus
        .iter()
        .filter(|candidate| is_adjacent(word, candidate))
        .collect()
}
