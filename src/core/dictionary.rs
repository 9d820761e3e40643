//! Dictionary of ladder words
//!
//! A deduplicated word set with deterministic iteration order. The search
//! engine's tie-breaking between equally short paths follows corpus
//! iteration order, so the order must be reproducible: words iterate in the
//! order they were first inserted.

use super::Word;
use rustc_hash::FxHashSet;

/// A deduplicated, insertion-ordered set of words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, ignoring duplicates
    ///
    /// Returns true if the word was newly inserted.
    pub fn insert(&mut self, word: Word) -> bool {
        if self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Words in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Iterate words in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build a new dictionary containing this dictionary plus `extra`
    ///
    /// Used to derive the augmented dictionary (canonical plus every word
    /// the player has played). The receiver is left untouched; the canonical
    /// dictionary is never mutated in place.
    #[must_use]
    pub fn union(&self, extra: impl IntoIterator<Item = Word>) -> Self {
        let mut combined = self.clone();
        for word in extra {
            combined.insert(word);
        }
        combined
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for word in iter {
            dictionary.insert(word);
        }
        dictionary
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn insert_and_contains() {
        let mut dictionary = Dictionary::new();
        assert!(dictionary.insert(word("bark")));
        assert!(dictionary.contains(&word("bark")));
        assert!(!dictionary.contains(&word("dark")));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn insert_deduplicates() {
        let mut dictionary = Dictionary::new();
        assert!(dictionary.insert(word("bark")));
        assert!(!dictionary.insert(word("bark")));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let dictionary: Dictionary = ["cart", "bark", "dark"]
            .iter()
            .map(|w| word(w))
            .collect();

        let texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cart", "bark", "dark"]);
    }

    #[test]
    fn union_does_not_mutate_receiver() {
        let canonical: Dictionary = ["bark", "dark"].iter().map(|w| word(w)).collect();
        let augmented = canonical.union(vec![word("dart"), word("bark")]);

        assert_eq!(canonical.len(), 2);
        assert!(!canonical.contains(&word("dart")));

        assert_eq!(augmented.len(), 3);
        assert!(augmented.contains(&word("dart")));
        assert!(augmented.contains(&word("bark")));
    }

    #[test]
    fn union_appends_new_words_after_existing() {
        let canonical: Dictionary = ["bark", "dark"].iter().map(|w| word(w)).collect();
        let augmented = canonical.union(vec![word("dart")]);

        let texts: Vec<&str> = augmented.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["bark", "dark", "dart"]);
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::new();
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.len(), 0);
        assert!(!dictionary.contains(&word("bark")));
    }
}
