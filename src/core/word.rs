//! Ladder word representation
//!
//! A Word is an immutable, case-normalized word of arbitrary (non-zero)
//! length. All comparisons inside the engine happen on normalized words.

use std::fmt;

/// A validated, lowercase word
///
/// Words of different lengths can coexist (the engine filters a puzzle's
/// corpus to a single length), but they are never adjacent and never equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation, so `"Bark"` and `"bark"`
    /// produce equal words.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Bark").unwrap();
    /// assert_eq!(word.text(), "bark");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("b4rk").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (ASCII lowercase, one byte per letter)
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word (always >= 1)
    #[allow(clippy::len_without_is_empty)] // a Word is never empty
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("bark").unwrap();
        assert_eq!(word.text(), "bark");
        assert_eq!(word.as_bytes(), b"bark");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("BARK").unwrap();
        assert_eq!(word.text(), "bark");

        let word2 = Word::new("BaRk").unwrap();
        assert_eq!(word2.text(), "bark");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("ladder").unwrap().len(), 6);
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("bar1").is_err()); // Number
        assert!(Word::new("bar ").is_err()); // Space
        assert!(Word::new("bar!").is_err()); // Punctuation
        assert!(Word::new("two words").is_err());
    }

    #[test]
    fn word_display() {
        let word = Word::new("bark").unwrap();
        assert_eq!(format!("{word}"), "bark");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("bark").unwrap();
        let word2 = Word::new("bark").unwrap();
        let word3 = Word::new("BARK").unwrap();
        let word4 = Word::new("dark").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
