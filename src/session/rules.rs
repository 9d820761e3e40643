//! Move validation rules
//!
//! Decides whether a candidate word is a legal next rung of the ladder.
//! Pure: acceptance never mutates anything, appending to progress is the
//! session's job.

use crate::core::{Dictionary, Word, is_adjacent};
use std::fmt;

/// Outcome of validating a candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    Rejected(RejectReason),
}

impl ValidationResult {
    #[inline]
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Why a move was rejected
///
/// The checks run in this order and the first failure wins, so a candidate
/// of the wrong length reports `LengthMismatch` even when it is also
/// missing from the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    LengthMismatch,
    NotInDictionary,
    NotOneLetterDifferent,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch => write!(f, "Word must be the same length!"),
            Self::NotInDictionary => write!(f, "Word is not in the dictionary!"),
            Self::NotOneLetterDifferent => {
                write!(f, "Only one letter can be changed at a time!")
            }
        }
    }
}

/// Validate a candidate move against the current word and the dictionary
#[must_use]
pub fn validate(current: &Word, candidate: &Word, dictionary: &Dictionary) -> ValidationResult {
    if candidate.len() != current.len() {
        return ValidationResult::Rejected(RejectReason::LengthMismatch);
    }

    if !dictionary.contains(candidate) {
        return ValidationResult::Rejected(RejectReason::NotInDictionary);
    }

    if !is_adjacent(current, candidate) {
        return ValidationResult::Rejected(RejectReason::NotOneLetterDifferent);
    }

    ValidationResult::Accepted
}
