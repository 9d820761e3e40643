//! Move scoring
//!
//! Each accepted move earns one point per letter position that matches the
//! target, plus a flat bonus for landing on the target itself.

use crate::core::Word;

/// Bonus awarded when the accepted move equals the target word
pub const COMPLETION_BONUS: u32 = 10;

/// Score an accepted move against the target
///
/// Counts positions where `candidate` and `target` share the same letter;
/// adds [`COMPLETION_BONUS`] when they are equal. Positions are compared
/// pairwise, so only the common prefix length contributes for words of
/// different lengths (the validator guarantees equal lengths in practice).
#[must_use]
pub fn score_for(candidate: &Word, target: &Word) -> u32 {
    let matches = candidate
        .as_bytes()
        .iter()
        .zip(target.as_bytes())
        .filter(|(a, b)| a == b)
        .count() as u32;

    if candidate == target {
        matches + COMPLETION_BONUS
    } else {
        matches
    }
}
