//! Ladder session orchestration
//!
//! A `LadderSession` owns one puzzle: the fixed start/target pair, the
//! canonical dictionary, and the player's progress. It wires the validator,
//! the scorer, and the solver together. A restart is a fresh session; a
//! finished session never accepts further moves.

use super::rules::{ValidationResult, validate};
use super::score::score_for;
use crate::core::{Dictionary, Word};
use crate::solver::{Ladder, shortest_path};
use std::fmt;

/// Lifecycle state of a session
///
/// `Completed` and `Abandoned` are terminal. The transition to `Abandoned`
/// is driven by the caller (e.g. an expired countdown); the core never
/// observes wall-clock time itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Completed,
    Abandoned,
}

/// Errors from session construction and use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Start and target words have different lengths
    LengthMismatch { start: usize, target: usize },
    /// A move was submitted to a completed or abandoned session
    SessionOver,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { start, target } => write!(
                f,
                "Start and target words must have the same length (got {start} and {target})"
            ),
            Self::SessionOver => write!(f, "The session is over; start a new one to keep playing"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One active word-ladder puzzle
///
/// Invariants maintained across all operations:
/// - `progress()[0]` is always the start word
/// - the session is `Completed` iff the last progress word is the target
/// - consecutive progress words are one letter apart
/// - every progress word after the first was a dictionary member when
///   accepted
#[derive(Debug, Clone)]
pub struct LadderSession {
    start: Word,
    target: Word,
    dictionary: Dictionary,
    progress: Vec<Word>,
    state: SessionState,
    score: u32,
    best_path: Ladder,
}

impl LadderSession {
    /// Start a new session for the given puzzle
    ///
    /// The initial best-known path is computed against the canonical
    /// dictionary right away. A start/target pair with no connecting chain
    /// is allowed: the no-path outcome is visible as an empty ladder from
    /// [`best_known_path`](Self::best_known_path), never a construction
    /// failure.
    ///
    /// # Errors
    /// Returns `SessionError::LengthMismatch` when the start and target
    /// word lengths differ.
    pub fn new(start: Word, target: Word, dictionary: Dictionary) -> Result<Self, SessionError> {
        if start.len() != target.len() {
            return Err(SessionError::LengthMismatch {
                start: start.len(),
                target: target.len(),
            });
        }

        let best_path = shortest_path(&start, &target, &dictionary);
        let progress = vec![start.clone()];

        Ok(Self {
            start,
            target,
            dictionary,
            progress,
            state: SessionState::InProgress,
            score: 0,
            best_path,
        })
    }

    /// Submit the player's next word
    ///
    /// On acceptance the word is appended to progress and scored; landing
    /// on the target completes the session and recomputes the best-known
    /// path against the augmented dictionary (canonical plus every word
    /// played), so the revealed solution may legally pass through
    /// player-discovered words. A rejection leaves the session untouched.
    ///
    /// # Errors
    /// Returns `SessionError::SessionOver` when the session has already
    /// completed or been abandoned.
    pub fn submit_move(&mut self, candidate: &Word) -> Result<ValidationResult, SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::SessionOver);
        }

        let result = validate(self.current(), candidate, &self.dictionary);
        if !result.is_accepted() {
            return Ok(result);
        }

        self.progress.push(candidate.clone());
        self.score += score_for(candidate, &self.target);

        if *candidate == self.target {
            self.state = SessionState::Completed;
            let augmented = self.dictionary.union(self.progress.iter().cloned());
            self.best_path = shortest_path(&self.start, &self.target, &augmented);
        }

        Ok(result)
    }

    /// Abandon the puzzle (caller-driven, e.g. on timer expiry)
    ///
    /// No-op unless the session is in progress.
    pub fn abandon(&mut self) {
        if self.state == SessionState::InProgress {
            self.state = SessionState::Abandoned;
        }
    }

    /// The word the player currently stands on
    #[must_use]
    pub fn current(&self) -> &Word {
        self.progress.last().expect("progress always holds the start word")
    }

    /// Position-by-position view of the target, `None` where the current
    /// word does not match yet
    ///
    /// A pure projection of session state, recomputed on every call.
    #[must_use]
    pub fn reveal_mask(&self) -> Vec<Option<char>> {
        self.target
            .as_bytes()
            .iter()
            .zip(self.current().as_bytes())
            .map(|(t, c)| (t == c).then_some(*t as char))
            .collect()
    }

    /// The most recently computed shortest path
    ///
    /// Computed against the canonical dictionary at construction, and
    /// recomputed against the augmented dictionary on completion. Empty
    /// when no path exists.
    #[must_use]
    pub fn best_known_path(&self) -> &Ladder {
        &self.best_path
    }

    #[must_use]
    pub fn start(&self) -> &Word {
        &self.start
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Every word played so far, start first
    #[must_use]
    pub fn progress(&self) -> &[Word] {
        &self.progress
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Cumulative score across all accepted moves
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
