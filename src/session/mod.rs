//! Puzzle sessions: validation, scoring, and state orchestration

mod rules;
mod score;
#[allow(clippy::module_inception)]
mod session;

pub use rules::{RejectReason, ValidationResult, validate};
pub use score::{COMPLETION_BONUS, score_for};
pub use session::{LadderSession, SessionError, SessionState};
