//! Operation outcomes for the step machine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of submitting an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answer matched; the machine moved to the next step.
    Accepted,

    /// The answer did not match; position and buffer are unchanged and
    /// the mismatch flag is set.
    Rejected,

    /// The current step takes no answer; nothing changed.
    NoPrompt,
}

/// The one recoverable failure: a submitted answer did not match.
///
/// Carried as a state flag on the machine rather than raised as an
/// error; the session stays fully usable and retries are unlimited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("incorrect pass")]
pub struct AnswerMismatch;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_displays_a_fixed_signal() {
        assert_eq!(AnswerMismatch.to_string(), "incorrect pass");
    }

    #[test]
    fn mismatch_roundtrips_through_json() {
        let json = serde_json::to_string(&AnswerMismatch).unwrap();
        let deserialized: AnswerMismatch = serde_json::from_str(&json).unwrap();
        assert_eq!(AnswerMismatch, deserialized);
    }
}
