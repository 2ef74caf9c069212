//! The mutable shell around the pure core.
//!
//! One object mutates here: [`StepMachine`], which tracks the position,
//! the live-typed buffer, and the mismatch flag for a single session.
//! Operations are synchronous and atomic with respect to the session;
//! there is no suspension, no background task, and no shared state.

mod outcome;
mod session;

pub use outcome::{AnswerMismatch, SubmitOutcome};
pub use session::StepMachine;
