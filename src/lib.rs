//! Passage: a gated step-sequence engine for guided interactive narratives
//!
//! Passage drives a small linear wizard: an ordered, fixed sequence of
//! authored steps - an introduction, pass-gated challenges, a final
//! reveal - walked by a single session. The core state machine logic is
//! composed of pure values (steps, answer keys, the validated sequence),
//! while the one mutable object, the [`machine::StepMachine`], holds the
//! session's position, input buffer, and mismatch flag.
//!
//! # Core Concepts
//!
//! - **Step**: one screen of the sequence, a tagged variant (intro,
//!   challenge, final)
//! - **Gate**: a challenge advances only when a submitted answer matches
//!   its authored key after trimming and upper-casing
//! - **Audit**: authored content is validated at construction, with ALL
//!   defects accumulated into a single report
//! - **History**: immutable tracking of step crossings over time
//!
//! # Example
//!
//! ```rust
//! use passage::builder::SequenceBuilder;
//! use passage::machine::{StepMachine, SubmitOutcome};
//!
//! let sequence = SequenceBuilder::new()
//!     .intro("Welcome", "A two-gate trial.", "Begin")
//!     .challenge("First gate", "Name the tool.", "MUTSUMI")
//!     .finale("Done", "The gift is hidden nearby.")
//!     .build()
//!     .expect("authored content is valid");
//!
//! let mut machine = StepMachine::new(sequence);
//! assert!(machine.advance());
//! assert_eq!(machine.submit_answer(" mutsumi "), SubmitOutcome::Accepted);
//! assert!(machine.is_final());
//! ```

pub mod builder;
pub mod content;
pub mod core;
pub mod machine;
pub mod render;

// Re-export commonly used types
pub use crate::content::{ContentViolation, ContentViolations};
pub use crate::core::{
    normalize, AnswerKey, SessionHistory, Step, StepKind, StepRecord, StepSequence,
};
pub use crate::machine::{AnswerMismatch, StepMachine, SubmitOutcome};
