//! The step machine: one mutable session over an immutable sequence.

use crate::core::{SessionHistory, Step, StepRecord, StepSequence};
use crate::machine::outcome::{AnswerMismatch, SubmitOutcome};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Tracks progress through a [`StepSequence`] and gates advancement
/// behind answer validation.
///
/// The machine owns all mutable session state: the current position, the
/// live-typed input buffer, the mismatch flag, and the session history.
/// Every operation completes immediately; the only mutator is the user's
/// sequential interaction.
///
/// # Example
///
/// ```rust
/// use passage::builder::SequenceBuilder;
/// use passage::machine::{StepMachine, SubmitOutcome};
///
/// let sequence = SequenceBuilder::new()
///     .intro("Welcome", "A short trial.", "Begin")
///     .challenge("Gate", "Name the tool.", "MUTSUMI")
///     .finale("Done", "The gift is yours.")
///     .build()?;
///
/// let mut machine = StepMachine::new(sequence);
/// assert!(machine.advance());
///
/// assert_eq!(machine.submit_answer("wrong"), SubmitOutcome::Rejected);
/// assert_eq!(machine.submit_answer(" mutsumi "), SubmitOutcome::Accepted);
/// assert!(machine.is_final());
/// # Ok::<(), passage::content::ContentViolations>(())
/// ```
#[derive(Clone, Debug)]
pub struct StepMachine {
    sequence: StepSequence,
    position: usize,
    pending_input: String,
    last_error: Option<AnswerMismatch>,
    history: SessionHistory,
    session_id: Uuid,
    started_at: DateTime<Utc>,
}

impl StepMachine {
    /// Create a new session at the first step.
    pub fn new(sequence: StepSequence) -> Self {
        Self {
            sequence,
            position: 0,
            pending_input: String::new(),
            last_error: None,
            history: SessionHistory::new(),
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }

    /// The step at the current position (pure). Never fails: the
    /// position is always in range by construction and clamping.
    pub fn current_step(&self) -> &Step {
        &self.sequence[self.position]
    }

    /// The current position (pure).
    pub fn position(&self) -> usize {
        self.position
    }

    /// The live-typed input buffer (pure).
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// The mismatch flag from the last submission, if set (pure).
    pub fn last_error(&self) -> Option<AnswerMismatch> {
        self.last_error
    }

    /// Check if the machine sits on the terminal step (pure).
    pub fn is_final(&self) -> bool {
        self.current_step().is_final()
    }

    /// The sequence this session walks (pure).
    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    /// Session history of step crossings (pure).
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Unique id of this session (pure).
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// When this session began (pure).
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Update the live-typed buffer. No validation, no other effect.
    pub fn set_pending_input(&mut self, raw: impl Into<String>) {
        self.pending_input = raw.into();
    }

    /// Move forward from an intro step.
    ///
    /// Returns `true` when the machine moved. On a challenge step the
    /// call is refused (only a matching answer moves past the gate), and
    /// at the terminal step it is a clamped no-op; both leave every piece
    /// of state unchanged.
    pub fn advance(&mut self) -> bool {
        match self.current_step() {
            Step::Intro { .. } => {
                self.move_forward();
                true
            }
            Step::Challenge { .. } | Step::Final { .. } => false,
        }
    }

    /// Submit an answer for the current challenge step.
    ///
    /// On a match the mismatch flag clears and the machine advances. On
    /// a mismatch the flag is set and both the position and the pending
    /// buffer stay as they were, so the user edits rather than retypes.
    /// Retries are unlimited. On a step with no prompt nothing changes.
    pub fn submit_answer(&mut self, raw: &str) -> SubmitOutcome {
        let matched = match self.current_step() {
            Step::Challenge { pass, .. } => pass.matches(raw),
            _ => return SubmitOutcome::NoPrompt,
        };

        if matched {
            self.last_error = None;
            self.move_forward();
            SubmitOutcome::Accepted
        } else {
            tracing::debug!(position = self.position, "pass rejected");
            self.last_error = Some(AnswerMismatch);
            SubmitOutcome::Rejected
        }
    }

    /// Submit the live-typed buffer as the answer.
    pub fn submit_pending(&mut self) -> SubmitOutcome {
        let buffered = self.pending_input.clone();
        self.submit_answer(&buffered)
    }

    /// Shared advance effect: clamp the position, record the crossing,
    /// reset the buffer and the mismatch flag.
    fn move_forward(&mut self) {
        let from = self.position;
        let to = (self.position + 1).min(self.sequence.terminal_position());
        if to == from {
            return;
        }

        self.history = self.history.record(StepRecord {
            from,
            to,
            at: Utc::now(),
        });
        self.position = to;
        self.pending_input.clear();
        self.last_error = None;
        tracing::debug!(from, to, step = self.current_step().name(), "step advanced");
    }
}
