//! Fluent builder for authoring step sequences.

use crate::content::ContentViolations;
use crate::core::{AnswerKey, Step, StepSequence};

/// Builder that accumulates authored steps and validates on `build`.
///
/// Any build failure is a content defect; `build` reports the full
/// accumulated list, never just the first problem.
pub struct SequenceBuilder {
    steps: Vec<Step>,
}

impl SequenceBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append an intro step.
    pub fn intro(
        mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        button_label: impl Into<String>,
    ) -> Self {
        self.steps.push(Step::intro(title, body, button_label));
        self
    }

    /// Append a challenge step gated behind `pass`.
    pub fn challenge(
        mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        pass: impl Into<AnswerKey>,
    ) -> Self {
        self.steps.push(Step::challenge(title, body, pass));
        self
    }

    /// Append the terminal step.
    pub fn finale(mut self, title: impl Into<String>, body: impl Into<String>) -> Self {
        self.steps.push(Step::finale(title, body));
        self
    }

    /// Append a pre-built step.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Append multiple pre-built steps at once.
    pub fn steps(mut self, steps: Vec<Step>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Audit the authored content and build the sequence.
    pub fn build(self) -> Result<StepSequence, ContentViolations> {
        StepSequence::new(self.steps)
    }
}

impl Default for SequenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
