//! The validated, immutable step sequence.

use super::step::Step;
use crate::content::{rules, ContentViolations};
use serde::{Deserialize, Serialize};
use std::ops::Index;
use stillwater::validation::Validation;

/// An ordered, immutable list of steps, fixed at process start.
///
/// Construction audits the authored content and accumulates every defect
/// before reporting, so a sequence in hand always upholds the invariants:
/// at least one step, the last step is final, nothing follows the final
/// step, and every challenge pass is well formed.
///
/// # Example
///
/// ```rust
/// use passage::core::{Step, StepSequence};
///
/// let sequence = StepSequence::new(vec![
///     Step::intro("Welcome", "A short trial.", "Begin"),
///     Step::challenge("Gate", "Name the tool.", "MUTSUMI"),
///     Step::finale("Done", "The gift is yours."),
/// ])?;
///
/// assert_eq!(sequence.len(), 3);
/// assert_eq!(sequence.terminal_position(), 2);
/// # Ok::<(), passage::content::ContentViolations>(())
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Step>", into = "Vec<Step>")]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    /// Audit authored steps and construct the sequence.
    ///
    /// Reports ALL violations at once rather than stopping at the first;
    /// malformed content is a configuration defect, not a runtime error.
    pub fn new(steps: Vec<Step>) -> Result<Self, ContentViolations> {
        match rules::audit(&steps) {
            Validation::Success(()) => Ok(Self { steps }),
            Validation::Failure(violations) => {
                Err(ContentViolations::new(violations.iter().cloned().collect()))
            }
        }
    }

    /// Number of steps. Always at least one.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// A validated sequence is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The position of the terminal step.
    pub fn terminal_position(&self) -> usize {
        self.steps.len() - 1
    }

    /// The step at `position`, if within range.
    pub fn step(&self, position: usize) -> Option<&Step> {
        self.steps.get(position)
    }

    /// All steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl Index<usize> for StepSequence {
    type Output = Step;

    fn index(&self, position: usize) -> &Step {
        &self.steps[position]
    }
}

impl TryFrom<Vec<Step>> for StepSequence {
    type Error = ContentViolations;

    fn try_from(steps: Vec<Step>) -> Result<Self, Self::Error> {
        Self::new(steps)
    }
}

impl From<StepSequence> for Vec<Step> {
    fn from(sequence: StepSequence) -> Self {
        sequence.steps
    }
}
