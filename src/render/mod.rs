//! Presentational shell: composes text frames from machine state.
//!
//! Rendering is stateless with respect to the machine - it reads the
//! current step and produces text, feeding nothing back. Body text is
//! emitted verbatim, embedded line breaks included; nothing here
//! collapses whitespace.

mod decor;

pub use decor::{Decoration, Plain};

use crate::core::Step;
use crate::machine::{AnswerMismatch, StepMachine};
use std::fmt;

/// Input label shown at the answer prompt on challenge steps.
pub const PASS_LABEL: &str = "PASS";

/// Fixed notice replacing the input controls on the terminal step.
pub const COMPLETION_NOTICE: &str = "No input is required.";

/// The control surface rendered below the body, by step kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controls<'a> {
    /// A single advance action with its authored label.
    Advance { label: &'a str },

    /// The answer prompt, with the mismatch indicator when the last
    /// submission failed.
    Prompt { error: Option<AnswerMismatch> },

    /// The fixed completion notice.
    Notice,
}

/// A composed text frame of the machine's current step.
///
/// # Example
///
/// ```rust
/// use passage::builder::SequenceBuilder;
/// use passage::machine::StepMachine;
/// use passage::render::Frame;
///
/// let sequence = SequenceBuilder::new()
///     .intro("Welcome", "Line one.\nLine two.", "Begin")
///     .finale("Done", "The gift is yours.")
///     .build()?;
/// let machine = StepMachine::new(sequence);
///
/// let text = Frame::compose(&machine).to_string();
/// assert!(text.contains("Line one.\nLine two."));
/// # Ok::<(), passage::content::ContentViolations>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    title: &'a str,
    body: &'a str,
    controls: Controls<'a>,
}

impl<'a> Frame<'a> {
    /// Compose a frame from the machine's current step.
    pub fn compose(machine: &'a StepMachine) -> Self {
        let step = machine.current_step();
        let controls = match step {
            Step::Intro { button_label, .. } => Controls::Advance {
                label: button_label,
            },
            Step::Challenge { .. } => Controls::Prompt {
                error: machine.last_error(),
            },
            Step::Final { .. } => Controls::Notice,
        };

        Self {
            title: step.title(),
            body: step.body(),
            controls,
        }
    }

    /// The frame's title line.
    pub fn title(&self) -> &str {
        self.title
    }

    /// The frame's body, verbatim.
    pub fn body(&self) -> &str {
        self.body
    }

    /// The frame's control surface.
    pub fn controls(&self) -> Controls<'a> {
        self.controls
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.body)?;
        writeln!(f)?;
        match &self.controls {
            Controls::Advance { label } => writeln!(f, "[{label}]"),
            Controls::Prompt { error } => {
                writeln!(f, "{PASS_LABEL}:")?;
                if let Some(error) = error {
                    writeln!(f, "! {error}")?;
                }
                Ok(())
            }
            Controls::Notice => writeln!(f, "{COMPLETION_NOTICE}"),
        }
    }
}

/// Compose the current frame and wrap it in a decoration.
pub fn present(machine: &StepMachine, decoration: &impl Decoration) -> String {
    decoration.wrap(Frame::compose(machine).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SequenceBuilder;
    use crate::machine::SubmitOutcome;

    fn trial_machine() -> StepMachine {
        let sequence = SequenceBuilder::new()
            .intro("A Notice", "Dear you,\n\nMerry Christmas!", "Begin")
            .challenge("First gate", "Name the tool.", "MUTSUMI")
            .finale("Done", "The gift is yours.")
            .build()
            .unwrap();
        StepMachine::new(sequence)
    }

    #[test]
    fn body_line_breaks_survive_verbatim() {
        let machine = trial_machine();
        let text = Frame::compose(&machine).to_string();
        assert!(text.contains("Dear you,\n\nMerry Christmas!"));
    }

    #[test]
    fn intro_frame_shows_the_authored_button() {
        let machine = trial_machine();
        let frame = Frame::compose(&machine);
        assert_eq!(frame.controls(), Controls::Advance { label: "Begin" });
        assert!(frame.to_string().contains("[Begin]"));
    }

    #[test]
    fn challenge_frame_prompts_without_error_at_first() {
        let mut machine = trial_machine();
        machine.advance();

        let text = Frame::compose(&machine).to_string();
        assert!(text.contains("PASS:"));
        assert!(!text.contains("incorrect pass"));
    }

    #[test]
    fn rejected_submission_shows_the_indicator() {
        let mut machine = trial_machine();
        machine.advance();
        assert_eq!(machine.submit_answer("wrong"), SubmitOutcome::Rejected);

        let text = Frame::compose(&machine).to_string();
        assert!(text.contains("! incorrect pass"));
    }

    #[test]
    fn terminal_frame_replaces_controls_with_the_notice() {
        let mut machine = trial_machine();
        machine.advance();
        machine.submit_answer("MUTSUMI");
        assert!(machine.is_final());

        let text = Frame::compose(&machine).to_string();
        assert!(text.contains(COMPLETION_NOTICE));
        assert!(!text.contains("PASS:"));
    }

    #[test]
    fn present_applies_the_decoration() {
        let machine = trial_machine();
        let plain = present(&machine, &Plain);
        assert_eq!(plain, Frame::compose(&machine).to_string());
    }
}
