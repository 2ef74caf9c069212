//! Step variants for the guided sequence.
//!
//! A step is one screen of the sequence. The three variants mirror the
//! authored content shapes: an introduction that advances on demand, a
//! pass-gated challenge, and the terminal reveal. A single `match` over
//! the variant suffices everywhere a step is consulted.

use super::answer::AnswerKey;
use serde::{Deserialize, Serialize};

/// One unit of the guided sequence.
///
/// Steps are immutable authored values. All methods are pure accessors;
/// nothing on a step ever mutates.
///
/// # Example
///
/// ```rust
/// use passage::core::{Step, StepKind};
///
/// let step = Step::challenge("First gate", "Name the tool.", "MUTSUMI");
///
/// assert_eq!(step.kind(), StepKind::Challenge);
/// assert_eq!(step.title(), "First gate");
/// assert!(step.takes_input());
/// assert!(!step.is_final());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Opening screen. Advances unconditionally on the user's action.
    Intro {
        title: String,
        body: String,
        button_label: String,
    },

    /// Pass-gated screen. Advances only when a submitted answer matches
    /// the authored key under the normalization rule.
    Challenge {
        title: String,
        body: String,
        pass: AnswerKey,
    },

    /// Terminal screen. Accepts no further input.
    Final { title: String, body: String },
}

/// The variant tag of a step, without its content.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Intro,
    Challenge,
    Final,
}

impl StepKind {
    /// Get the kind's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Challenge => "challenge",
            Self::Final => "final",
        }
    }
}

impl Step {
    /// Author an intro step.
    pub fn intro(
        title: impl Into<String>,
        body: impl Into<String>,
        button_label: impl Into<String>,
    ) -> Self {
        Self::Intro {
            title: title.into(),
            body: body.into(),
            button_label: button_label.into(),
        }
    }

    /// Author a challenge step gated behind `pass`.
    pub fn challenge(
        title: impl Into<String>,
        body: impl Into<String>,
        pass: impl Into<AnswerKey>,
    ) -> Self {
        Self::Challenge {
            title: title.into(),
            body: body.into(),
            pass: pass.into(),
        }
    }

    /// Author the terminal step.
    pub fn finale(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Final {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The step's variant tag.
    pub fn kind(&self) -> StepKind {
        match self {
            Self::Intro { .. } => StepKind::Intro,
            Self::Challenge { .. } => StepKind::Challenge,
            Self::Final { .. } => StepKind::Final,
        }
    }

    /// The step's kind name for display/logging.
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// The step's title.
    pub fn title(&self) -> &str {
        match self {
            Self::Intro { title, .. } | Self::Challenge { title, .. } | Self::Final { title, .. } => {
                title
            }
        }
    }

    /// The step's body text. May contain embedded line breaks, which the
    /// render layer preserves verbatim.
    pub fn body(&self) -> &str {
        match self {
            Self::Intro { body, .. } | Self::Challenge { body, .. } | Self::Final { body, .. } => {
                body
            }
        }
    }

    /// The authored action label, for intro steps.
    pub fn button_label(&self) -> Option<&str> {
        match self {
            Self::Intro { button_label, .. } => Some(button_label),
            _ => None,
        }
    }

    /// The authored answer key, for challenge steps.
    pub fn pass(&self) -> Option<&AnswerKey> {
        match self {
            Self::Challenge { pass, .. } => Some(pass),
            _ => None,
        }
    }

    /// Check if this is the terminal (final) step kind.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Final { .. })
    }

    /// Check if this step expects a typed answer.
    pub fn takes_input(&self) -> bool {
        matches!(self, Self::Challenge { .. })
    }
}
