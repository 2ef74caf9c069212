//! Authored-content violations.

use std::fmt;
use thiserror::Error;

/// A single defect in authored step content.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContentViolation {
    #[error("sequence has no steps")]
    EmptySequence,

    #[error("last step is a {kind} step at position {position}; a sequence must end on a final step")]
    UnterminatedSequence { position: usize, kind: &'static str },

    #[error("step at position {position} is unreachable: it follows the terminal step")]
    UnreachableStep { position: usize },

    #[error("challenge '{title}' has an empty pass")]
    EmptyPass { title: String },

    #[error("challenge '{title}' has pass '{pass}'; passes are authored upper-case with no whitespace")]
    MalformedPass { title: String, pass: String },
}

/// Every violation found by a content audit, reported together.
///
/// Surfaced once, at sequence construction. The audit never stops at the
/// first defect, so an author fixes the whole list in a single pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentViolations {
    violations: Vec<ContentViolation>,
}

impl ContentViolations {
    pub(crate) fn new(violations: Vec<ContentViolation>) -> Self {
        Self { violations }
    }

    /// The individual violations, in audit order.
    pub fn violations(&self) -> &[ContentViolation] {
        &self.violations
    }

    /// Number of violations found.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// An audit that found nothing produces no `ContentViolations` value.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for ContentViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid step sequence ({} violations): ", self.violations.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ContentViolations {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_messages_name_the_defect() {
        let violation = ContentViolation::MalformedPass {
            title: "First gate".to_string(),
            pass: "small lake".to_string(),
        };
        let message = violation.to_string();
        assert!(message.contains("First gate"));
        assert!(message.contains("small lake"));
    }

    #[test]
    fn report_joins_every_violation() {
        let report = ContentViolations::new(vec![
            ContentViolation::EmptySequence,
            ContentViolation::UnreachableStep { position: 2 },
        ]);

        let message = report.to_string();
        assert!(message.starts_with("invalid step sequence (2 violations)"));
        assert!(message.contains("no steps"));
        assert!(message.contains("position 2"));
    }
}
