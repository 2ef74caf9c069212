//! Audit rules for authored step content.

use crate::content::violations::ContentViolation;
use crate::core::Step;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Audit authored steps, accumulating ALL violations.
///
/// Returns `Validation::Success(())` when the content upholds every
/// invariant: non-empty, terminated by a final step, no unreachable
/// steps, well-formed challenge passes.
pub fn audit(steps: &[Step]) -> Validation<(), NonEmptyVec<ContentViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ContentViolation>>> = Vec::new();

    if steps.is_empty() {
        checks.push(Validation::fail(ContentViolation::EmptySequence));
    }

    // The sequence must end on a final step.
    if let Some(last) = steps.last() {
        if !last.is_final() {
            checks.push(Validation::fail(ContentViolation::UnterminatedSequence {
                position: steps.len() - 1,
                kind: last.name(),
            }));
        }
    }

    // The terminal step has no outgoing transition, so any step after
    // the first final one can never be reached.
    if let Some(first_final) = steps.iter().position(Step::is_final) {
        for position in first_final + 1..steps.len() {
            checks.push(Validation::fail(ContentViolation::UnreachableStep {
                position,
            }));
        }
    }

    // A pass that is not upper-case, or carries whitespace, can never be
    // matched by normalized input.
    for step in steps {
        if let Step::Challenge { title, pass, .. } = step {
            if pass.text().is_empty() {
                checks.push(Validation::fail(ContentViolation::EmptyPass {
                    title: title.clone(),
                }));
            } else if !pass.is_well_formed() {
                checks.push(Validation::fail(ContentViolation::MalformedPass {
                    title: title.clone(),
                    pass: pass.text().to_string(),
                }));
            }
        }
    }

    if checks.is_empty() {
        return Validation::success(());
    }

    // Accumulate ALL failures using all_vec
    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial_steps() -> Vec<Step> {
        vec![
            Step::intro("Welcome", "A short trial.", "Begin"),
            Step::challenge("First gate", "Name the tool.", "MUTSUMI"),
            Step::finale("Done", "The gift is yours."),
        ]
    }

    #[test]
    fn valid_content_passes() {
        assert!(audit(&trial_steps()).is_success());
    }

    #[test]
    fn empty_content_fails() {
        let result = audit(&[]);
        match result {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 1);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, ContentViolation::EmptySequence)));
            }
            Validation::Success(_) => panic!("expected a failed audit"),
        }
    }

    #[test]
    fn audit_accumulates_all_violations() {
        let steps = vec![
            Step::challenge("Padded", "Riddle.", " MUTSUMI "),
            Step::challenge("Blank", "Riddle.", ""),
            Step::intro("Trailing", "Hello.", "Next"),
        ];

        let result = audit(&steps);
        match result {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 3);

                let has_unterminated = violations
                    .iter()
                    .any(|v| matches!(v, ContentViolation::UnterminatedSequence { .. }));
                let has_empty_pass = violations
                    .iter()
                    .any(|v| matches!(v, ContentViolation::EmptyPass { .. }));
                let has_malformed = violations
                    .iter()
                    .any(|v| matches!(v, ContentViolation::MalformedPass { .. }));

                assert!(has_unterminated);
                assert!(has_empty_pass);
                assert!(has_malformed);
            }
            Validation::Success(_) => panic!("expected a failed audit"),
        }
    }

    #[test]
    fn steps_after_the_final_are_unreachable() {
        let steps = vec![
            Step::finale("Done", "The end."),
            Step::intro("Ghost", "Never shown.", "Next"),
        ];

        let result = audit(&steps);
        match result {
            Validation::Failure(violations) => {
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, ContentViolation::UnreachableStep { position: 1 })));
            }
            Validation::Success(_) => panic!("expected a failed audit"),
        }
    }

    #[test]
    fn hyphenated_passes_are_allowed() {
        let steps = vec![
            Step::challenge("Gate", "Riddle.", "SMALL-LAKE"),
            Step::finale("Done", "The end."),
        ];
        assert!(audit(&steps).is_success());
    }
}
