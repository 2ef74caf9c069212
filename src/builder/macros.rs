//! Macros for declarative sequence authoring.

/// Author a step sequence declaratively.
///
/// Expands to a [`SequenceBuilder`](crate::builder::SequenceBuilder)
/// chain ending in `build()`, so the result is
/// `Result<StepSequence, ContentViolations>` and the content is audited
/// like any other construction.
///
/// # Example
///
/// ```
/// use passage::step_sequence;
///
/// let sequence = step_sequence! {
///     intro { title: "Welcome", body: "A short trial.", button: "Begin" }
///     challenge { title: "Gate", body: "Name the tool.", pass: "MUTSUMI" }
///     final { title: "Done", body: "The gift is yours." }
/// }
/// .unwrap();
///
/// assert_eq!(sequence.len(), 3);
/// ```
#[macro_export]
macro_rules! step_sequence {
    (@apply $builder:expr, ) => { $builder };

    (@apply $builder:expr,
        intro { title: $title:expr, body: $body:expr, button: $label:expr $(,)? }
        $($rest:tt)*
    ) => {
        $crate::step_sequence!(@apply $builder.intro($title, $body, $label), $($rest)*)
    };

    (@apply $builder:expr,
        challenge { title: $title:expr, body: $body:expr, pass: $pass:expr $(,)? }
        $($rest:tt)*
    ) => {
        $crate::step_sequence!(@apply $builder.challenge($title, $body, $pass), $($rest)*)
    };

    (@apply $builder:expr,
        final { title: $title:expr, body: $body:expr $(,)? }
        $($rest:tt)*
    ) => {
        $crate::step_sequence!(@apply $builder.finale($title, $body), $($rest)*)
    };

    ( $($steps:tt)* ) => {
        $crate::step_sequence!(@apply $crate::builder::SequenceBuilder::new(), $($steps)*).build()
    };
}
