//! Authored-content validation for step sequences.
//!
//! Step content is static configuration fixed at process start, so a
//! defect in it is a configuration bug, not a runtime condition. This
//! module audits authored steps with `Validation` to accumulate ALL
//! violations instead of fail-fast behavior: an author sees every defect
//! in one report rather than fixing them one at a time.
//!
//! # Example
//!
//! ```rust
//! use passage::content::rules;
//! use passage::core::Step;
//!
//! let steps = vec![
//!     Step::intro("Welcome", "A short trial.", "Begin"),
//!     Step::finale("Done", "The gift is yours."),
//! ];
//!
//! assert!(rules::audit(&steps).is_success());
//! ```

pub mod rules;
pub mod violations;

pub use violations::{ContentViolation, ContentViolations};
