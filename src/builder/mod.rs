//! Authoring API for step sequences.
//!
//! This module provides a fluent builder and a declarative macro for
//! authoring sequences with minimal boilerplate. Both paths run the same
//! content audit on `build`.

pub mod macros;
pub mod sequence;

pub use sequence::SequenceBuilder;
