//! Cosmetic decoration seam.
//!
//! A decoration wraps a composed frame with ambient framing - a border,
//! a falling-snow banner, whatever the shell fancies. The machine never
//! consults a decoration, and decorations are excluded from the core
//! test surface; non-deterministic cosmetics belong behind this trait,
//! outside the library.

/// Capability interface for ambient decoration around a rendered frame.
pub trait Decoration {
    /// Wrap a composed frame with cosmetic framing.
    fn wrap(&self, frame: String) -> String;
}

/// No decoration at all: the frame passes through untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl Decoration for Plain {
    fn wrap(&self, frame: String) -> String {
        frame
    }
}
