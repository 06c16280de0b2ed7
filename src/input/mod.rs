//! Math input capability
//!
//! The math field widget owns the pending math buffer. The session reads
//! and clears it through [`MathInput`], so the same commit logic runs
//! against the browser widget and the in-memory buffer used natively.

pub mod math_field;

pub use math_field::MathField;

/// Read/write access to an editable math field's LaTeX value
pub trait MathInput {
    /// Current content as LaTeX source
    fn value(&self) -> String;

    /// Replace the content; an empty string clears the field
    fn set_value(&mut self, value: &str);
}

/// In-memory math field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MathFieldBuffer {
    value: String,
}

impl MathFieldBuffer {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

impl MathInput for MathFieldBuffer {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}
