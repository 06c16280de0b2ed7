//! Document lines
//!
//! A document is an ordered list of typed lines. Each line is either a
//! paragraph of plain text or a LaTeX math expression, stored verbatim and
//! only interpreted at render time.

use serde::{Deserialize, Serialize};

/// Discriminant of a [`Line`], used for logging and JS-side dispatch
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Text,
    Math,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Text => "text",
            LineKind::Math => "math",
        }
    }
}

/// One entry in the document
///
/// Serializes as `{"kind": "text" | "math", "value": "..."}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Line {
    /// Plain text paragraph
    Text(String),

    /// LaTeX source of an equation
    Math(String),
}

impl Line {
    /// Create a text line, or `None` if `value` is blank
    pub fn text(value: impl Into<String>) -> Option<Self> {
        non_blank(value.into()).map(Line::Text)
    }

    /// Create a math line, or `None` if `value` is blank
    ///
    /// Malformed LaTeX is accepted as-is.
    pub fn math(value: impl Into<String>) -> Option<Self> {
        non_blank(value.into()).map(Line::Math)
    }

    pub fn kind(&self) -> LineKind {
        match self {
            Line::Text(_) => LineKind::Text,
            Line::Math(_) => LineKind::Math,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Line::Text(value) | Line::Math(value) => value,
        }
    }

    pub fn is_math(&self) -> bool {
        matches!(self, Line::Math(_))
    }
}

/// True if `value` has no content once surrounding whitespace is removed
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn non_blank(value: String) -> Option<String> {
    if is_blank(&value) {
        None
    } else {
        Some(value)
    }
}
