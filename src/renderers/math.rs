//! LaTeX to markup rendering
//!
//! Rendering never fails. Invalid input produces best-effort markup so the
//! preview and the PDF export always have something to show.

use serde::{Deserialize, Serialize};

use crate::utils::escape_html;

/// Converts LaTeX source into displayable markup
pub trait MathRenderer {
    fn render(&self, latex: &str) -> String;
}

/// Options passed through to the underlying renderer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderOpts {
    /// Block (display) style instead of inline
    pub display_mode: bool,

    /// Always false: malformed input renders as an error span instead
    pub throw_on_error: bool,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            display_mode: false,
            throw_on_error: false,
        }
    }
}

/// Shows the LaTeX source itself, escaped, in a marked span
///
/// Used when no typesetting engine is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct FallbackRenderer;

impl MathRenderer for FallbackRenderer {
    fn render(&self, latex: &str) -> String {
        format!(
            r#"<span class="math-fallback" data-latex="{0}">{0}</span>"#,
            escape_html(latex)
        )
    }
}
