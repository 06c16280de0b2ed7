//! Display list for the preview
//!
//! One block per stored line, in document order. The JS side can either
//! consume the blocks directly or drop [`preview_html`] into the preview pane.

use serde::{Deserialize, Serialize};

use crate::models::Line;
use crate::renderers::MathRenderer;
use crate::utils::escape_html;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderBlock {
    /// Raw text, displayed as-is
    Text { text: String },

    /// Rendered equation with its source
    Math { latex: String, markup: String },
}

impl RenderBlock {
    pub fn from_line<R: MathRenderer + ?Sized>(line: &Line, renderer: &R) -> Self {
        match line {
            Line::Text(text) => RenderBlock::Text { text: text.clone() },
            Line::Math(latex) => RenderBlock::Math {
                latex: latex.clone(),
                markup: renderer.render(latex),
            },
        }
    }
}

/// Preview pane HTML: one paragraph per block
///
/// Text is escaped; math markup is trusted renderer output and inserted as-is.
pub fn preview_html(blocks: &[RenderBlock]) -> String {
    let mut html = String::new();
    for block in blocks {
        match block {
            RenderBlock::Text { text } => {
                html.push_str("<p>");
                html.push_str(&escape_html(text));
                html.push_str("</p>");
            }
            RenderBlock::Math { markup, .. } => {
                html.push_str(r#"<p class="math">"#);
                html.push_str(markup);
                html.push_str("</p>");
            }
        }
    }
    html
}
