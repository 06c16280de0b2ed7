//! Renderers module for the Math Editor
//!
//! This module turns stored lines into displayable blocks: LaTeX to markup
//! through a [`MathRenderer`], and blocks to the preview HTML.

pub mod math;
pub mod katex;
pub mod display_list;

// Re-export commonly used types
pub use math::{FallbackRenderer, MathRenderer, RenderOpts};
pub use katex::KatexRenderer;
pub use display_list::{preview_html, RenderBlock};
