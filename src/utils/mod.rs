//! Utility modules for the Math Editor

pub mod html;

// Re-export commonly used types
pub use html::escape_html;
