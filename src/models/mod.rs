//! Models module for the Math Editor
//!
//! This module contains the document data model: typed lines and the
//! editing session that owns them.

pub mod line;
pub mod session;

// Re-export commonly used types
pub use line::{is_blank, Line, LineKind};
pub use session::Session;
