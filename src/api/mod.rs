//! Math Editor WASM API
//!
//! This module provides the JavaScript-facing API for the editor.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for logging, serialization and error conversion
//! - `editor`: The `MathEditor` handle wired to the page controls

pub mod helpers;
pub mod editor;

pub use editor::MathEditor;
