//! Math + Text Editor WASM Module
//!
//! A document of interleaved text and LaTeX lines, previewed through KaTeX
//! and exported to PDF through jsPDF. Input comes from a MathLive math field
//! and a plain textarea.

pub mod error;
pub mod config;
pub mod models;
pub mod input;
pub mod renderers;
pub mod export;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use config::EditorConfig;
pub use error::{ConfigError, ExportError};
pub use models::{Line, LineKind, Session};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }

    log::info!("Math Editor WASM module initialized");
}
