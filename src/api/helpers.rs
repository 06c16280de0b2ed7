//! Shared helpers for WASM API operations
//!
//! This module contains common patterns for logging, serialization,
//! deserialization, and error conversion across the API.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        ::log::debug!("[WASM] {}", format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        ::log::info!("[WASM] {}", format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        ::log::warn!("[WASM] ⚠️ {}", format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        ::log::error!("[WASM] ❌ {}", format!($($arg)*))
    };
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| to_js_error(format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize + ?Sized>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| to_js_error(format!("{}: {}", error_context, e)))
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an error and convert it to a JsValue
pub fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    let msg = err.to_string();
    crate::wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}
