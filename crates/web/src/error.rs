// =============================================================================
// Timeless Web - Error Types
// =============================================================================
// Errors raised by the browser adapters. Widgets never surface these to the
// user; they log and fall back to their documented defaults.
// =============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Browser adapter error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WebError {
    #[error("Local storage is unavailable")]
    StorageUnavailable,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No document available")]
    NoDocument,

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Intersection observer error: {0}")]
    Observer(String),
}

impl WebError {
    /// Render a raw JS exception into a readable message.
    pub(crate) fn describe(value: &JsValue) -> String {
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value))
    }
}
