// =============================================================================
// Timeless Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// =============================================================================

use web_sys::{Element, Storage, Window};

use crate::error::WebError;

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object, if running in one.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current vertical scroll offset; 0 outside a browser.
pub fn scroll_offset() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// The `<html>` element.
pub fn document_root() -> Result<Element, WebError> {
    window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .ok_or(WebError::NoDocument)
}

/// The origin's `localStorage`.
pub fn local_storage() -> Result<Storage, WebError> {
    window()
        .ok_or(WebError::StorageUnavailable)?
        .local_storage()
        .map_err(|err| WebError::Storage(WebError::describe(&err)))?
        .ok_or(WebError::StorageUnavailable)
}
