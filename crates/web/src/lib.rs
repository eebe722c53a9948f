// =============================================================================
// Timeless Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod components;
pub mod config;
pub mod counter;
pub mod error;
pub mod menu;
pub mod navigation;
pub mod pages;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use config::SiteConfig;
pub use error::WebError;
pub use state::ThemeState;

// -----------------------------------------------------------------------------
// 3. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logger at the configured level.
pub fn init_logging(config: &SiteConfig) {
    console_error_panic_hook::set_once();
    // Ignore if a logger is already installed
    let _ = console_log::init_with_level(config.log_level);
}

/// Mount the Leptos app to the DOM (for external callers).
#[wasm_bindgen]
pub fn mount() {
    let config = SiteConfig::from_env();
    init_logging(&config);
    log::info!("Mounting Timeless Web ({:?})...", config.environment);
    leptos::mount::mount_to_body(app::App);
}
