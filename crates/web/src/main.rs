// =============================================================================
// Timeless Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use timeless_web::{init_logging, App, SiteConfig};

fn main() {
    let config = SiteConfig::from_env();
    init_logging(&config);

    log::info!("Starting Timeless Web ({:?})", config.environment);

    // Mount the Leptos app to the body
    leptos::mount::mount_to_body(App);
}
