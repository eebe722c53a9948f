// =============================================================================
// Timeless Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Theme State
// =============================================================================

use leptos::prelude::*;

use crate::services::{DocumentMarker, LocalThemeStore};
use crate::theme::ThemeController;

// -----------------------------------------------------------------------------
// 1. Theme State
// -----------------------------------------------------------------------------

type BrowserThemeController = ThemeController<LocalThemeStore, DocumentMarker>;

/// Process-wide theme flag provided via Leptos context.
///
/// The navigation bar is the only writer; other components read
/// `dark_mode` or style against the document's `dark` class.
#[derive(Clone, Copy)]
pub struct ThemeState {
    /// Whether the site is in dark mode.
    pub dark_mode: ReadSignal<bool>,
    set_dark_mode: WriteSignal<bool>,
    controller: StoredValue<BrowserThemeController>,
}

impl ThemeState {
    /// Seed from localStorage and apply the marker, before anything renders.
    pub fn init() -> Self {
        let controller = ThemeController::init(LocalThemeStore, DocumentMarker);
        let (dark_mode, set_dark_mode) = signal(controller.is_dark());
        log::info!("Theme initialized as {}", controller.theme());

        Self {
            dark_mode,
            set_dark_mode,
            controller: StoredValue::new(controller),
        }
    }

    /// Update memory, storage and the document marker together.
    pub fn set(&self, dark: bool) {
        self.controller.update_value(|controller| controller.set(dark));
        self.set_dark_mode.set(dark);
    }

    /// Flip the theme.
    pub fn toggle(&self) {
        self.set(!self.dark_mode.get_untracked());
    }
}
