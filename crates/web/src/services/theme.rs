// =============================================================================
// Timeless Web - Browser Theme Backends
// =============================================================================
// Persists the theme preference in localStorage and mirrors it onto the
// `dark` class of the document root.
// =============================================================================

use crate::config::THEME_STORAGE_KEY;
use crate::error::WebError;
use crate::theme::{PresentationMarker, Theme, ThemeStore};
use crate::utils::{document_root, local_storage};

/// Raw-string theme slot in `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Result<Option<String>, WebError> {
        local_storage()?
            .get_item(THEME_STORAGE_KEY)
            .map_err(|err| WebError::Storage(WebError::describe(&err)))
    }

    fn save(&self, value: &str) -> Result<(), WebError> {
        local_storage()?
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|err| WebError::Storage(WebError::describe(&err)))
    }
}

/// Toggles the `dark` class on `<html>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentMarker;

impl PresentationMarker for DocumentMarker {
    fn apply(&self, theme: Theme) -> Result<(), WebError> {
        document_root()?
            .class_list()
            .toggle_with_force("dark", theme.is_dark())
            .map(|_| ())
            .map_err(|err| WebError::Dom(WebError::describe(&err)))
    }
}
