// =============================================================================
// Timeless Web - Theme Controller
// =============================================================================
// Table of Contents:
// 1. Theme
// 2. Backends
// 3. Controller
// =============================================================================

use std::fmt;

use crate::error::WebError;

// -----------------------------------------------------------------------------
// 1. Theme
// -----------------------------------------------------------------------------

/// Site colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Parse a stored value. Only `"dark"` selects the dark theme.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// 2. Backends
// -----------------------------------------------------------------------------

/// Durable key-value slot holding the theme string.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, WebError>;
    fn save(&self, value: &str) -> Result<(), WebError>;
}

/// Document-wide marker other components style against.
pub trait PresentationMarker {
    fn apply(&self, theme: Theme) -> Result<(), WebError>;
}

// -----------------------------------------------------------------------------
// 3. Controller
// -----------------------------------------------------------------------------

/// Single writer for the theme flag, its persisted copy and the marker.
pub struct ThemeController<S, M> {
    store: S,
    marker: M,
    theme: Theme,
}

impl<S: ThemeStore, M: PresentationMarker> ThemeController<S, M> {
    /// Seed from storage and push the result to storage and marker.
    ///
    /// Unreadable storage or a missing key yields the light theme.
    pub fn init(store: S, marker: M) -> Self {
        let theme = match store.load() {
            Ok(Some(value)) => Theme::parse(&value),
            Ok(None) => Theme::Light,
            Err(err) => {
                log::warn!("Theme preference unreadable, using light: {}", err);
                Theme::Light
            }
        };

        let controller = Self { store, marker, theme };
        controller.sync();
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Update memory, storage and the marker together.
    pub fn set(&mut self, dark: bool) {
        self.theme = Theme::from_dark(dark);
        log::debug!("Theme set to {}", self.theme);
        self.sync();
    }

    /// Flip the theme and return the new dark flag.
    pub fn toggle(&mut self) -> bool {
        let dark = !self.is_dark();
        self.set(dark);
        dark
    }

    fn sync(&self) {
        if let Err(err) = self.marker.apply(self.theme) {
            log::warn!("Failed to apply theme marker: {}", err);
        }
        if let Err(err) = self.store.save(self.theme.as_str()) {
            log::warn!("Failed to persist theme: {}", err);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    /// In-memory store; `fail` makes every access error.
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        pub value: Rc<RefCell<Option<String>>>,
        pub fail: bool,
    }

    impl MemoryStore {
        pub fn with(value: &str) -> Self {
            Self {
                value: Rc::new(RefCell::new(Some(value.to_string()))),
                fail: false,
            }
        }

        pub fn broken() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn get(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Result<Option<String>, WebError> {
            if self.fail {
                return Err(WebError::StorageUnavailable);
            }
            Ok(self.value.borrow().clone())
        }

        fn save(&self, value: &str) -> Result<(), WebError> {
            if self.fail {
                return Err(WebError::StorageUnavailable);
            }
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    /// Records the last theme pushed to the document.
    #[derive(Clone, Default)]
    pub struct RecordingMarker {
        pub dark: Rc<Cell<Option<bool>>>,
    }

    impl PresentationMarker for RecordingMarker {
        fn apply(&self, theme: Theme) -> Result<(), WebError> {
            self.dark.set(Some(theme.is_dark()));
            Ok(())
        }
    }
}
