// =============================================================================
// Timeless Web - Navigation Bar State
// =============================================================================
// Table of Contents:
// 1. Types
// 2. Transitions
// 3. Derived Presentation
// =============================================================================
//
// Host-independent model of the navigation bar. The component feeds browser
// events through `NavigationState::apply` and renders from the derived class
// helpers, so every behavior here is testable without a DOM.

use crate::config::SCROLL_THRESHOLD_PX;

// -----------------------------------------------------------------------------
// 1. Types
// -----------------------------------------------------------------------------

/// Direction of the most recent scroll movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Up,
    Down,
}

/// Which menu surface a link was selected from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Desktop,
    Mobile,
}

/// Navigation bar state, alive for as long as the bar is mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub menu_open: bool,
    pub submenu_open: bool,
    pub scrolled: bool,
    pub scroll_direction: ScrollDirection,
    pub dark_mode: bool,
    /// Offset seen by the previous scroll event.
    pub last_offset: f64,
}

/// Events the bar reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEvent {
    /// Window scrolled to the given vertical offset.
    Scrolled(f64),
    /// Hamburger control pressed.
    ToggleMenu,
    /// Backdrop behind the mobile drawer tapped.
    DismissMenu,
    /// Group ("Services") button pressed.
    ToggleSubmenu,
    /// A top-level link was followed.
    SelectLink(Surface),
    /// A link inside a group was followed.
    SelectChildLink(Surface),
    /// Theme flag changed.
    ThemeChanged(bool),
}

impl NavigationState {
    /// Fresh state for a bar mounted at `offset` with the given theme.
    pub fn new(offset: f64, dark_mode: bool) -> Self {
        Self {
            scrolled: offset > SCROLL_THRESHOLD_PX,
            dark_mode,
            last_offset: offset,
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // 2. Transitions
    // -------------------------------------------------------------------------

    /// Pure transition: `(state, event) -> state`.
    pub fn apply(self, event: NavEvent) -> Self {
        match event {
            NavEvent::Scrolled(offset) => {
                let scroll_direction = if offset > self.last_offset {
                    ScrollDirection::Down
                } else {
                    ScrollDirection::Up
                };
                Self {
                    scrolled: offset > SCROLL_THRESHOLD_PX,
                    scroll_direction,
                    last_offset: offset,
                    ..self
                }
            }
            NavEvent::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            NavEvent::DismissMenu => Self {
                menu_open: false,
                ..self
            },
            NavEvent::ToggleSubmenu => Self {
                submenu_open: !self.submenu_open,
                ..self
            },
            NavEvent::SelectLink(surface) | NavEvent::SelectChildLink(surface) => Self {
                submenu_open: false,
                menu_open: match surface {
                    Surface::Mobile => false,
                    Surface::Desktop => self.menu_open,
                },
                ..self
            },
            NavEvent::ThemeChanged(dark_mode) => Self { dark_mode, ..self },
        }
    }

    // -------------------------------------------------------------------------
    // 3. Derived Presentation
    // -------------------------------------------------------------------------

    /// Whether the bar is slid out of view.
    pub fn is_hidden(&self) -> bool {
        self.scroll_direction == ScrollDirection::Down
    }

    /// Class list for the outer `<nav>`.
    pub fn bar_class(&self) -> String {
        let mut class = String::from("site-nav");
        class.push_str(if self.is_hidden() { " nav-hidden" } else { " nav-shown" });
        class.push_str(if self.scrolled { " nav-scrolled" } else { " nav-resting" });
        class
    }

    /// Class for the logo image; it shrinks once the page is scrolled.
    pub fn logo_class(&self) -> &'static str {
        if self.scrolled {
            "nav-logo-img compact"
        } else {
            "nav-logo-img"
        }
    }

    /// Class for the mobile drawer.
    pub fn drawer_class(&self) -> &'static str {
        if self.menu_open {
            "mobile-drawer open"
        } else {
            "mobile-drawer"
        }
    }

    /// Label for the drawer's theme toggle; names the mode it switches to.
    pub fn theme_toggle_label(&self) -> &'static str {
        if self.dark_mode {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}

/// Underline class for a desktop link.
pub fn link_underline_class(active: bool) -> &'static str {
    if active {
        "nav-underline active"
    } else {
        "nav-underline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scroll_through(offsets: &[f64]) -> NavigationState {
        offsets
            .iter()
            .fold(NavigationState::new(0.0, false), |state, &y| {
                state.apply(NavEvent::Scrolled(y))
            })
    }

    #[test]
    fn test_scroll_down_hides_bar() {
        let state = scroll_through(&[10.0, 40.0, 90.0]);
        assert_eq!(state.scroll_direction, ScrollDirection::Down);
        assert!(state.scrolled);
        assert!(state.bar_class().contains("nav-hidden"));
        assert!(state.bar_class().contains("nav-scrolled"));
    }

    #[test]
    fn test_scroll_up_or_equal_shows_bar() {
        let state = scroll_through(&[200.0, 150.0]);
        assert_eq!(state.scroll_direction, ScrollDirection::Up);

        let state = scroll_through(&[200.0, 200.0]);
        assert_eq!(state.scroll_direction, ScrollDirection::Up);
        assert!(state.bar_class().contains("nav-shown"));
    }

    #[test]
    fn test_scrolled_threshold_is_strict() {
        assert!(!scroll_through(&[60.0]).scrolled);
        assert!(scroll_through(&[60.5]).scrolled);
        assert_eq!(scroll_through(&[61.0]).logo_class(), "nav-logo-img compact");
    }

    #[test]
    fn test_mount_seeds_from_live_offset() {
        let state = NavigationState::new(500.0, true);
        assert!(state.scrolled);
        assert!(state.dark_mode);
        assert_eq!(state.scroll_direction, ScrollDirection::Up);

        // First event below the mount offset is an upward scroll
        let state = state.apply(NavEvent::Scrolled(480.0));
        assert_eq!(state.scroll_direction, ScrollDirection::Up);
    }

    #[test]
    fn test_child_link_on_mobile_closes_drawer_and_dropdown() {
        let state = NavigationState::default()
            .apply(NavEvent::ToggleMenu)
            .apply(NavEvent::ToggleSubmenu);
        assert!(state.menu_open && state.submenu_open);

        let state = state.apply(NavEvent::SelectChildLink(Surface::Mobile));
        assert!(!state.menu_open);
        assert!(!state.submenu_open);
    }

    #[test]
    fn test_child_link_on_desktop_closes_dropdown() {
        let state = NavigationState::default()
            .apply(NavEvent::ToggleSubmenu)
            .apply(NavEvent::SelectChildLink(Surface::Desktop));
        assert!(!state.submenu_open);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_opening_drawer_keeps_dropdown() {
        let state = NavigationState::default()
            .apply(NavEvent::ToggleSubmenu)
            .apply(NavEvent::ToggleMenu);
        assert!(state.menu_open);
        assert!(state.submenu_open);
        assert_eq!(state.drawer_class(), "mobile-drawer open");
    }

    #[test]
    fn test_mobile_link_closes_both() {
        let state = NavigationState::default()
            .apply(NavEvent::ToggleMenu)
            .apply(NavEvent::ToggleSubmenu)
            .apply(NavEvent::SelectLink(Surface::Mobile));
        assert!(!state.menu_open);
        assert!(!state.submenu_open);
    }

    #[test]
    fn test_backdrop_dismiss() {
        let state = NavigationState::default()
            .apply(NavEvent::ToggleMenu)
            .apply(NavEvent::ToggleSubmenu)
            .apply(NavEvent::DismissMenu);
        assert!(!state.menu_open);
        assert!(state.submenu_open);
    }

    #[test]
    fn test_theme_label_names_target_mode() {
        let state = NavigationState::default();
        assert_eq!(state.theme_toggle_label(), "Dark Mode");
        let state = state.apply(NavEvent::ThemeChanged(true));
        assert_eq!(state.theme_toggle_label(), "Light Mode");
    }

    #[test]
    fn test_underline_class() {
        assert_eq!(link_underline_class(true), "nav-underline active");
        assert_eq!(link_underline_class(false), "nav-underline");
    }

    proptest! {
        #[test]
        fn prop_scroll_state_tracks_latest_offsets(
            offsets in prop::collection::vec(0.0f64..5000.0, 2..64)
        ) {
            let state = scroll_through(&offsets);
            let last = offsets[offsets.len() - 1];
            let previous = offsets[offsets.len() - 2];

            prop_assert_eq!(state.scrolled, last > SCROLL_THRESHOLD_PX);
            prop_assert_eq!(state.scroll_direction == ScrollDirection::Down, last > previous);
            prop_assert_eq!(state.last_offset, last);
        }

        #[test]
        fn prop_scroll_never_touches_menus(
            offsets in prop::collection::vec(0.0f64..5000.0, 1..32)
        ) {
            let start = NavigationState::default()
                .apply(NavEvent::ToggleMenu)
                .apply(NavEvent::ToggleSubmenu);
            let state = offsets
                .iter()
                .fold(start, |state, &y| state.apply(NavEvent::Scrolled(y)));

            prop_assert!(state.menu_open);
            prop_assert!(state.submenu_open);
        }
    }
}
