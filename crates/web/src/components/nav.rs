// =============================================================================
// Timeless Web - Navigation Bar Component
// =============================================================================
// Fixed navigation bar shown on every page.
// Hides while scrolling down, condenses once scrolled past the hero,
// owns the theme toggle, and collapses into a slide-out drawer on mobile.
// =============================================================================

use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::menu::{NavEntry, NAV_ITEMS};
use crate::navigation::{link_underline_class, NavEvent, NavigationState, Surface};
use crate::state::ThemeState;
use crate::utils::scroll_offset;

/// Apply an event to the bar's state.
fn send(nav: RwSignal<NavigationState>, event: NavEvent) {
    nav.update(|state| *state = state.apply(event));
}

/// Site navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<ThemeState>();
    let pathname = use_location().pathname;

    let nav = RwSignal::new(NavigationState::new(
        scroll_offset(),
        theme.dark_mode.get_untracked(),
    ));

    // Mirror the global theme flag into the bar
    Effect::new(move |_| {
        let dark = theme.dark_mode.get();
        send(nav, NavEvent::ThemeChanged(dark));
    });

    // Scroll listener lives exactly as long as the bar
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        send(nav, NavEvent::Scrolled(scroll_offset()));
    });
    log::debug!("Navbar mounted, scroll listener attached");
    on_cleanup(move || {
        scroll_listener.remove();
        log::debug!("Navbar unmounted, scroll listener removed");
    });

    let toggle_theme = move |_| theme.toggle();

    view! {
        <nav class=move || nav.with(|state| state.bar_class())>
            <div class="nav-inner">
                // Logo
                <a href="/" class="nav-logo" on:click=move |_| send(nav, NavEvent::SelectLink(Surface::Desktop))>
                    <img
                        src="/images/timeless.png"
                        alt="Timeless Technology Logo"
                        class=move || nav.with(|state| state.logo_class())
                    />
                </a>

                // Desktop menu (hidden on mobile)
                <div class="nav-links desktop-only">
                    {NAV_ITEMS
                        .iter()
                        .map(|entry| menu_entry(*entry, Surface::Desktop, nav, pathname))
                        .collect_view()}

                    <button
                        class="theme-toggle"
                        aria-label="Toggle theme"
                        on:click=toggle_theme
                    >
                        <ThemeIcon dark=theme.dark_mode />
                    </button>
                </div>

                // Hamburger button (mobile only)
                <button
                    class="hamburger-btn mobile-only"
                    aria-label="Toggle menu"
                    aria-expanded=move || nav.with(|state| state.menu_open).to_string()
                    on:click=move |_| send(nav, NavEvent::ToggleMenu)
                >
                    <span class=move || if nav.with(|state| state.menu_open) { "hamburger-line open line-1" } else { "hamburger-line line-1" }></span>
                    <span class=move || if nav.with(|state| state.menu_open) { "hamburger-line open line-2" } else { "hamburger-line line-2" }></span>
                    <span class=move || if nav.with(|state| state.menu_open) { "hamburger-line open line-3" } else { "hamburger-line line-3" }></span>
                </button>
            </div>

            // Mobile backdrop (closes drawer on tap)
            <div
                class=move || if nav.with(|state| state.menu_open) { "mobile-backdrop visible" } else { "mobile-backdrop" }
                on:click=move |_| send(nav, NavEvent::DismissMenu)
            ></div>

            // Mobile drawer
            <div class=move || nav.with(|state| state.drawer_class())>
                <div class="drawer-nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|entry| menu_entry(*entry, Surface::Mobile, nav, pathname))
                        .collect_view()}
                </div>

                <button class="drawer-theme-toggle" on:click=toggle_theme>
                    <ThemeIcon dark=theme.dark_mode />
                    <span>{move || nav.with(|state| state.theme_toggle_label())}</span>
                </button>
            </div>
        </nav>
    }
}

/// Render one menu entry for the given surface.
fn menu_entry(
    entry: NavEntry,
    surface: Surface,
    nav: RwSignal<NavigationState>,
    pathname: Memo<String>,
) -> AnyView {
    match entry {
        NavEntry::Link(link) => {
            let is_current = move || pathname.with(|path| entry.is_active(path));
            match surface {
                Surface::Desktop => view! {
                    <a
                        href=link.path
                        class="nav-link"
                        on:click=move |_| send(nav, NavEvent::SelectLink(surface))
                    >
                        {link.label}
                        <span class=move || link_underline_class(is_current())></span>
                    </a>
                }
                .into_any(),
                Surface::Mobile => view! {
                    <a
                        href=link.path
                        class=move || if is_current() { "mobile-nav-link active" } else { "mobile-nav-link" }
                        on:click=move |_| send(nav, NavEvent::SelectLink(surface))
                    >
                        {link.label}
                    </a>
                }
                .into_any(),
            }
        }
        NavEntry::Group { label, children } => {
            let (group_class, toggle_class, list_class, item_class) = match surface {
                Surface::Desktop => ("nav-group", "nav-group-toggle", "nav-dropdown", "dropdown-item"),
                Surface::Mobile => ("drawer-group", "drawer-group-toggle", "drawer-sublinks", "mobile-nav-link"),
            };

            view! {
                <div class=group_class>
                    <button
                        class=toggle_class
                        aria-expanded=move || nav.with(|state| state.submenu_open).to_string()
                        on:click=move |_| send(nav, NavEvent::ToggleSubmenu)
                    >
                        {label}
                    </button>

                    <Show when=move || nav.with(|state| state.submenu_open)>
                        <div class=list_class>
                            {children
                                .iter()
                                .map(|child| {
                                    view! {
                                        <a
                                            href=child.path
                                            class=item_class
                                            on:click=move |_| send(nav, NavEvent::SelectChildLink(surface))
                                        >
                                            {child.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
    }
}

/// Sun while dark (switch to light), moon while light.
#[component]
fn ThemeIcon(dark: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Show
            when=move || dark.get()
            fallback=|| view! {
                <svg class="theme-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path>
                </svg>
            }
        >
            <svg class="theme-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="12" cy="12" r="4"></circle>
                <path d="M12 2v2"></path>
                <path d="M12 20v2"></path>
                <path d="m4.93 4.93 1.41 1.41"></path>
                <path d="m17.66 17.66 1.41 1.41"></path>
                <path d="M2 12h2"></path>
                <path d="M20 12h2"></path>
                <path d="m6.34 17.66-1.41 1.41"></path>
                <path d="m19.07 4.93-1.41 1.41"></path>
            </svg>
        </Show>
    }
}
