// =============================================================================
// Timeless Web - Footer Component
// =============================================================================
// Global footer shown on all pages
// =============================================================================

use leptos::prelude::*;

use crate::menu::{NavEntry, NAV_ITEMS, SERVICE_LINKS};

/// Site footer with company and service links.
#[component]
pub fn Footer() -> impl IntoView {
    let company_links = NAV_ITEMS
        .iter()
        .filter_map(|entry| match entry {
            NavEntry::Link(link) => Some(*link),
            NavEntry::Group { .. } => None,
        })
        .map(|link| view! { <a href=link.path class="footer-link">{link.label}</a> })
        .collect_view();

    let service_links = SERVICE_LINKS
        .iter()
        .map(|link| view! { <a href=link.path class="footer-link">{link.label}</a> })
        .collect_view();

    view! {
        <footer class="site-footer">
            <div class="footer-main">
                // Brand Column
                <div class="footer-brand-col">
                    <a href="/" class="footer-logo-link">
                        <img src="/images/timeless.png" alt="Timeless Technology" class="footer-logo-img" />
                    </a>
                    <p class="footer-tagline">"Building the future of technology."</p>
                </div>

                // Links Columns
                <div class="footer-links-grid">
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">"Company"</h5>
                        {company_links}
                    </div>
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">"Services"</h5>
                        {service_links}
                    </div>
                </div>
            </div>

            <div class="footer-divider"></div>

            <div class="footer-bottom-bar">
                <p class="footer-copyright">"© 2025 Timeless Technology. All rights reserved."</p>
            </div>
        </footer>
    }
}
