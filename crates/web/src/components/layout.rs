// =============================================================================
// Timeless Web - Layout Component
// =============================================================================

use leptos::prelude::*;

use super::{Footer, Navbar};

/// Page shell: navigation bar, content, footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="layout-content">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
