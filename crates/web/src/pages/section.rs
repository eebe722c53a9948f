// =============================================================================
// Timeless Web - Section Page
// =============================================================================
// Landing page for every menu destination other than home.
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::components::{CtaLink, Layout};
use crate::menu::find_link;

use super::not_found::NotFoundPage;

#[component]
pub fn SectionPage() -> impl IntoView {
    let pathname = use_location().pathname;

    move || match find_link(&pathname.get()) {
        Some(link) => view! {
            <Title text=format!("{} | Timeless Technology", link.label) />
            <Layout>
                <div class="page page-section">
                    <section class="section-hero">
                        <h1 class="section-title">{link.label}</h1>
                    </section>
                    <section class="cta-section">
                        <CtaLink href="/contact" label="Talk to Us" arrow=true />
                    </section>
                </div>
            </Layout>
        }
        .into_any(),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}
