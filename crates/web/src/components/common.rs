// =============================================================================
// Timeless Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. CTA Link
// 2. Stat Tile
// 3. Service Card
// 4. Highlight Tile
// =============================================================================

use leptos::prelude::*;

use super::counter::AnimatedCounter;

// -----------------------------------------------------------------------------
// 1. CTA Link
// -----------------------------------------------------------------------------

/// Call-to-action link styles.
#[derive(Clone, Copy, Default, PartialEq)]
pub enum CtaVariant {
    #[default]
    Primary,
    Outline,
    Gradient,
}

impl CtaVariant {
    fn class(&self) -> &'static str {
        match self {
            CtaVariant::Primary => "cta cta-primary",
            CtaVariant::Outline => "cta cta-outline",
            CtaVariant::Gradient => "cta cta-gradient",
        }
    }
}

/// Router-aware call-to-action link.
#[component]
pub fn CtaLink(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    #[prop(optional)] variant: CtaVariant,
    #[prop(optional)] arrow: bool,
) -> impl IntoView {
    view! {
        <a href=href class=variant.class()>
            <span>{label}</span>
            {arrow.then(|| view! { <span class="cta-arrow">"→"</span> })}
        </a>
    }
}

// -----------------------------------------------------------------------------
// 2. Stat Tile
// -----------------------------------------------------------------------------

/// Animated statistic with a caption underneath.
#[component]
pub fn StatTile(
    value: i64,
    #[prop(into)] suffix: String,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <AnimatedCounter end=value suffix=suffix />
            <div class="stat-label">{label}</div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Service Card
// -----------------------------------------------------------------------------

/// Image card for an offered service.
#[component]
pub fn ServiceCard(#[prop(into)] title: String, #[prop(into)] image: String) -> impl IntoView {
    view! {
        <div class="service-card">
            <img src=image alt=title.clone() class="service-card-img" loading="lazy" />
            <div class="service-card-title">{title}</div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Highlight Tile
// -----------------------------------------------------------------------------

#[component]
pub fn HighlightTile(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="highlight-tile">
            <div class="highlight-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}
