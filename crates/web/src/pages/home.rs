// =============================================================================
// Timeless Web - Home Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{CtaLink, CtaVariant, HighlightTile, Layout, ServiceCard, StatTile};

/// Headline statistic: (value, suffix, caption).
const STATS: &[(i64, &str, &str)] = &[
    (150, "+", "Projects Completed"),
    (50, "+", "Happy Clients"),
    (5, "+", "Years Experience"),
    (24, "/7", "Support Available"),
];

const SERVICES: &[(&str, &str)] = &[
    ("Microsoft 365", "/images/microsoft365.jpg"),
    ("Local Area Network", "/images/lan.jpg"),
    ("IP PBX Solution", "/images/pbx.jpg"),
];

const BENEFITS: &[&str] = &[
    "Cutting-edge technology stack",
    "Agile development methodology",
    "Dedicated project management",
    "Post-launch support and maintenance",
    "Scalable and secure solutions",
    "Competitive pricing",
];

const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("🛡️", "Secure & Reliable", "Enterprise-grade security standards"),
    ("👥", "Expert Team", "Skilled professionals at your service"),
    ("🏆", "Award Winning", "Recognized for excellence"),
    ("→", "Future Ready", "Built for tomorrow's challenges"),
];

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Timeless Technology" />
        <Layout>
            <div class="page page-home">
                // ═══════════════════════════════════════════════════════════
                // HERO
                // ═══════════════════════════════════════════════════════════
                <section class="hero">
                    <div class="hero-overlay"></div>
                    <div class="hero-content">
                        <h1 class="hero-headline">
                            "Building the"
                            <span class="headline-accent">" Future "</span>
                            "of Technology"
                        </h1>
                        <p class="hero-description">
                            "We create innovative digital solutions that empower businesses to thrive in the modern world. "
                            "Our digital offers start from the needs and wants of you, our customer. As technology advances "
                            "and users evolve, we tailor our service scope to meet the complex demands of businesses and users. "
                            "We strive to ensure that our solutions fit into your current ways of working, so you need not "
                            "change how you work in order to employ the system."
                        </p>
                        <div class="hero-buttons">
                            <CtaLink href="/contact" label="Get Started" />
                            <CtaLink href="/portfolio" label="View Our Work" variant=CtaVariant::Outline />
                        </div>
                    </div>
                </section>

                // ═══════════════════════════════════════════════════════════
                // STATS
                // ═══════════════════════════════════════════════════════════
                <section class="stats-section">
                    <div class="stats-grid">
                        {STATS
                            .iter()
                            .map(|&(value, suffix, label)| view! {
                                <StatTile value=value suffix=suffix label=label />
                            })
                            .collect_view()}
                    </div>
                </section>

                // ═══════════════════════════════════════════════════════════
                // SERVICES
                // ═══════════════════════════════════════════════════════════
                <section class="services-section">
                    <h2 class="section-title">"Our Services"</h2>
                    <div class="services-grid">
                        {SERVICES
                            .iter()
                            .map(|&(title, image)| view! { <ServiceCard title=title image=image /> })
                            .collect_view()}
                    </div>
                </section>

                // ═══════════════════════════════════════════════════════════
                // WHY CHOOSE US
                // ═══════════════════════════════════════════════════════════
                <section class="why-section">
                    <div class="why-grid">
                        <div class="why-text">
                            <h2 class="section-title">"Why Choose Timeless Technology?"</h2>
                            <p class="section-desc">
                                "We combine technical expertise with business acumen to deliver solutions that not only "
                                "work flawlessly but also drive real business results."
                            </p>
                            <ul class="benefit-list">
                                {BENEFITS
                                    .iter()
                                    .map(|benefit| view! {
                                        <li class="benefit">
                                            <span class="benefit-check">"✓"</span>
                                            <span>{*benefit}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div class="highlight-grid">
                            {HIGHLIGHTS
                                .iter()
                                .map(|&(icon, title, description)| view! {
                                    <HighlightTile icon=icon title=title description=description />
                                })
                                .collect_view()}
                        </div>
                    </div>
                </section>

                // ═══════════════════════════════════════════════════════════
                // CTA
                // ═══════════════════════════════════════════════════════════
                <section class="cta-section">
                    <h2 class="section-title">"Ready to Transform Your Business?"</h2>
                    <p class="section-desc">
                        "Let's discuss how we can help you achieve your technology goals and stay ahead of the competition."
                    </p>
                    <CtaLink href="/contact" label="Start Your Project" variant=CtaVariant::Gradient arrow=true />
                </section>
            </div>
        </Layout>
    }
}
