//! Page composer: the ten sections in their fixed vertical order

use leptos::prelude::*;

use super::{
    About, Cta, Footer, Header, Hero, Pricing, Projects, Services, Testimonials, TrainedStaff,
};
use crate::SiteAssets;
use crate::types::{ProjectFilter, SiteContent};

/// `data-section` markers of the page, top to bottom.
pub const SECTION_ORDER: [&str; 10] = [
    "header",
    "hero",
    "services",
    "trained-staff",
    "about",
    "projects",
    "testimonials",
    "pricing",
    "cta",
    "footer",
];

/// The whole landing page. Every section is always present, once.
#[component]
pub fn Home(
    content: SiteContent,
    assets: SiteAssets,
    #[prop(optional)] project_filter: ProjectFilter,
) -> impl IntoView {
    let SiteContent {
        nav_links,
        process_steps,
        services,
        stats,
        about_features,
        projects,
        testimonials,
        plans,
        footer_sections,
    } = content;

    view! {
        <div class="app-container">
            <Header nav_links=nav_links logo_src=assets.logo() />
            <Hero
                process_steps=process_steps
                background_src=assets.team_photo()
                plumber_src=assets.plumber()
            />
            <Services services=services />
            <TrainedStaff />
            <About stats=stats features=about_features />
            <Projects projects=projects filter=project_filter />
            <Testimonials testimonials=testimonials />
            <Pricing plans=plans />
            <Cta />
            <Footer sections=footer_sections />
        </div>
    }
}
