//! Project gallery with category filter buttons

use std::collections::HashSet;

use leptos::prelude::*;

use crate::types::{ProjectCard, ProjectFilter};

/// Pseudo-category that matches every project.
pub const ALL_CATEGORIES: &str = "All";

/// `All` followed by each distinct category in first-seen order.
pub fn project_categories(projects: &[ProjectCard]) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(
            projects
                .iter()
                .filter(|p| seen.insert(p.category.as_str()))
                .map(|p| p.category.clone()),
        )
        .collect()
}

/// Whether `project` is visible with `category` selected.
pub fn matches_category(project: &ProjectCard, category: &str) -> bool {
    category == ALL_CATEGORIES || project.category == category
}

/// Projects visible with `category` selected, order preserved.
pub fn filter_projects<'a>(projects: &'a [ProjectCard], category: &str) -> Vec<&'a ProjectCard> {
    projects
        .iter()
        .filter(|p| matches_category(p, category))
        .collect()
}

/// Gallery section.
///
/// Every project is always rendered so the client script can re-filter
/// without a round trip. In [`ProjectFilter::Interactive`] mode cards outside
/// `selected` are marked `hidden`; in decorative mode the buttons carry no
/// action and all cards show.
#[component]
pub fn Projects(
    projects: Vec<ProjectCard>,
    #[prop(optional)] filter: ProjectFilter,
    /// Initially selected category, `All` when omitted
    #[prop(optional, into)]
    selected: Option<String>,
) -> impl IntoView {
    let categories = project_categories(&projects);
    let interactive = filter == ProjectFilter::Interactive;
    let selected = selected.unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let shown = filter_projects(&projects, &selected).len();
    tracing::debug!(
        total = projects.len(),
        shown,
        categories = categories.len(),
        mode = filter.as_str(),
        "rendering project gallery"
    );

    let buttons = categories
        .into_iter()
        .map(|category| {
            let class = if interactive && category == selected {
                "filter-btn active"
            } else {
                "filter-btn"
            };
            let action = interactive.then(|| format!("filter:{}", category));
            view! {
                <button class=class data-action=action>{category}</button>
            }
        })
        .collect::<Vec<_>>();

    let cards = projects
        .into_iter()
        .map(|project| {
            let hidden = interactive && !matches_category(&project, &selected);
            let category = project.category.clone();
            view! {
                <div class="project-card" data-category=category hidden=hidden>
                    <div class="project-image">{project.image}</div>
                    <div class="project-info">
                        <span class="project-category">{project.category}</span>
                        <h3 class="project-title">{project.title}</h3>
                        <p class="project-description">{project.description}</p>
                        <a href="#" class="project-link">"View Details →"</a>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="projects" class="projects-section" data-section="projects" data-filter-mode=filter.as_str()>
            <div class="section-container">
                <div class="section-header">
                    <h2 class="section-title">"Recent Projects"</h2>
                    <p class="section-subtitle">
                        "View examples of our completed work and satisfied clients"
                    </p>
                </div>

                <div class="filter-buttons">{buttons}</div>
                <div class="projects-grid">{cards}</div>
            </div>
        </section>
    }
}
