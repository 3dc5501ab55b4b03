//! # plumco-site
//!
//! Leptos SSR renderer for the Plumco plumbing services landing page.
//!
//! The page is a fixed stack of sections (header, hero, services, staff,
//! about, projects, testimonials, pricing, call to action, footer) rendered
//! from one [`types::SiteContent`] value into a single static HTML file.
//!
//! ## Quick Start
//!
//! ```rust
//! use plumco_site::{render_site, SiteAssets, SiteOptions, types::SiteContent};
//!
//! let html = render_site(
//!     &SiteContent::plumco(),
//!     &SiteAssets::default(),
//!     &SiteOptions::default(),
//! );
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"<div id="root">"#));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content records and the [`types::SiteContent`] provider
//! - [`content`] - built-in Plumco copy and validation
//! - [`menu`] - the header's open/closed menu state machine
//! - [`components`] - Leptos UI components, one per section
//! - [`styles`] - CSS and the inline interaction script
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is involved. The only client-side
//! behavior (menu toggle, project filter) is a small inline script.

pub mod components;
pub mod content;
pub mod menu;
pub mod styles;
pub mod types;

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use serde::{Deserialize, Serialize};
use types::{ProjectFilter, SiteContent};

pub use content::ContentError;

/// Mount element id used when none is configured.
pub const DEFAULT_MOUNT_ID: &str = "root";

/// Render the complete landing page.
///
/// Returns an HTML document including `<!DOCTYPE html>`. Missing images and
/// anchors without a matching section are not checked; the browser shows a
/// broken image or simply doesn't scroll.
///
/// # Example
///
/// ```rust
/// use plumco_site::{render_site, SiteAssets, SiteOptions, types::SiteContent};
///
/// let options = SiteOptions {
///     mount_id: "app".into(),
///     ..Default::default()
/// };
/// let html = render_site(&SiteContent::plumco(), &SiteAssets::default(), &options);
/// assert!(html.contains(r#"id="app""#));
/// ```
pub fn render_site(content: &SiteContent, assets: &SiteAssets, options: &SiteOptions) -> String {
    tracing::debug!(
        mount_id = %options.mount_id,
        asset_base = %assets.base,
        services = content.services.len(),
        projects = content.projects.len(),
        "rendering landing page"
    );

    let doc = view! {
        <SiteDocument content=content.clone() assets=assets.clone() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Where local images are served from.
///
/// Paths are joined onto `base` as-is; nothing is fetched or checked.
///
/// ```rust
/// use plumco_site::SiteAssets;
///
/// let assets = SiteAssets { base: "/static/img/".into() };
/// assert_eq!(assets.logo(), "/static/img/plumco-logo.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteAssets {
    /// Directory or URL prefix for bundled images
    pub base: String,
}

impl Default for SiteAssets {
    fn default() -> Self {
        Self {
            base: "assets".into(),
        }
    }
}

impl SiteAssets {
    /// Join `file` onto the asset base.
    pub fn path(&self, file: &str) -> String {
        let base = self.base.trim_end_matches('/');
        if base.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", base, file)
        }
    }

    /// Header logo
    pub fn logo(&self) -> String {
        self.path("plumco-logo.png")
    }

    /// Hero background
    pub fn team_photo(&self) -> String {
        self.path("team-5.jpg")
    }

    /// Hero overlay
    pub fn plumber(&self) -> String {
        self.path("plumber.png")
    }
}

/// Page-level settings that aren't content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    /// Document `<title>`
    pub title: String,
    /// Id of the element the page is mounted into
    pub mount_id: String,
    /// Project gallery button behavior
    pub project_filter: ProjectFilter,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: "Plumco - Professional Plumbing Services".into(),
            mount_id: DEFAULT_MOUNT_ID.into(),
            project_filter: ProjectFilter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::SECTION_ORDER;
    use crate::styles::{COLOR_PRIMARY, COLOR_PRIMARY_DARK};

    #[test]
    fn renders_complete_document() {
        let html = render_site(
            &SiteContent::plumco(),
            &SiteAssets::default(),
            &SiteOptions::default(),
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>Plumco - Professional Plumbing Services</title>"));
        assert!(html.contains(r#"<div id="root">"#));
        assert!(html.contains("data-menu-state"));
        assert!(html.contains(".btn-outline"));
        assert!(html.contains("menu-toggle"));
    }

    #[test]
    fn every_section_is_inside_the_mount_element() {
        let html = render_site(
            &SiteContent::plumco(),
            &SiteAssets::default(),
            &SiteOptions::default(),
        );
        let mount = html.find(r#"<div id="root">"#).expect("mount element");

        for section in SECTION_ORDER {
            let marker = format!(r#"data-section="{}""#, section);
            let pos = html.find(&marker).expect("section rendered");
            assert!(pos > mount, "{} rendered outside the mount element", section);
        }
    }

    #[test]
    fn custom_mount_id_and_filter_mode() {
        let options = SiteOptions {
            title: "Test".into(),
            mount_id: "app".into(),
            project_filter: ProjectFilter::Decorative,
        };
        let html = render_site(&SiteContent::plumco(), &SiteAssets::default(), &options);

        assert!(html.contains(r#"<div id="app">"#));
        assert!(!html.contains(r#"<div id="root">"#));
        assert!(html.contains(r#"data-filter-mode="decorative""#));
    }

    #[test]
    fn asset_paths_join_base() {
        let assets = SiteAssets::default();
        assert_eq!(assets.logo(), "assets/plumco-logo.png");
        assert_eq!(assets.team_photo(), "assets/team-5.jpg");

        let cdn = SiteAssets {
            base: "https://cdn.plumco.com/img/".into(),
        };
        assert_eq!(cdn.plumber(), "https://cdn.plumco.com/img/plumber.png");

        let bare = SiteAssets { base: String::new() };
        assert_eq!(bare.logo(), "plumco-logo.png");
    }

    #[test]
    fn stylesheet_carries_brand_colors() {
        assert!(styles::SITE_CSS.contains(COLOR_PRIMARY));
        assert!(styles::SITE_CSS.contains(COLOR_PRIMARY_DARK));
    }

    #[test]
    fn images_reference_configured_assets() {
        let assets = SiteAssets {
            base: "/static".into(),
        };
        let html = render_site(&SiteContent::plumco(), &assets, &SiteOptions::default());

        assert!(html.contains("/static/plumco-logo.png"));
        assert!(html.contains("url(/static/team-5.jpg)"));
        assert!(html.contains("images.unsplash.com"));
    }
}
