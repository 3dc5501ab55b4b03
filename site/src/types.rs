//! Content records for the landing page.
//!
//! Every section of the page is driven by a list of these records. They're
//! designed to be:
//!
//! - **Serializable** - the built-in copy can be dumped and edited as TOML/JSON
//! - **Clone-friendly** - components own their props, no borrowing issues
//! - **Ordered** - lists render in exactly the order they are stored
//!
//! # Example
//!
//! ```rust
//! use plumco_site::types::{ServiceCard, SiteContent};
//!
//! let mut content = SiteContent::plumco();
//! content.services.push(ServiceCard {
//!     id: 7,
//!     icon: "🧯".into(),
//!     title: "Frozen Pipes".into(),
//!     description: "Thawing and repair of frozen lines.".into(),
//! });
//! assert!(content.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

/// A navigation entry shared by the desktop and mobile menus.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible label
    pub label: String,
    /// In-page fragment (`#services`) or the `#` placeholder
    pub href: String,
}

/// One step of the "book, arrive, solve" flow shown in the hero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: u32,
    pub title: String,
    pub icon: String,
}

/// A card in the services grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub id: u32,
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A headline figure in the about section ("15+ Years Experience").
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub id: u32,
    pub number: String,
    pub label: String,
}

/// A completed job in the project gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: u32,
    pub title: String,
    /// Free-form category; distinct values become filter buttons
    pub category: String,
    /// Emoji or image reference shown in the card header
    pub image: String,
    pub description: String,
}

/// A customer review.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub text: String,
    /// Whole stars, 0 to 5
    pub rating: u8,
}

/// A pricing card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: u32,
    pub name: String,
    /// Starting price in whole dollars
    pub price: u32,
    pub description: String,
    pub features: Vec<String>,
    /// Highlighted plans get the accent card and a primary button
    #[serde(default)]
    pub highlighted: bool,
}

/// A single link inside a footer column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

/// A titled column of footer links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<FooterLink>,
}

/// All copy for the page, grouped per section.
///
/// This is the single content provider the components read from. Use
/// [`SiteContent::plumco`] for the built-in copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub nav_links: Vec<NavLink>,
    pub process_steps: Vec<ProcessStep>,
    pub services: Vec<ServiceCard>,
    pub stats: Vec<Stat>,
    pub about_features: Vec<String>,
    pub projects: Vec<ProjectCard>,
    pub testimonials: Vec<Testimonial>,
    pub plans: Vec<PricingPlan>,
    pub footer_sections: Vec<FooterSection>,
}

/// Behavior of the project gallery's category buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectFilter {
    /// Buttons are shown but do nothing; every card stays visible
    Decorative,
    /// Buttons narrow the gallery to one category, `All` resets it
    #[default]
    Interactive,
}

impl ProjectFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectFilter::Decorative => "decorative",
            ProjectFilter::Interactive => "interactive",
        }
    }
}
