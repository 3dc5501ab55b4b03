//! Leptos UI components for the landing page.
//!
//! Each section is a `#[component]` function that takes its slice of
//! [`crate::types::SiteContent`] as props and renders one block per record,
//! in list order.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! └── Home (mount element)
//!     ├── Header        nav links, mobile menu
//!     ├── Hero          process steps
//!     ├── Services      service cards
//!     ├── TrainedStaff
//!     ├── About         stats, feature list
//!     ├── Projects      category filter, project cards
//!     ├── Testimonials  StarRating per card
//!     ├── Pricing       plan cards
//!     ├── Cta
//!     └── Footer        link columns
//! ```
//!
//! `Button` and `Icon` are the shared leaves.
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_site`], but can be
//! rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use plumco_site::components::Services;
//! use plumco_site::types::SiteContent;
//!
//! view! { <Services services=SiteContent::plumco().services /> }
//! ```

mod about;
mod button;
mod cta;
mod document;
mod footer;
mod header;
mod hero;
mod home;
mod icons;
mod pricing;
mod projects;
mod services;
mod testimonials;
mod trained_staff;

pub use about::About;
pub use button::{button_classes, Button, ButtonSize, ButtonVariant};
pub use cta::Cta;
pub use document::SiteDocument;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use home::{Home, SECTION_ORDER};
pub use icons::*;
pub use pricing::{pricing_card_class, Pricing};
pub use projects::{
    filter_projects, matches_category, project_categories, Projects, ALL_CATEGORIES,
};
pub use services::Services;
pub use testimonials::{StarRating, Testimonials, STAR};
pub use trained_staff::{TrainedStaff, STAFF_IMAGE_URL};
