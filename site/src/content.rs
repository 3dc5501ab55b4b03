//! Built-in Plumco copy and content validation.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{
    FooterLink, FooterSection, NavLink, PricingPlan, ProcessStep, ProjectCard, ServiceCard,
    SiteContent, Stat, Testimonial,
};

/// Highest rating a testimonial can carry.
pub const MAX_RATING: u8 = 5;

/// Invariant violations found in externally supplied content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate id {id} in {list}")]
    DuplicateId { list: &'static str, id: u32 },
    #[error("duplicate footer column '{0}'")]
    DuplicateFooterTitle(String),
    #[error("testimonial {id} has rating {rating}, expected 0..={max}", max = MAX_RATING)]
    RatingOutOfRange { id: u32, rating: u8 },
}

fn nav(label: &str, href: &str) -> NavLink {
    NavLink {
        label: label.into(),
        href: href.into(),
    }
}

fn link(label: &str) -> FooterLink {
    FooterLink {
        label: label.into(),
        href: "#".into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl SiteContent {
    /// The copy shipped with the Plumco landing page.
    pub fn plumco() -> Self {
        Self {
            nav_links: vec![
                nav("Home", "#"),
                nav("About", "#about"),
                nav("Services", "#services"),
                nav("Shop", "#shop"),
                nav("Pages", "#pages"),
                nav("Blog", "#blog"),
                nav("Contact", "#contact"),
            ],
            process_steps: vec![
                ProcessStep {
                    id: 1,
                    title: "Book Online".into(),
                    icon: "📅".into(),
                },
                ProcessStep {
                    id: 2,
                    title: "We Arrive".into(),
                    icon: "🚐".into(),
                },
                ProcessStep {
                    id: 3,
                    title: "Solve Problem".into(),
                    icon: "✓".into(),
                },
            ],
            services: vec![
                ServiceCard {
                    id: 1,
                    icon: "🔧".into(),
                    title: "Emergency Repairs".into(),
                    description: "Fast response to urgent plumbing issues. Available 24/7 for your peace of mind.".into(),
                },
                ServiceCard {
                    id: 2,
                    icon: "🚿".into(),
                    title: "Drain Cleaning".into(),
                    description: "Professional drain cleaning and unclogging services for residential and commercial.".into(),
                },
                ServiceCard {
                    id: 3,
                    icon: "🚰".into(),
                    title: "Water Installation".into(),
                    description: "New water line installation and upgrades with professional craftsmanship.".into(),
                },
                ServiceCard {
                    id: 4,
                    icon: "🛁".into(),
                    title: "Bathroom Remodel".into(),
                    description: "Complete bathroom renovation services including fixtures and plumbing upgrades.".into(),
                },
                ServiceCard {
                    id: 5,
                    icon: "💧".into(),
                    title: "Leak Detection".into(),
                    description: "Advanced leak detection technology to find hidden leaks before major damage occurs.".into(),
                },
                ServiceCard {
                    id: 6,
                    icon: "🏠".into(),
                    title: "Maintenance Plans".into(),
                    description: "Preventive maintenance packages to keep your plumbing system running smoothly.".into(),
                },
            ],
            stats: vec![
                Stat {
                    id: 1,
                    number: "15+".into(),
                    label: "Years Experience".into(),
                },
                Stat {
                    id: 2,
                    number: "5000+".into(),
                    label: "Happy Customers".into(),
                },
                Stat {
                    id: 3,
                    number: "24/7".into(),
                    label: "Emergency Support".into(),
                },
                Stat {
                    id: 4,
                    number: "100%".into(),
                    label: "Satisfaction Guarantee".into(),
                },
            ],
            about_features: strings(&[
                "Licensed and fully insured professionals",
                "Transparent, upfront pricing with no hidden fees",
                "Quality workmanship backed by warranty",
                "Quick response time to service calls",
                "Modern equipment and proven techniques",
                "Friendly, professional service every time",
            ]),
            projects: vec![
                ProjectCard {
                    id: 1,
                    title: "Commercial Kitchen Plumbing".into(),
                    category: "Commercial".into(),
                    image: "🏢".into(),
                    description: "Complete plumbing system installation for restaurant kitchen".into(),
                },
                ProjectCard {
                    id: 2,
                    title: "Bathroom Renovation".into(),
                    category: "Residential".into(),
                    image: "🛁".into(),
                    description: "Full bathroom remodel with new fixtures and tile work".into(),
                },
                ProjectCard {
                    id: 3,
                    title: "Water Heater Installation".into(),
                    category: "Residential".into(),
                    image: "💧".into(),
                    description: "Energy-efficient water heater replacement and connection".into(),
                },
                ProjectCard {
                    id: 4,
                    title: "Pipe Replacement Project".into(),
                    category: "Commercial".into(),
                    image: "🔧".into(),
                    description: "Large-scale pipe replacement for office building".into(),
                },
                ProjectCard {
                    id: 5,
                    title: "Garden Fountain Installation".into(),
                    category: "Residential".into(),
                    image: "⛲".into(),
                    description: "Custom outdoor fountain plumbing and landscaping integration".into(),
                },
                ProjectCard {
                    id: 6,
                    title: "Emergency Sewage Repair".into(),
                    category: "Emergency".into(),
                    image: "🚨".into(),
                    description: "Rapid response and professional sewage line repair".into(),
                },
            ],
            testimonials: vec![
                Testimonial {
                    id: 1,
                    name: "John Martinez".into(),
                    title: "Restaurant Owner".into(),
                    text: "Plumco handled our kitchen plumbing renovation perfectly. Professional, on-time, and within budget. Highly recommended!".into(),
                    rating: 5,
                },
                Testimonial {
                    id: 2,
                    name: "Sarah Thompson".into(),
                    title: "Homeowner".into(),
                    text: "They fixed my burst pipe at 2 AM without hesitation. The technician was courteous and the work was excellent.".into(),
                    rating: 5,
                },
                Testimonial {
                    id: 3,
                    name: "Michael Chen".into(),
                    title: "Property Manager".into(),
                    text: "Been using Plumco for all our maintenance needs across 5 buildings. Consistent quality and great customer service.".into(),
                    rating: 5,
                },
                Testimonial {
                    id: 4,
                    name: "Emma Davis".into(),
                    title: "Homeowner".into(),
                    text: "The transparency in pricing and quick service made them my go-to plumber. Best experience in years!".into(),
                    rating: 5,
                },
            ],
            plans: vec![
                PricingPlan {
                    id: 1,
                    name: "Basic".into(),
                    price: 149,
                    description: "Perfect for simple fixes".into(),
                    features: strings(&[
                        "Service call included",
                        "Parts and materials",
                        "One hour labor",
                        "Warranty on work",
                    ]),
                    highlighted: false,
                },
                PricingPlan {
                    id: 2,
                    name: "Professional".into(),
                    price: 299,
                    description: "Most popular choice".into(),
                    features: strings(&[
                        "Service call included",
                        "Parts and materials",
                        "Four hours labor",
                        "Extended warranty",
                        "Priority scheduling",
                        "Free follow-up visit",
                    ]),
                    highlighted: true,
                },
                PricingPlan {
                    id: 3,
                    name: "Premium".into(),
                    price: 499,
                    description: "For major projects".into(),
                    features: strings(&[
                        "Service call included",
                        "All parts and materials",
                        "Eight hours labor",
                        "Extended warranty (1 year)",
                        "Priority 24/7 access",
                        "Free follow-up visits",
                        "Consulting included",
                    ]),
                    highlighted: false,
                },
            ],
            footer_sections: vec![
                FooterSection {
                    title: "Services".into(),
                    links: vec![
                        link("Emergency Repairs"),
                        link("Drain Cleaning"),
                        link("Water Installation"),
                        link("Maintenance Plans"),
                    ],
                },
                FooterSection {
                    title: "Company".into(),
                    links: vec![
                        link("About Us"),
                        link("Our Team"),
                        link("Testimonials"),
                        link("Blog"),
                    ],
                },
                FooterSection {
                    title: "Support".into(),
                    links: vec![
                        link("Contact Us"),
                        link("FAQ"),
                        link("Privacy Policy"),
                        link("Terms of Service"),
                    ],
                },
            ],
        }
    }

    /// Check list invariants: unique ids per list, unique footer titles and
    /// ratings within `0..=5`. Prices are unsigned, so they can't go negative.
    pub fn validate(&self) -> Result<(), ContentError> {
        unique_ids("process_steps", self.process_steps.iter().map(|s| s.id))?;
        unique_ids("services", self.services.iter().map(|s| s.id))?;
        unique_ids("stats", self.stats.iter().map(|s| s.id))?;
        unique_ids("projects", self.projects.iter().map(|p| p.id))?;
        unique_ids("testimonials", self.testimonials.iter().map(|t| t.id))?;
        unique_ids("plans", self.plans.iter().map(|p| p.id))?;

        let mut titles = HashSet::new();
        for section in &self.footer_sections {
            if !titles.insert(section.title.as_str()) {
                return Err(ContentError::DuplicateFooterTitle(section.title.clone()));
            }
        }

        if let Some(t) = self.testimonials.iter().find(|t| t.rating > MAX_RATING) {
            return Err(ContentError::RatingOutOfRange {
                id: t.id,
                rating: t.rating,
            });
        }

        Ok(())
    }
}

fn unique_ids(list: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId { list, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        let content = SiteContent::plumco();
        assert_eq!(content.validate(), Ok(()));
        assert_eq!(content.nav_links.len(), 7);
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.testimonials.len(), 4);
        assert_eq!(content.plans.len(), 3);
        assert_eq!(content.footer_sections.len(), 3);
    }

    #[test]
    fn rejects_duplicate_service_ids() {
        let mut content = SiteContent::plumco();
        let copy = content.services[0].clone();
        content.services.push(copy);

        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateId {
                list: "services",
                id: 1
            })
        );
    }

    #[test]
    fn rejects_rating_above_five() {
        let mut content = SiteContent::plumco();
        content.testimonials[2].rating = 6;

        let err = content.validate().unwrap_err();
        assert_eq!(err, ContentError::RatingOutOfRange { id: 3, rating: 6 });
        assert_eq!(err.to_string(), "testimonial 3 has rating 6, expected 0..=5");
    }

    #[test]
    fn rejects_duplicate_footer_columns() {
        let mut content = SiteContent::plumco();
        content.footer_sections[1].title = "Services".into();

        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateFooterTitle("Services".into()))
        );
    }

    #[test]
    fn empty_content_is_valid() {
        assert!(SiteContent::default().validate().is_ok());
    }

    #[test]
    fn content_survives_toml() {
        let content = SiteContent::plumco();
        let text = toml::to_string(&content).expect("serialize");
        let back: SiteContent = toml::from_str(&text).expect("parse");
        assert_eq!(back, content);
    }
}
