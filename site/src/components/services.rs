//! Services grid

use leptos::prelude::*;

use crate::types::ServiceCard;

/// One card per service, in list order.
#[component]
pub fn Services(services: Vec<ServiceCard>) -> impl IntoView {
    view! {
        <section id="services" class="services-section" data-section="services">
            <div class="section-container">
                <div class="section-header">
                    <h2 class="section-title">"Our Services"</h2>
                    <p class="section-subtitle">
                        "Comprehensive plumbing solutions tailored to your needs"
                    </p>
                </div>

                <div class="services-grid">
                    {services.into_iter().map(|service| view! {
                        <div class="service-card" data-id=service.id.to_string()>
                            <div class="service-icon">{service.icon}</div>
                            <h3 class="service-title">{service.title}</h3>
                            <p class="service-description">{service.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SiteContent;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_one_card_per_service() {
        let services = SiteContent::plumco().services;
        let html = view! { <Services services=services /> }.to_html();

        assert_eq!(html.matches(r#"class="service-card""#).count(), 6);
        assert!(html.contains("Emergency Repairs"));
        assert!(html.contains("Maintenance Plans"));
        assert!(html.find("Emergency Repairs") < html.find("Maintenance Plans"));
    }

    #[test]
    fn empty_list_renders_empty_grid() {
        let html = view! { <Services services=vec![] /> }.to_html();
        assert!(!html.contains("service-card"));
        assert!(html.contains(r#"id="services""#));
    }
}
