use leptos::prelude::*;

use super::Button;
use crate::types::PricingPlan;

/// Card classes; highlighted plans get the accent border.
pub fn pricing_card_class(highlighted: bool) -> &'static str {
    if highlighted {
        "pricing-card pricing-highlighted"
    } else {
        "pricing-card"
    }
}

#[component]
pub fn Pricing(plans: Vec<PricingPlan>) -> impl IntoView {
    view! {
        <section id="pricing" class="pricing-section" data-section="pricing">
            <div class="section-container">
                <div class="section-header">
                    <h2 class="section-title">"Simple, Transparent Pricing"</h2>
                    <p class="section-subtitle">"Choose the perfect plan for your plumbing needs"</p>
                </div>

                <div class="pricing-grid">
                    {plans.into_iter().map(|plan| {
                        let variant = if plan.highlighted { "primary" } else { "outline" };
                        view! {
                            <div class=pricing_card_class(plan.highlighted)>
                                <div class="pricing-header">
                                    <h3 class="pricing-name">{plan.name}</h3>
                                    <p class="pricing-description">{plan.description}</p>
                                    <div class="pricing-display">
                                        <span class="price-amount">{format!("${}", plan.price)}</span>
                                        <span class="price-label">"starting price"</span>
                                    </div>
                                    <Button variant=variant class="pricing-button">"Get Started"</Button>
                                </div>

                                <div class="pricing-features">
                                    <p class="features-label">"Includes:"</p>
                                    <ul class="features-list">
                                        {plan.features.into_iter().map(|feature| view! {
                                            <li class="pricing-feature">
                                                <span class="feature-check">"✓"</span>
                                                <span>{feature}</span>
                                            </li>
                                        }).collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="pricing-note">
                    <p>
                        <strong>"Not sure which plan is right for you?"</strong>
                        " Contact us for a custom quote or free consultation. "
                        "We'll assess your needs and provide the perfect solution."
                    </p>
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
    fn renders_one_card_per_plan() {
        let plans = SiteContent::plumco().plans;
        let html = view! { <Pricing plans=plans /> }.to_html();

        assert_eq!(html.matches(r#"class="pricing-card"#).count(), 3);
        assert_eq!(html.matches("pricing-highlighted").count(), 1);
        assert!(html.contains("$149"));
        assert!(html.contains("$299"));
        assert!(html.contains("$499"));
        assert_eq!(html.matches(r#"class="pricing-feature""#).count(), 4 + 6 + 7);
    }

    #[test]
    fn highlighted_plan_gets_primary_button() {
        let plans = SiteContent::plumco().plans;
        let html = view! { <Pricing plans=plans /> }.to_html();

        assert_eq!(html.matches("btn-base btn-primary btn-md pricing-button").count(), 1);
        assert_eq!(html.matches("btn-base btn-outline btn-md pricing-button").count(), 2);
    }

    #[test]
    fn card_class() {
        assert_eq!(pricing_card_class(true), "pricing-card pricing-highlighted");
        assert_eq!(pricing_card_class(false), "pricing-card");
    }
}
