//! "Why choose us" section: headline stats plus a feature checklist

use leptos::prelude::*;

use super::Button;
use crate::types::Stat;

#[component]
pub fn About(stats: Vec<Stat>, features: Vec<String>) -> impl IntoView {
    view! {
        <section id="about" class="about-section" data-section="about">
            <div class="section-container">
                <div class="section-header">
                    <h2 class="section-title">"Why Choose Plumco?"</h2>
                    <p class="section-subtitle">
                        "Trusted by thousands for quality, reliability, and professional service"
                    </p>
                </div>

                <div class="stats-grid">
                    {stats.into_iter().map(|stat| view! {
                        <div class="stat-box" data-id=stat.id.to_string()>
                            <div class="stat-number">{stat.number}</div>
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="about-content">
                    <div class="about-image">
                        <span class="image-icon">"🔧"</span>
                    </div>

                    <div class="about-text">
                        <h3 class="about-title">"Professional Plumbing Solutions You Can Trust"</h3>
                        <ul class="features-list">
                            {features.into_iter().map(|feature| view! {
                                <li class="feature-item">
                                    <span class="feature-check">"✓"</span>
                                    <span class="feature-text">{feature}</span>
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                        <Button size="lg">"Schedule Service Today"</Button>
                    </div>
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
    fn renders_every_stat_and_feature() {
        let content = SiteContent::plumco();
        let html = view! {
            <About stats=content.stats features=content.about_features />
        }
        .to_html();

        assert_eq!(html.matches(r#"class="stat-box""#).count(), 4);
        assert_eq!(html.matches(r#"class="feature-item""#).count(), 6);
        assert!(html.contains("5000+"));
        assert!(html.contains("btn-base btn-primary btn-lg"));
    }
}
