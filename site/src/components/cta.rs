use leptos::prelude::*;

use super::Button;

/// Closing call to action.
#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section id="contact" class="cta-section" data-section="cta">
            <div class="section-container cta-content">
                <h2 class="cta-title">"Ready to Get Your Plumbing Fixed?"</h2>
                <p class="cta-subtitle">
                    "Don't let plumbing problems wait. Contact us today for fast, professional service. "
                    "We're available 24/7 for emergencies."
                </p>
                <div class="cta-buttons">
                    <Button size="lg">"Schedule Service Now"</Button>
                    <Button variant="outline" size="lg">"Call: (555) 123-4567"</Button>
                </div>
                <p class="cta-signals">
                    "✓ Licensed & Insured  ✓ Free Estimates  ✓ Same-Day Service Available"
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    /// Opening `<button>` tag of the button labelled `label`.
    fn button_tag<'a>(html: &'a str, label: &str) -> &'a str {
        let at = html.find(label).expect("label present");
        let start = html[..at].rfind("<button").expect("button start");
        let end = start + html[start..].find('>').expect("button end");
        &html[start..=end]
    }

    #[test]
    fn renders_contact_anchor_and_both_buttons() {
        let html = view! { <Cta /> }.to_html();

        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains(r#"data-section="cta""#));
        assert_eq!(html.matches("<button").count(), 2);
        assert!(button_tag(&html, "Schedule Service Now")
            .contains(r#"class="btn-base btn-primary btn-lg""#));
        assert!(button_tag(&html, "Call: (555) 123-4567")
            .contains(r#"class="btn-base btn-outline btn-lg""#));
    }
}
