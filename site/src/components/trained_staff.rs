use leptos::prelude::*;

use super::Button;

/// Staff photo, served from the image CDN rather than the local asset folder.
pub const STAFF_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1557524173-b7cf97d4538b?w=500&h=600&fit=crop";

#[component]
pub fn TrainedStaff() -> impl IntoView {
    view! {
        <section id="trained-staff" class="trained-staff-section" data-section="trained-staff">
            <div class="section-container">
                <div class="trained-staff-content">
                    <div class="trained-staff-text">
                        <h3 class="trained-staff-headline">":: HIGHLY TRAINED STAFF"</h3>
                        <h2 class="trained-staff-title">"Ready For Help You."</h2>
                        <p class="trained-staff-description">
                            "We are certified company. We provide best plumbing services for you & your company."
                        </p>
                        <div class="trained-staff-button-wrapper">
                            <Button size="lg">"▶ BOOK ONLINE"</Button>
                        </div>
                    </div>

                    <div class="trained-staff-image">
                        <img
                            src=STAFF_IMAGE_URL
                            alt="Professional plumber in white shirt and blue suspenders"
                            class="plumber-image"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_anchor_image_and_booking_button() {
        let html = view! { <TrainedStaff /> }.to_html();

        assert!(html.contains(r#"id="trained-staff""#));
        assert!(html.contains(r#"data-section="trained-staff""#));
        assert!(html.contains(r#"class="btn-base btn-primary btn-lg""#));
        assert!(html.contains("BOOK ONLINE"));
        assert!(html.contains("photo-1557524173-b7cf97d4538b"));
    }
}
