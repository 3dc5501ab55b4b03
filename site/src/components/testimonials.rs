//! Customer testimonials with star ratings

use leptos::prelude::*;

use crate::types::Testimonial;

/// Filled star glyph.
pub const STAR: &str = "★";

/// Exactly `rating` filled stars; nothing is drawn for the remainder.
#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    view! {
        <div class="star-rating" aria-label=format!("{} out of 5 stars", rating)>
            {(0..rating).map(|_| view! { <span class="star">{STAR}</span> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials-section" data-section="testimonials">
            <div class="section-container">
                <div class="section-header testimonials-header">
                    <h2 class="section-title">"What Our Customers Say"</h2>
                    <p class="section-subtitle">
                        "Real feedback from satisfied clients across the region"
                    </p>
                </div>

                <div class="testimonials-grid">
                    {testimonials.into_iter().map(|t| view! {
                        <div class="testimonial-card">
                            <StarRating rating=t.rating />
                            <p class="testimonial-text">{format!("\"{}\"", t.text)}</p>
                            <div class="testimonial-author">
                                <p class="author-name">{t.name}</p>
                                <p class="author-title">{t.title}</p>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
