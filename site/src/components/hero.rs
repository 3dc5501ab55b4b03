use leptos::prelude::*;

use super::{Icon, ICON_CHEVRON_RIGHT, ICON_PLAY};
use crate::types::ProcessStep;

#[component]
pub fn Hero(
    process_steps: Vec<ProcessStep>,
    /// Team photo used as the section background
    #[prop(into)]
    background_src: String,
    /// Cut-out plumber image overlaid on the right
    #[prop(into)]
    plumber_src: String,
) -> impl IntoView {
    let background = format!("background-image: url({})", background_src);
    let last = process_steps.len().saturating_sub(1);

    view! {
        <section id="home" class="hero" data-section="hero" style=background>
            <div class="hero-container">
                <div class="hero-left">
                    <p class="hero-label">":: Highly Trained Staff"</p>
                    <h1 class="hero-title">
                        "Ready For " <span class="highlight">"Help"</span> " You."
                    </h1>
                    <p class="hero-description">
                        "We are certified company. We provide best plumbing services for you & your company."
                    </p>

                    <div class="hero-cta-group">
                        <button class="hero-cta-primary" aria-label="Book Online">
                            <span>"BOOK ONLINE"</span>
                        </button>
                        <button class="hero-play-button" aria-label="Play video">
                            <Icon path=ICON_PLAY class="play-icon" />
                        </button>
                    </div>

                    <div class="hero-process">
                        {process_steps.into_iter().enumerate().map(|(idx, step)| view! {
                            <div class="process-wrapper">
                                <div class="process-step">
                                    <div class="process-icon">{step.icon}</div>
                                    <p class="process-title">{step.title}</p>
                                </div>
                                {(idx < last).then(|| view! {
                                    <div class="process-arrow">
                                        <Icon path=ICON_CHEVRON_RIGHT />
                                    </div>
                                })}
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <img src=plumber_src alt="Professional Plumber" class="hero-image-overlay" />
            </div>
        </section>
    }
}
