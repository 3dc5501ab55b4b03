use leptos::prelude::*;

use crate::types::FooterSection;

#[component]
pub fn Footer(sections: Vec<FooterSection>) -> impl IntoView {
    view! {
        <footer class="footer" data-section="footer">
            <div class="footer-container">
                <div class="footer-grid">
                    <div class="footer-column">
                        <div class="footer-logo">
                            <div class="footer-logo-icon">"P"</div>
                            <span class="footer-logo-text">"Plumco"</span>
                        </div>
                        <p class="footer-description">
                            "Professional plumbing services for residential and commercial clients."
                        </p>
                        <div class="footer-social">
                            <a href="#" class="social-link">"Facebook"</a>
                            <a href="#" class="social-link">"Instagram"</a>
                        </div>
                    </div>

                    {sections.into_iter().map(|section| view! {
                        <div class="footer-column">
                            <h4 class="footer-column-title">{section.title}</h4>
                            <ul class="footer-links">
                                {section.links.into_iter().map(|link| view! {
                                    <li>
                                        <a href=link.href class="footer-link">{link.label}</a>
                                    </li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="footer-divider"></div>

                <div class="footer-bottom">
                    <p class="footer-copyright">
                        "© 2024 Plumco. All rights reserved. Licensed & Insured"
                    </p>
                    <div class="footer-contact">
                        <p class="contact-item"><strong>"Phone:"</strong>" (555) 123-4567"</p>
                        <p class="contact-item"><strong>"Email:"</strong>" info@plumco.com"</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
