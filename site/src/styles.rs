//! CSS and client script for the landing page.
//!
//! The page ships as a single HTML file: the stylesheet and the small
//! interaction script are inlined by [`crate::components::SiteDocument`].
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use plumco_site::styles::SITE_CSS;
//!
//! let my_css = ".hero { min-height: 80vh; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Brand blue used for primary buttons, links and highlights.
pub const COLOR_PRIMARY: &str = "#2563eb";
/// Hover/pressed shade of [`COLOR_PRIMARY`].
pub const COLOR_PRIMARY_DARK: &str = "#1d4ed8";

/// Complete stylesheet for the page.
///
/// Covers the shared layout primitives (`section-container`,
/// `section-header`), the button variants/sizes emitted by
/// [`crate::components::Button`], and one block per section.
pub const SITE_CSS: &str = r#"
:root {
    --color-primary: #2563eb;
    --color-primary-dark: #1d4ed8;
    --color-dark: #0f172a;
    --color-text: #1f2937;
    --color-muted: #6b7280;
    --color-surface: #f8fafc;
    --color-border: #e5e7eb;
    --color-star: #f59e0b;
    --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
    --container-max: 1200px;
    --radius: 10px;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--color-text);
    line-height: 1.6;
    background: #ffffff;
}

img { max-width: 100%; display: block; }

a { color: inherit; text-decoration: none; }

[hidden] { display: none !important; }

.section-container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 80px 24px;
}

.section-header { text-align: center; margin-bottom: 48px; }
.section-title { font-size: 2.25rem; font-weight: 800; margin: 0 0 12px; color: var(--color-dark); }
.section-subtitle { color: var(--color-muted); font-size: 1.125rem; margin: 0; }

/* Buttons */
.btn-base {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    border-radius: 6px;
    font-weight: 600;
    cursor: pointer;
    border: 2px solid transparent;
    transition: background 0.2s, color 0.2s, border-color 0.2s;
}
.btn-primary { background: var(--color-primary); color: #fff; }
.btn-primary:hover { background: var(--color-primary-dark); }
.btn-secondary { background: var(--color-dark); color: #fff; }
.btn-secondary:hover { background: #1e293b; }
.btn-outline { background: transparent; color: var(--color-primary); border-color: var(--color-primary); }
.btn-outline:hover { background: var(--color-primary); color: #fff; }
.btn-sm { padding: 6px 14px; font-size: 0.875rem; }
.btn-md { padding: 10px 22px; font-size: 1rem; }
.btn-lg { padding: 14px 30px; font-size: 1.125rem; }

/* Header */
.header { position: sticky; top: 0; z-index: 50; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
.header-topbar { background: var(--color-dark); color: #cbd5e1; font-size: 0.8125rem; }
.topbar-container { max-width: var(--container-max); margin: 0 auto; padding: 8px 24px; display: flex; justify-content: space-between; }
.topbar-left, .topbar-right, .topbar-time, .topbar-phone, .topbar-language { display: flex; align-items: center; gap: 8px; }
.topbar-right { gap: 24px; }
.topbar-icon, .language-icon { width: 16px; height: 16px; }
.navbar { max-width: var(--container-max); margin: 0 auto; padding: 12px 24px; display: flex; align-items: center; justify-content: space-between; }
.header-logo { height: 48px; width: auto; }
.nav-menu { list-style: none; display: flex; gap: 28px; margin: 0; padding: 0; }
.nav-link { font-weight: 500; }
.nav-link:hover { color: var(--color-primary); }
.nav-right { display: flex; align-items: center; gap: 16px; }
.menu-toggle { display: none; background: none; border: none; cursor: pointer; padding: 4px; }
.menu-icon { width: 28px; height: 28px; }
.mobile-menu { border-top: 1px solid var(--color-border); background: #fff; }
.mobile-nav-list { list-style: none; margin: 0; padding: 12px 24px; }
.mobile-nav-link { display: block; padding: 10px 0; font-weight: 500; }
.mobile-menu-divider { border-top: 1px solid var(--color-border); padding-top: 12px; margin-top: 8px; }

@media (max-width: 900px) {
    .nav-menu.desktop, .nav-right .cta-button { display: none; }
    .menu-toggle { display: block; }
}

/* Hero */
.hero { position: relative; background-size: cover; background-position: center; color: #fff; }
.hero::before { content: ''; position: absolute; inset: 0; background: rgba(15, 23, 42, 0.78); }
.hero-container { position: relative; max-width: var(--container-max); margin: 0 auto; padding: 120px 24px; display: flex; align-items: center; justify-content: space-between; }
.hero-left { max-width: 600px; }
.hero-label { color: var(--color-primary); font-weight: 700; letter-spacing: 0.08em; text-transform: uppercase; }
.hero-title { font-size: 3.5rem; line-height: 1.1; margin: 12px 0; }
.hero-title .highlight { color: var(--color-primary); }
.hero-description { font-size: 1.125rem; color: #e2e8f0; }
.hero-cta-group { display: flex; align-items: center; gap: 20px; margin: 32px 0; }
.hero-cta-primary { background: var(--color-primary); color: #fff; border: none; padding: 16px 32px; font-weight: 700; cursor: pointer; }
.hero-play-button { width: 56px; height: 56px; border-radius: 50%; border: 2px solid #fff; background: transparent; color: #fff; cursor: pointer; }
.play-icon { width: 24px; height: 24px; }
.hero-process { display: flex; align-items: center; gap: 12px; }
.process-wrapper { display: flex; align-items: center; gap: 12px; }
.process-step { text-align: center; }
.process-icon { font-size: 1.75rem; }
.process-title { margin: 4px 0 0; font-weight: 600; font-size: 0.875rem; }
.process-arrow svg { width: 20px; height: 20px; }
.hero-image-overlay { max-height: 480px; width: auto; }

/* Services */
.services-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 24px; }
.service-card { padding: 32px; border: 1px solid var(--color-border); border-radius: var(--radius); transition: box-shadow 0.2s; }
.service-card:hover { box-shadow: 0 10px 30px rgba(0,0,0,0.08); }
.service-icon { font-size: 2.5rem; margin-bottom: 16px; }
.service-title { margin: 0 0 8px; font-size: 1.25rem; }
.service-description { margin: 0; color: var(--color-muted); }

/* Trained staff */
.trained-staff-section { background: var(--color-surface); }
.trained-staff-content { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: center; }
.trained-staff-headline { color: var(--color-primary); letter-spacing: 0.08em; margin: 0; }
.trained-staff-title { font-size: 2.75rem; margin: 8px 0 16px; color: var(--color-dark); }
.trained-staff-description { color: var(--color-muted); }
.trained-staff-button-wrapper { margin-top: 24px; }
.plumber-image { border-radius: var(--radius); }

/* About */
.stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; margin-bottom: 64px; }
.stat-box { text-align: center; padding: 24px; background: var(--color-surface); border-radius: var(--radius); }
.stat-number { font-size: 2.5rem; font-weight: 800; color: var(--color-primary); }
.stat-label { margin: 0; color: var(--color-muted); }
.about-content { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: center; }
.about-image { display: flex; align-items: center; justify-content: center; min-height: 360px; background: linear-gradient(135deg, var(--color-primary), var(--color-primary-dark)); border-radius: var(--radius); }
.image-icon { font-size: 6rem; }
.about-title { font-size: 1.75rem; margin-top: 0; }
.features-list { list-style: none; padding: 0; margin: 0 0 24px; }
.feature-item, .pricing-feature { display: flex; gap: 10px; padding: 6px 0; }
.feature-check { color: var(--color-primary); font-weight: 700; }

/* Projects */
.filter-buttons { display: flex; flex-wrap: wrap; justify-content: center; gap: 12px; margin-bottom: 40px; }
.filter-btn { padding: 8px 20px; border-radius: 999px; border: 1px solid var(--color-border); background: #fff; cursor: pointer; }
.filter-btn.active, .filter-btn:hover { background: var(--color-primary); border-color: var(--color-primary); color: #fff; }
.projects-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 24px; }
.project-card { border-radius: var(--radius); overflow: hidden; border: 1px solid var(--color-border); }
.project-image { display: flex; align-items: center; justify-content: center; height: 200px; font-size: 4rem; background: var(--color-surface); }
.project-info { padding: 24px; }
.project-category { font-size: 0.75rem; font-weight: 700; text-transform: uppercase; color: var(--color-primary); }
.project-title { margin: 8px 0; }
.project-description { color: var(--color-muted); }
.project-link { color: var(--color-primary); font-weight: 600; }

/* Testimonials */
.testimonials-section { background: var(--color-dark); color: #fff; }
.testimonials-header .section-title { color: #fff; }
.testimonials-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px; }
.testimonial-card { padding: 28px; background: #1e293b; border-radius: var(--radius); }
.star-rating { color: var(--color-star); margin-bottom: 12px; }
.testimonial-text { font-style: italic; color: #e2e8f0; }
.author-name { margin: 0; font-weight: 700; }
.author-title { margin: 0; color: #94a3b8; font-size: 0.875rem; }

/* Pricing */
.pricing-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 24px; align-items: start; }
.pricing-card { border: 1px solid var(--color-border); border-radius: var(--radius); overflow: hidden; }
.pricing-highlighted { border: 2px solid var(--color-primary); transform: scale(1.03); box-shadow: 0 20px 40px rgba(37, 99, 235, 0.15); }
.pricing-header { padding: 32px; border-bottom: 1px solid var(--color-border); }
.pricing-name { margin: 0; font-size: 1.5rem; }
.pricing-description { color: var(--color-muted); }
.pricing-display { margin: 16px 0 24px; }
.price-amount { font-size: 2.75rem; font-weight: 800; color: var(--color-dark); }
.price-label { display: block; color: var(--color-muted); font-size: 0.875rem; }
.pricing-button { width: 100%; }
.pricing-features { padding: 32px; }
.features-label { font-weight: 700; margin-top: 0; }
.pricing-note { margin-top: 48px; text-align: center; color: var(--color-muted); }

/* CTA */
.cta-section { background: linear-gradient(135deg, var(--color-primary), var(--color-primary-dark)); color: #fff; }
.cta-content { text-align: center; }
.cta-title { font-size: 2.5rem; margin: 0 0 16px; }
.cta-subtitle { max-width: 680px; margin: 0 auto 32px; color: #dbeafe; }
.cta-buttons { display: flex; justify-content: center; flex-wrap: wrap; gap: 16px; }
.cta-buttons .btn-outline { color: #fff; border-color: #fff; }
.cta-signals { margin-top: 24px; color: #dbeafe; font-size: 0.875rem; }

/* Footer */
.footer { background: var(--color-dark); color: #cbd5e1; }
.footer-container { max-width: var(--container-max); margin: 0 auto; padding: 64px 24px 32px; }
.footer-grid { display: grid; grid-template-columns: 2fr repeat(3, 1fr); gap: 32px; }
.footer-logo { display: flex; align-items: center; gap: 10px; }
.footer-logo-icon { width: 40px; height: 40px; border-radius: 8px; background: var(--color-primary); color: #fff; display: flex; align-items: center; justify-content: center; font-weight: 800; }
.footer-logo-text { font-size: 1.25rem; font-weight: 800; color: #fff; }
.footer-social { display: flex; gap: 16px; }
.social-link:hover, .footer-link:hover { color: #fff; }
.footer-column-title { color: #fff; margin-top: 0; }
.footer-links { list-style: none; padding: 0; margin: 0; }
.footer-links li { padding: 4px 0; }
.footer-divider { border-top: 1px solid #1e293b; margin: 40px 0 24px; }
.footer-bottom { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 16px; font-size: 0.875rem; }
.footer-contact { display: flex; gap: 24px; }
.contact-item, .footer-copyright { margin: 0; }

@media (max-width: 900px) {
    .hero-container, .trained-staff-content, .about-content { display: block; }
    .hero-image-overlay { display: none; }
    .stats-grid { grid-template-columns: repeat(2, 1fr); }
    .footer-grid { grid-template-columns: 1fr 1fr; }
}
"#;

/// Content Security Policy for the generated page.
///
/// Remote images are allowed so the staff photo can come from a CDN.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";

/// Client-side interactions.
///
/// Every `button[data-action]` dispatches one handler call per click:
///
/// - `menu-toggle` flips the header's `data-menu-state` and the mobile
///   menu's `hidden` flag
/// - `filter:<Category>` selects a project category when the gallery is in
///   interactive mode (`data-filter-mode="interactive"`)
///
/// Clicking any `.mobile-nav-link` closes the menu.
pub const PAGE_SCRIPT: &str = r#"
(() => {
  const header = document.querySelector('[data-menu-state]');
  const mobileMenu = document.getElementById('mobile-menu');

  const setMenu = (state) => {
    if (!header || !mobileMenu) return;
    header.dataset.menuState = state;
    mobileMenu.hidden = state !== 'open';
    const toggle = header.querySelector('[data-action="menu-toggle"]');
    if (toggle) toggle.setAttribute('aria-expanded', String(state === 'open'));
  };

  const selectCategory = (btn, category) => {
    const gallery = btn.closest('[data-filter-mode]');
    if (!gallery || gallery.dataset.filterMode !== 'interactive') return;
    gallery.querySelectorAll('.filter-btn').forEach(b => {
      b.classList.toggle('active', b === btn);
    });
    gallery.querySelectorAll('.project-card').forEach(card => {
      card.hidden = category !== 'All' && card.dataset.category !== category;
    });
  };

  const actions = {
    'menu-toggle': () => setMenu(header && header.dataset.menuState === 'open' ? 'closed' : 'open'),
  };

  document.querySelectorAll('button[data-action]').forEach(btn => {
    btn.addEventListener('click', () => {
      const action = btn.dataset.action;
      if (action.startsWith('filter:')) {
        selectCategory(btn, action.slice('filter:'.length));
      } else if (actions[action]) {
        actions[action](btn);
      }
    });
  });

  // desktop links are never visible while the menu is open
  document.querySelectorAll('.mobile-nav-link').forEach(link => {
    link.addEventListener('click', () => setMenu('closed'));
  });
})();
"#;
