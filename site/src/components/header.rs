//! Page header: top bar, desktop navigation and the mobile menu
//!
//! Desktop and mobile lists are both rendered from the same `nav_links`, so
//! they can only differ in markup, never in labels or order.

use leptos::prelude::*;

use super::{Button, Icon, ICON_CHEVRON_DOWN, ICON_CLOCK, ICON_MENU, ICON_PHONE};
use crate::menu::Menu;
use crate::types::NavLink;

/// Sticky site header.
///
/// `menu` is the header's own menu handle. A freshly mounted header passes
/// nothing and starts closed; the client script takes over from there.
#[component]
pub fn Header(
    nav_links: Vec<NavLink>,
    /// Logo image path
    #[prop(into)]
    logo_src: String,
    #[prop(optional)] menu: Menu,
) -> impl IntoView {
    let state = menu.state();
    let expanded = if state.is_open() { "true" } else { "false" };
    let hidden = !state.is_open();
    let mobile_links = nav_links.clone();

    view! {
        <header class="header" data-section="header" data-menu-state=state.as_str()>
            <div class="header-topbar">
                <div class="topbar-container">
                    <div class="topbar-left">
                        <div class="topbar-time">
                            <Icon path=ICON_CLOCK class="topbar-icon" />
                            "Sun - Fri || 8:00 - 7:00"
                        </div>
                    </div>
                    <div class="topbar-right">
                        <div class="topbar-phone">
                            <Icon path=ICON_PHONE class="topbar-icon" />
                            "+00 56 98 46"
                        </div>
                        <div class="topbar-language">
                            <span>"English"</span>
                            <Icon path=ICON_CHEVRON_DOWN class="language-icon" />
                        </div>
                    </div>
                </div>
            </div>

            <nav class="navbar">
                <div class="logo-section">
                    <div class="logo-container">
                        <img src=logo_src alt="Plumco Logo" class="header-logo" />
                    </div>
                </div>

                <ul class="nav-menu desktop">
                    {nav_links.into_iter().map(|link| view! {
                        <li>
                            <a class="nav-link" href=link.href>{link.label}</a>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>

                <div class="nav-right">
                    <Button size="sm" class="cta-button">"Request Quote"</Button>
                    <button
                        class="menu-toggle"
                        data-action="menu-toggle"
                        aria-label="Toggle menu"
                        aria-controls="mobile-menu"
                        aria-expanded=expanded
                    >
                        <Icon path=ICON_MENU class="menu-icon" />
                    </button>
                </div>
            </nav>

            <div id="mobile-menu" class="mobile-menu" hidden=hidden>
                <ul class="mobile-nav-list">
                    {mobile_links.into_iter().map(|link| view! {
                        <li>
                            <a class="mobile-nav-link" href=link.href>{link.label}</a>
                        </li>
                    }).collect::<Vec<_>>()}
                    <li class="mobile-menu-divider">
                        <Button size="sm" class="mobile-cta">"Request Quote"</Button>
                    </li>
                </ul>
            </div>
        </header>
    }
}
