//! Root document component - the complete HTML page
//!
//! The page is mounted into a single element whose id comes from
//! [`SiteOptions::mount_id`]. Styles and the interaction script are inlined
//! so the output is one self-contained file.

use leptos::prelude::*;

use super::Home;
use crate::styles::{CSP, PAGE_SCRIPT, SITE_CSS};
use crate::types::SiteContent;
use crate::{SiteAssets, SiteOptions};

/// The complete HTML document for the landing page
#[component]
pub fn SiteDocument(content: SiteContent, assets: SiteAssets, options: SiteOptions) -> impl IntoView {
    let SiteOptions {
        title,
        mount_id,
        project_filter,
    } = options;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta
                    name="description"
                    content="Professional plumbing services for residential and commercial clients."
                />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <div id=mount_id>
                    <Home content=content assets=assets project_filter=project_filter />
                </div>
                <script>{PAGE_SCRIPT}</script>
            </body>
        </html>
    }
}
