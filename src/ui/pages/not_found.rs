//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{SeoMeta, SiteConfig};
use crate::ui::icon::{Icon, icons};
use crate::ui::page_meta::PageMeta;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let meta = SeoMeta::for_site(&SiteConfig::compiled().site_url)
        .with_title("Page Not Found - The Print Route")
        .with_description("The page you're looking for doesn't exist or has been moved.");

    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <PageMeta meta=meta />

        <div class="min-h-screen bg-theme-primary text-theme-primary flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-theme-card border border-theme rounded-full flex items-center justify-center">
                    <Icon icon=icons::ROUTE class="w-12 h-12 text-theme-tertiary" />
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                <p class="text-theme-secondary mb-8 max-w-md mx-auto">
                    "This route doesn't lead anywhere. The page may have moved or never existed."
                </p>

                <A href="/" attr:class="btn-primary">
                    "Back to The Print Route"
                </A>
            </div>
        </div>
    }
}
