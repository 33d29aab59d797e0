//! Document head tags rendered through `leptos_meta`

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::SeoMeta;
use crate::core::seo::{SITE_NAME, script_body};

/// Title, description, Open Graph, Twitter and canonical tags
///
/// With `structured_data` set, the schema.org JSON-LD documents are
/// emitted as well.
#[component]
pub fn PageMeta(
    meta: SeoMeta,
    #[prop(default = false)]
    structured_data: bool,
) -> impl IntoView {
    let documents = if structured_data {
        meta.structured_data()
    } else {
        Vec::new()
    };

    view! {
        <Title text=meta.title.clone() />

        <Meta name="title" content=meta.title.clone() />
        <Meta name="description" content=meta.description.clone() />
        <Meta name="keywords" content=meta.keywords.clone() />

        // Open Graph
        <Meta property="og:type" content=meta.page_type.clone() />
        <Meta property="og:url" content=meta.url.clone() />
        <Meta property="og:title" content=meta.title.clone() />
        <Meta property="og:description" content=meta.description.clone() />
        <Meta property="og:image" content=meta.image.clone() />
        <Meta property="og:site_name" content=SITE_NAME />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:url" content=meta.url.clone() />
        <Meta name="twitter:title" content=meta.title.clone() />
        <Meta name="twitter:description" content=meta.description.clone() />
        <Meta name="twitter:image" content=meta.image.clone() />

        <Link rel="canonical" href=meta.url.clone() />

        {documents
            .iter()
            .map(|doc| view! { <script type="application/ld+json" inner_html=script_body(doc)></script> })
            .collect_view()}
    }
}
