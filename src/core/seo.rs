//! Search and social metadata for the landing page
//!
//! Holds the values rendered into `<title>`, `<meta>` and the canonical link,
//! and builds the JSON-LD documents embedded in the page head.

use serde_json::{Value, json};

pub const SITE_NAME: &str = "The Print Route";

pub const DEFAULT_TITLE: &str = "The Print Route - Smart Print Routing SaaS Platform";

pub const DEFAULT_DESCRIPTION: &str = "Turn fragmented print requests into a predictable, routed workflow. Route print orders automatically across providers and countries with smart routing, unified tracking, and cost optimization.";

pub const DEFAULT_KEYWORDS: &str = "print routing, print management, print workflow, SaaS, automation, print fulfillment, routing platform, print logistics, TAN integration, n8n integration";

const FEATURE_LIST: [&str; 6] = [
    "Smart print routing",
    "Multi-provider management",
    "Unified tracking",
    "Cost optimization",
    "API integration",
    "Workflow automation",
];

/// Page metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub image: String,
    pub url: String,
    pub page_type: String,
}

impl SeoMeta {
    /// Defaults for a site hosted at `site_url`
    pub fn for_site(site_url: &str) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            keywords: DEFAULT_KEYWORDS.to_string(),
            image: format!("{}/og-image.jpg", site_url),
            url: site_url.to_string(),
            page_type: "website".to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The four schema.org documents embedded as `application/ld+json`
    pub fn structured_data(&self) -> Vec<Value> {
        vec![
            self.software_application(),
            self.organization(),
            self.website(),
            self.breadcrumbs(),
        ]
    }

    fn software_application(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "SoftwareApplication",
            "name": SITE_NAME,
            "applicationCategory": "BusinessApplication",
            "operatingSystem": "Web",
            "offers": {
                "@type": "Offer",
                "price": "0",
                "priceCurrency": "USD",
            },
            "description": self.description,
            "url": self.url,
            "publisher": {
                "@type": "Organization",
                "name": SITE_NAME,
                "url": self.url,
            },
            "featureList": FEATURE_LIST,
            "aggregateRating": {
                "@type": "AggregateRating",
                "ratingValue": "4.5",
                "ratingCount": "1",
            },
        })
    }

    fn organization(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": SITE_NAME,
            "url": self.url,
            "logo": format!("{}/logo.png", self.url),
            "description": self.description,
            "sameAs": [],
        })
    }

    fn website(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": SITE_NAME,
            "url": self.url,
            "description": self.description,
            "potentialAction": {
                "@type": "SearchAction",
                "target": {
                    "@type": "EntryPoint",
                    "urlTemplate": format!("{}/search?q={{search_term_string}}", self.url),
                },
                "query-input": "required name=search_term_string",
            },
        })
    }

    fn breadcrumbs(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "BreadcrumbList",
            "itemListElement": [{
                "@type": "ListItem",
                "position": 1,
                "name": "Home",
                "item": self.url,
            }],
        })
    }
}

/// Serialize a JSON-LD document for a `<script>` body
///
/// `</` is escaped so the document cannot close the script element early.
pub fn script_body(doc: &Value) -> String {
    doc.to_string().replace("</", "<\\/")
}
