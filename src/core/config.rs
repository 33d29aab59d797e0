//! Site configuration from environment variables.
//!
//! Two sources, same keys:
//! - `SiteConfig::compiled()` reads the values baked in at build time. The
//!   WASM bundle and the server render both use it, so they agree during hydration.
//! - `SiteConfig::from_env()` reads them at runtime (after `dotenvy::dotenv()`).
//!   The server uses it only to report configuration status at start-up.

/// Webhook that receives early-access submissions
pub const WEBHOOK_URL_KEY: &str = "LEAD_WEBHOOK_URL";

/// Public base URL used for canonical links and social cards
pub const SITE_URL_KEY: &str = "SITE_URL";

/// Fallback public base URL
pub const DEFAULT_SITE_URL: &str = "https://theprintroute.com";

/// Site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Lead webhook endpoint
    /// Example: https://n8n.example.com/webhook/early-access
    pub webhook_url: Option<String>,

    /// Public base URL without trailing slash
    pub site_url: String,
}

impl SiteConfig {
    /// Build from raw values, normalizing blanks to "unset".
    pub fn from_values(webhook_url: Option<&str>, site_url: Option<&str>) -> Self {
        let webhook_url = webhook_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        let site_url = site_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_SITE_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            webhook_url,
            site_url,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        let webhook_url = std::env::var(WEBHOOK_URL_KEY).ok();
        let site_url = std::env::var(SITE_URL_KEY).ok();
        Self::from_values(webhook_url.as_deref(), site_url.as_deref())
    }

    /// Configuration captured when the crate was compiled.
    pub fn compiled() -> Self {
        Self::from_values(option_env!("LEAD_WEBHOOK_URL"), option_env!("SITE_URL"))
    }

    /// Check if the lead webhook is configured
    pub fn has_webhook(&self) -> bool {
        self.webhook_url.is_some()
    }

    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::compiled()
    }
}
