//! Domain logic for the landing page: lead capture, demo data and metadata

pub mod analytics;
pub mod config;
pub mod lead;
pub mod orders;
pub mod seo;
#[cfg(test)]
mod tests;

pub use analytics::{AnalyticsPoint, ChartLayout, LineChart, analytics_points};
pub use config::SiteConfig;
pub use orders::{Order, OrderStatus, demo_orders};
pub use seo::SeoMeta;
