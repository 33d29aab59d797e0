pub mod common;
pub mod dashboard_preview;
pub mod hero;
pub mod icon;
pub mod lead_form;
pub mod page_meta;
pub mod pages;
pub mod theme;

pub use dashboard_preview::DashboardPreview;
pub use hero::PrintFlowHero;
pub use icon::{Icon, icons};
pub use lead_form::EarlyAccessForm;
pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
