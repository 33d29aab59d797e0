//! Application pages module
//!
//! - Landing page (the whole marketing site)
//! - Not found page

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
