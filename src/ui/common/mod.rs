//! Common reusable UI components
//!
//! Small building blocks shared by the landing page sections and the lead form.

pub mod button;
pub mod form;
pub mod message;

pub use button::{ButtonVariant, CtaLink};
pub use form::{FormField, HoneypotField, TextAreaField};
pub use message::StatusBanner;
