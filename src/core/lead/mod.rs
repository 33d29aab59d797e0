//! Lead capture for the early-access form
//!
//! Client-side safeguards (honeypot, sliding-window rate limit, email check)
//! in front of a single webhook POST, plus the status the form renders.

pub mod capture;
pub mod dispatch;
pub mod error;
pub mod gate;
pub mod status;
pub mod window;

pub use capture::{Admission, Completion, LeadCapture, PendingDispatch, ResetTicket};
#[cfg(feature = "hydrate")]
pub use dispatch::FetchTransport;
pub use dispatch::{LEAD_SOURCE, LeadPayload, WebhookTransport, dispatch};
pub use error::{LeadError, SPAM_RESET_DELAY, STATUS_RESET_DELAY};
pub use gate::{SubmissionAttempt, SubmissionGate, is_valid_email};
pub use status::{BannerTone, StatusView, SubmissionStatus, project};
pub use window::{MAX_SUBMISSIONS, SubmissionWindow, WINDOW_MS};
