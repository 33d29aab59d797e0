//! Rejection and failure kinds for the lead form

use std::time::Duration;

use super::status::SubmissionStatus;

/// How long a honeypot rejection stays on screen
pub const SPAM_RESET_DELAY: Duration = Duration::from_secs(3);

/// How long every other terminal status stays on screen
pub const STATUS_RESET_DELAY: Duration = Duration::from_secs(5);

/// Everything that can stop a lead submission
///
/// All variants are handled at the form boundary and end up as an inline
/// banner. None of them is fatal to the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("honeypot field was filled")]
    SpamRejected,

    #[error("rate limited, {minutes_left} minute(s) left")]
    RateLimited { minutes_left: i64 },

    #[error("webhook URL is not configured")]
    ConfigurationMissing,

    #[error("email address failed validation")]
    ValidationFailed,

    #[error("transport failure: {0}")]
    TransportFailure(String),

    #[error("webhook responded with status {status}")]
    ServerRejected { status: u16 },
}

impl LeadError {
    /// Status the form shows for this error
    pub fn status(&self) -> SubmissionStatus {
        match self {
            LeadError::RateLimited { .. } => SubmissionStatus::RateLimited,
            _ => SubmissionStatus::Error,
        }
    }

    /// Stable label for logs
    ///
    /// Spam keeps its own label even though it shares the `error` status
    /// with genuine failures.
    pub fn kind(&self) -> &'static str {
        match self {
            LeadError::SpamRejected => "spam_rejected",
            LeadError::RateLimited { .. } => "rate_limited",
            LeadError::ConfigurationMissing => "configuration_missing",
            LeadError::ValidationFailed => "validation_failed",
            LeadError::TransportFailure(_) => "transport_failure",
            LeadError::ServerRejected { .. } => "server_rejected",
        }
    }

    /// Banner text shown to the visitor
    pub fn user_message(&self) -> String {
        match self {
            LeadError::SpamRejected => "Spam detected. Please try again.".to_string(),
            LeadError::RateLimited { minutes_left } => format!(
                "Too many submissions. Please wait {} minute(s) before trying again.",
                minutes_left
            ),
            LeadError::ConfigurationMissing => {
                "Webhook URL is not configured. Please set LEAD_WEBHOOK_URL in your .env file."
                    .to_string()
            }
            LeadError::ValidationFailed => "Please enter a valid email address.".to_string(),
            LeadError::TransportFailure(_) => {
                "Network error. Please check your connection and try again.".to_string()
            }
            LeadError::ServerRejected { .. } => {
                "Failed to send message. Please try again later.".to_string()
            }
        }
    }

    /// Delay before the form reverts to idle
    pub fn reset_delay(&self) -> Duration {
        match self {
            LeadError::SpamRejected => SPAM_RESET_DELAY,
            _ => STATUS_RESET_DELAY,
        }
    }
}
