//! Pre-dispatch checks for a lead submission
//!
//! Decision order, first match wins:
//! 1. honeypot filled -> [`LeadError::SpamRejected`]
//! 2. window full -> [`LeadError::RateLimited`]
//! 3. no webhook URL -> [`LeadError::ConfigurationMissing`]
//! 4. email does not match -> [`LeadError::ValidationFailed`]
//!
//! None of the rejection paths touch the window beyond pruning it.

use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;

use super::dispatch::{LEAD_SOURCE, LeadPayload};
use super::error::LeadError;
use super::window::SubmissionWindow;

/// Loose `local@domain.tld` check. Not RFC 5322.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Check an email address against the form's pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Raw form contents for one submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionAttempt {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden field; humans leave it empty
    pub honeypot: String,
}

impl SubmissionAttempt {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            honeypot: String::new(),
        }
    }

    pub fn with_honeypot(mut self, honeypot: impl Into<String>) -> Self {
        self.honeypot = honeypot.into();
        self
    }

    /// Build the webhook body with trimmed fields
    pub fn payload(&self, at: DateTime<Utc>) -> LeadPayload {
        LeadPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            source: LEAD_SOURCE.to_string(),
        }
    }
}

/// Stateless gate in front of the dispatcher
pub struct SubmissionGate;

impl SubmissionGate {
    /// Decide whether `attempt` may be dispatched at `now` (ms since epoch)
    ///
    /// Returns the endpoint to post to on success.
    pub fn check<'a>(
        attempt: &SubmissionAttempt,
        window: &mut SubmissionWindow,
        endpoint: Option<&'a str>,
        now: i64,
    ) -> Result<&'a str, LeadError> {
        if !attempt.honeypot.is_empty() {
            return Err(LeadError::SpamRejected);
        }

        if !window.capacity_available(now) {
            return Err(LeadError::RateLimited {
                minutes_left: window.minutes_until_available(now),
            });
        }

        let endpoint = match endpoint {
            Some(url) if !url.trim().is_empty() => url,
            _ => return Err(LeadError::ConfigurationMissing),
        };

        if !is_valid_email(&attempt.email) {
            return Err(LeadError::ValidationFailed);
        }

        Ok(endpoint)
    }
}
