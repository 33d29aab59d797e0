//! Submission status and its projection onto the form's visible state

use serde::{Deserialize, Serialize};

use super::error::LeadError;

/// Lifecycle of one form instance
///
/// `Idle -> Submitting -> {Success, Error}`, or `Idle -> {RateLimited, Error}`
/// directly when the gate rejects. Every non-idle status returns to `Idle`
/// after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
    RateLimited,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
            SubmissionStatus::RateLimited => "rate-limited",
        }
    }

    /// Whether this status ends an attempt and should auto-revert
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionStatus::Success | SubmissionStatus::Error | SubmissionStatus::RateLimited
        )
    }
}

/// Visual tone of the inline banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Error,
    Warning,
}

impl BannerTone {
    pub fn class(&self) -> &'static str {
        match self {
            BannerTone::Error => "lead-banner lead-banner-error",
            BannerTone::Warning => "lead-banner lead-banner-warning",
        }
    }
}

/// What the form renders for a given status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub button_label: &'static str,
    /// Whether the submit button shows the trailing arrow icon
    pub show_arrow: bool,
    pub disabled: bool,
    pub banner: Option<(String, BannerTone)>,
}

/// Map a status and the error behind it to the form's visible state
pub fn project(status: SubmissionStatus, error: Option<&LeadError>) -> StatusView {
    let button_label = match status {
        SubmissionStatus::Idle => "Send us your routing scenario",
        SubmissionStatus::Submitting => "Sending...",
        SubmissionStatus::Success => "✓ Sent! We'll be in touch soon.",
        SubmissionStatus::RateLimited => "Too many requests - please wait",
        SubmissionStatus::Error => "Error - please try again",
    };

    let banner = match status {
        SubmissionStatus::Error | SubmissionStatus::RateLimited => error.map(|e| {
            let tone = if status == SubmissionStatus::RateLimited {
                BannerTone::Warning
            } else {
                BannerTone::Error
            };
            (e.user_message(), tone)
        }),
        _ => None,
    };

    StatusView {
        button_label,
        show_arrow: status == SubmissionStatus::Idle,
        disabled: matches!(
            status,
            SubmissionStatus::Submitting | SubmissionStatus::RateLimited
        ),
        banner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(SubmissionStatus::Idle.as_str(), "idle");
        assert_eq!(SubmissionStatus::RateLimited.as_str(), "rate-limited");
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&SubmissionStatus::RateLimited).unwrap();
        assert_eq!(json, "\"rate-limited\"");
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!SubmissionStatus::Idle.is_terminal());
        assert!(!SubmissionStatus::Submitting.is_terminal());
        assert!(SubmissionStatus::Success.is_terminal());
        assert!(SubmissionStatus::Error.is_terminal());
        assert!(SubmissionStatus::RateLimited.is_terminal());
    }

    #[test]
    fn test_idle_projection() {
        let view = project(SubmissionStatus::Idle, None);
        assert_eq!(view.button_label, "Send us your routing scenario");
        assert!(view.show_arrow);
        assert!(!view.disabled);
        assert!(view.banner.is_none());
    }

    #[test]
    fn test_submitting_disables_button() {
        let view = project(SubmissionStatus::Submitting, None);
        assert_eq!(view.button_label, "Sending...");
        assert!(view.disabled);
    }

    #[test]
    fn test_rate_limited_projection() {
        let err = LeadError::RateLimited { minutes_left: 7 };
        let view = project(SubmissionStatus::RateLimited, Some(&err));
        assert!(view.disabled);
        let (text, tone) = view.banner.unwrap();
        assert!(text.contains("7 minute(s)"));
        assert_eq!(tone, BannerTone::Warning);
    }

    #[test]
    fn test_error_projection_uses_error_message() {
        let err = LeadError::ValidationFailed;
        let view = project(SubmissionStatus::Error, Some(&err));
        assert!(!view.disabled);
        assert_eq!(view.button_label, "Error - please try again");
        assert_eq!(
            view.banner,
            Some((
                "Please enter a valid email address.".to_string(),
                BannerTone::Error
            ))
        );
    }

    #[test]
    fn test_success_has_no_banner() {
        let view = project(SubmissionStatus::Success, None);
        assert_eq!(view.button_label, "✓ Sent! We'll be in touch soon.");
        assert!(view.banner.is_none());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let err = LeadError::SpamRejected;
        assert_eq!(
            project(SubmissionStatus::Error, Some(&err)),
            project(SubmissionStatus::Error, Some(&err))
        );
    }
}
