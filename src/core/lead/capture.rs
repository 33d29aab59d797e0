//! Lead form state: window, status, last error and reset bookkeeping
//!
//! The flow is split in two halves around the network call so a UI can
//! release its borrow while the request is in flight:
//!
//! ```text
//! begin(attempt, now) -> Admission::Dispatch(pending)
//!        ... dispatch(transport, pending.endpoint, pending.payload).await ...
//! complete(pending, result) -> Some(Completion { ticket, clear_fields })
//!        ... after ticket.delay ...
//! reset(ticket)
//! ```
//!
//! Every status change bumps a generation counter. A [`ResetTicket`] only
//! applies while its generation is current, so a reset scheduled for an
//! earlier attempt can never overwrite a newer status.

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::dispatch::{LeadPayload, WebhookTransport, dispatch};
use super::error::{LeadError, STATUS_RESET_DELAY};
use super::gate::{SubmissionAttempt, SubmissionGate};
use super::status::{StatusView, SubmissionStatus, project};
use super::window::SubmissionWindow;

/// Permission to revert the form to idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
    pub delay: Duration,
}

/// An accepted attempt waiting for its network result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDispatch {
    pub endpoint: String,
    pub payload: LeadPayload,
    started_at: i64,
    generation: u64,
}

/// Result of [`LeadCapture::begin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Passed the gate; send `PendingDispatch` and call `complete`
    Dispatch(PendingDispatch),
    /// Rejected before any network call
    Rejected(ResetTicket),
    /// A dispatch is already in flight; nothing changed
    InFlight,
}

/// Result of [`LeadCapture::complete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub ticket: ResetTicket,
    /// Whether the visible form fields should be cleared
    pub clear_fields: bool,
}

/// Owned state of one lead form instance
#[derive(Debug, Clone)]
pub struct LeadCapture {
    endpoint: Option<String>,
    window: SubmissionWindow,
    status: SubmissionStatus,
    last_error: Option<LeadError>,
    generation: u64,
}

impl LeadCapture {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint,
            window: SubmissionWindow::new(),
            status: SubmissionStatus::Idle,
            last_error: None,
            generation: 0,
        }
    }

    pub fn with_window(mut self, window: SubmissionWindow) -> Self {
        self.window = window;
        self
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&LeadError> {
        self.last_error.as_ref()
    }

    pub fn window(&self) -> &SubmissionWindow {
        &self.window
    }

    /// Current button/banner state
    pub fn view(&self) -> StatusView {
        project(self.status, self.last_error.as_ref())
    }

    /// Run the gate and either hand out a pending dispatch or record the rejection
    pub fn begin(&mut self, attempt: &SubmissionAttempt, now: i64) -> Admission {
        if self.status == SubmissionStatus::Submitting {
            return Admission::InFlight;
        }

        let checked = SubmissionGate::check(attempt, &mut self.window, self.endpoint.as_deref(), now)
            .map(str::to_string);

        match checked {
            Ok(endpoint) => {
                self.generation += 1;
                self.status = SubmissionStatus::Submitting;
                self.last_error = None;
                let at = DateTime::<Utc>::from_timestamp_millis(now).unwrap_or_else(Utc::now);
                Admission::Dispatch(PendingDispatch {
                    endpoint,
                    payload: attempt.payload(at),
                    started_at: now,
                    generation: self.generation,
                })
            }
            Err(err) => {
                if err == LeadError::SpamRejected {
                    leptos::logging::warn!("Spam detected: honeypot field filled");
                } else {
                    leptos::logging::log!("lead submission rejected: {}", err.kind());
                }
                Admission::Rejected(self.fail(err))
            }
        }
    }

    /// Apply the network result of a pending dispatch
    ///
    /// On success the window records the time the attempt started. Returns
    /// `None` without touching any state when `pending` is not the current
    /// attempt.
    pub fn complete(
        &mut self,
        pending: PendingDispatch,
        result: Result<(), LeadError>,
    ) -> Option<Completion> {
        if pending.generation != self.generation {
            leptos::logging::warn!("stale lead dispatch result ignored");
            return None;
        }
        let completion = match result {
            Ok(()) => {
                self.window.record(pending.started_at);
                self.generation += 1;
                self.status = SubmissionStatus::Success;
                self.last_error = None;
                Completion {
                    ticket: ResetTicket {
                        generation: self.generation,
                        delay: STATUS_RESET_DELAY,
                    },
                    clear_fields: true,
                }
            }
            Err(err) => Completion {
                ticket: self.fail(err),
                clear_fields: false,
            },
        };
        Some(completion)
    }

    /// Revert to idle if `ticket` still belongs to the current status
    ///
    /// Returns whether the reset applied.
    pub fn reset(&mut self, ticket: ResetTicket) -> bool {
        if ticket.generation != self.generation || !self.status.is_terminal() {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        self.last_error = None;
        true
    }

    /// Gate, dispatch and complete in one call
    ///
    /// Returns `None` when a dispatch was already in flight.
    pub async fn submit<T: WebhookTransport>(
        &mut self,
        transport: &T,
        attempt: &SubmissionAttempt,
        now: i64,
    ) -> Option<Completion> {
        match self.begin(attempt, now) {
            Admission::Dispatch(pending) => {
                let result = dispatch(transport, &pending.endpoint, &pending.payload).await;
                self.complete(pending, result)
            }
            Admission::Rejected(ticket) => Some(Completion {
                ticket,
                clear_fields: false,
            }),
            Admission::InFlight => None,
        }
    }

    fn fail(&mut self, err: LeadError) -> ResetTicket {
        self.generation += 1;
        self.status = err.status();
        let delay = err.reset_delay();
        self.last_error = Some(err);
        ResetTicket {
            generation: self.generation,
            delay,
        }
    }
}
