#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use crate::core::lead::{
        Admission, LeadCapture, LeadError, LeadPayload, MAX_SUBMISSIONS, SubmissionAttempt,
        SubmissionStatus, SubmissionWindow, WINDOW_MS, WebhookTransport, dispatch,
    };

    const T0: i64 = 1_735_689_600_000;
    const MINUTE: i64 = 60_000;
    const HOOK: &str = "https://hooks.example.com/early-access";

    /// Transport that replies with a fixed result and remembers every call
    struct RecordingTransport {
        reply: Result<u16, String>,
        calls: Cell<usize>,
        bodies: RefCell<Vec<LeadPayload>>,
    }

    impl RecordingTransport {
        fn ok() -> Self {
            Self::replying(Ok(200))
        }

        fn replying(reply: Result<u16, String>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                bodies: RefCell::new(Vec::new()),
            }
        }
    }

    impl WebhookTransport for RecordingTransport {
        async fn post_json(&self, _url: &str, payload: &LeadPayload) -> Result<u16, String> {
            self.calls.set(self.calls.get() + 1);
            self.bodies.borrow_mut().push(payload.clone());
            self.reply.clone()
        }
    }

    fn capture() -> LeadCapture {
        LeadCapture::new(Some(HOOK.to_string()))
    }

    fn ada() -> SubmissionAttempt {
        SubmissionAttempt::new("Ada", "ada@x.com", "test")
    }

    // ========================================================================
    // Scenarios
    // ========================================================================

    #[tokio::test]
    async fn test_scenario_successful_submission() {
        let transport = RecordingTransport::ok();
        let mut capture = capture();
        assert_eq!(capture.status(), SubmissionStatus::Idle);

        let pending = match capture.begin(&ada(), T0) {
            Admission::Dispatch(p) => p,
            other => panic!("expected dispatch, got {:?}", other),
        };
        assert_eq!(capture.status(), SubmissionStatus::Submitting);

        let result = dispatch(&transport, &pending.endpoint, &pending.payload).await;
        let completion = capture
            .complete(pending, result)
            .expect("current attempt");

        assert_eq!(capture.status(), SubmissionStatus::Success);
        assert!(completion.clear_fields);
        assert_eq!(capture.window().len(), 1);
        assert_eq!(transport.calls.get(), 1);

        let body = &transport.bodies.borrow()[0];
        assert_eq!(body.name, "Ada");
        assert_eq!(body.email, "ada@x.com");
        assert_eq!(body.message, "test");
        assert_eq!(body.source, "the-print-route-website");
    }

    #[tokio::test]
    async fn test_scenario_fourth_submission_rate_limited() {
        let transport = RecordingTransport::ok();
        let mut capture = capture();

        for minute in 0..3 {
            let now = T0 + minute * MINUTE;
            let completion = capture.submit(&transport, &ada(), now).await.unwrap();
            assert!(completion.clear_fields);
            capture.reset(completion.ticket);
        }

        let completion = capture.submit(&transport, &ada(), T0 + 3 * MINUTE).await.unwrap();
        assert_eq!(capture.status(), SubmissionStatus::RateLimited);
        assert_eq!(
            capture.last_error(),
            Some(&LeadError::RateLimited { minutes_left: 7 })
        );
        assert!(!completion.clear_fields);
        assert_eq!(completion.ticket.delay, Duration::from_secs(5));
        assert_eq!(transport.calls.get(), 3);
        assert!(capture.view().disabled);
    }

    #[tokio::test]
    async fn test_scenario_invalid_email() {
        let transport = RecordingTransport::ok();
        let mut capture = capture();
        let attempt = SubmissionAttempt::new("Ada", "not-an-email", "test");

        capture.submit(&transport, &attempt, T0).await.unwrap();

        assert_eq!(capture.status(), SubmissionStatus::Error);
        assert_eq!(capture.last_error(), Some(&LeadError::ValidationFailed));
        assert_eq!(transport.calls.get(), 0);
        assert!(capture.window().is_empty());
    }

    #[tokio::test]
    async fn test_scenario_honeypot_spam() {
        let transport = RecordingTransport::ok();
        let mut capture = capture();
        let attempt = ada().with_honeypot("http://spam.example");

        let completion = capture.submit(&transport, &attempt, T0).await.unwrap();

        assert_eq!(capture.last_error(), Some(&LeadError::SpamRejected));
        assert_eq!(capture.status(), SubmissionStatus::Error);
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(completion.ticket.delay, Duration::from_secs(3));

        assert!(capture.reset(completion.ticket));
        assert_eq!(capture.status(), SubmissionStatus::Idle);
    }

    // ========================================================================
    // Properties
    // ========================================================================

    #[tokio::test]
    async fn test_honeypot_never_calls_network_or_consumes_capacity() {
        let transport = RecordingTransport::ok();
        let mut capture = capture();
        for (i, trap) in ["x", " ", "http://spam.example", "0"].iter().enumerate() {
            let attempt = ada().with_honeypot(*trap);
            capture.submit(&transport, &attempt, T0 + i as i64).await.unwrap();
            assert_eq!(capture.last_error(), Some(&LeadError::SpamRejected));
        }
        assert_eq!(transport.calls.get(), 0);
        assert!(capture.window().is_empty());
    }

    #[tokio::test]
    async fn test_rate_limit_reopens_when_oldest_leaves_window() {
        let transport = RecordingTransport::ok();
        let mut capture = capture();

        for minute in [0, 1, 2] {
            capture.submit(&transport, &ada(), T0 + minute * MINUTE).await.unwrap();
        }

        // Still blocked just before the first entry expires
        capture.submit(&transport, &ada(), T0 + WINDOW_MS - 1).await.unwrap();
        assert_eq!(capture.status(), SubmissionStatus::RateLimited);
        assert_eq!(transport.calls.get(), 3);

        capture.submit(&transport, &ada(), T0 + WINDOW_MS).await.unwrap();
        assert_eq!(capture.status(), SubmissionStatus::Success);
        assert_eq!(transport.calls.get(), 4);
        assert_eq!(capture.window().len(), MAX_SUBMISSIONS);
    }

    #[tokio::test]
    async fn test_invalid_emails_never_reach_network() {
        let transport = RecordingTransport::ok();
        let mut capture = capture();
        for email in ["", "plain", "a@b", "a b@c.de", "a@b c.de", "@c.de", "a@.", "a@@b.c"] {
            let attempt = SubmissionAttempt::new("Ada", email, "test");
            capture.submit(&transport, &attempt, T0).await.unwrap();
            assert_eq!(
                capture.last_error(),
                Some(&LeadError::ValidationFailed),
                "{email:?} should fail validation"
            );
        }
        assert_eq!(transport.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_success_adds_exactly_one_timestamp() {
        let transport = RecordingTransport::ok();
        let mut capture = capture();
        capture.submit(&transport, &ada(), T0).await.unwrap();
        let before = capture.window().len();

        let completion = capture.submit(&transport, &ada(), T0 + MINUTE).await.unwrap();

        assert!(completion.clear_fields);
        assert_eq!(capture.window().len(), before + 1);
    }

    #[tokio::test]
    async fn test_failures_do_not_consume_capacity() {
        let mut capture = capture();

        let refused = RecordingTransport::replying(Err("connection refused".to_string()));
        capture.submit(&refused, &ada(), T0).await.unwrap();
        assert_eq!(
            capture.last_error(),
            Some(&LeadError::TransportFailure("connection refused".to_string()))
        );
        assert_eq!(
            capture.view().banner.map(|(text, _)| text),
            Some("Network error. Please check your connection and try again.".to_string())
        );

        let rejected = RecordingTransport::replying(Ok(500));
        capture.submit(&rejected, &ada(), T0 + 1).await.unwrap();
        assert_eq!(
            capture.last_error(),
            Some(&LeadError::ServerRejected { status: 500 })
        );

        assert!(capture.window().is_empty());
        assert_eq!(refused.calls.get() + rejected.calls.get(), 2);
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_reported_not_fatal() {
        let transport = RecordingTransport::ok();
        let mut capture = LeadCapture::new(None);
        capture.submit(&transport, &ada(), T0).await.unwrap();
        assert_eq!(capture.last_error(), Some(&LeadError::ConfigurationMissing));
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_prune_twice_matches_prune_once() {
        let mut window = SubmissionWindow::new();
        window.record(T0);
        window.record(T0 + 4 * MINUTE);
        window.record(T0 + 8 * MINUTE);

        for now in [T0, T0 + 10 * MINUTE, T0 + 15 * MINUTE, T0 + 30 * MINUTE] {
            let mut once = window.clone();
            once.prune(now);
            let mut twice = window.clone();
            twice.prune(now);
            twice.prune(now);
            assert_eq!(once, twice);
        }
    }

    #[tokio::test]
    async fn test_resubmit_after_error_reevaluates_gate() {
        let transport = RecordingTransport::ok();
        let mut capture = capture();

        let bad = SubmissionAttempt::new("Ada", "nope", "test");
        capture.submit(&transport, &bad, T0).await.unwrap();
        assert_eq!(capture.status(), SubmissionStatus::Error);

        // No reset in between: the next submit starts from the error state
        capture.submit(&transport, &ada(), T0 + 1_000).await.unwrap();
        assert_eq!(capture.status(), SubmissionStatus::Success);
        assert_eq!(transport.calls.get(), 1);
    }
}
