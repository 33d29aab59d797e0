//! Outbound webhook call for accepted lead submissions

use serde::{Deserialize, Serialize};

use super::error::LeadError;

/// Fixed `source` tag identifying this form to the webhook
pub const LEAD_SOURCE: &str = "the-print-route-website";

/// JSON body posted to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    /// ISO-8601, UTC
    pub timestamp: String,
    pub source: String,
}

/// Anything that can POST a JSON body and report the HTTP status
///
/// `Err` means the request never produced a response (DNS, refused
/// connection, CORS, offline).
#[allow(async_fn_in_trait)]
pub trait WebhookTransport {
    async fn post_json(&self, url: &str, payload: &LeadPayload) -> Result<u16, String>;
}

/// Send `payload` once and classify the result
pub async fn dispatch<T: WebhookTransport>(
    transport: &T,
    url: &str,
    payload: &LeadPayload,
) -> Result<(), LeadError> {
    match transport.post_json(url, payload).await {
        Ok(status) if (200..300).contains(&status) => Ok(()),
        Ok(status) => {
            leptos::logging::warn!("lead webhook rejected submission: status {}", status);
            Err(LeadError::ServerRejected { status })
        }
        Err(e) => {
            leptos::logging::error!("Error submitting lead form: {}", e);
            Err(LeadError::TransportFailure(e))
        }
    }
}

/// Browser `fetch` transport
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
impl WebhookTransport for FetchTransport {
    async fn post_json(&self, url: &str, payload: &LeadPayload) -> Result<u16, String> {
        use gloo_net::http::Request;

        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .json(payload)
            .map_err(|e| e.to_string())?;

        let response = request.send().await.map_err(|e| e.to_string())?;
        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct StubTransport {
        reply: Result<u16, String>,
        seen: RefCell<Vec<(String, LeadPayload)>>,
    }

    impl StubTransport {
        fn replying(reply: Result<u16, String>) -> Self {
            Self {
                reply,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl WebhookTransport for StubTransport {
        async fn post_json(&self, url: &str, payload: &LeadPayload) -> Result<u16, String> {
            self.seen
                .borrow_mut()
                .push((url.to_string(), payload.clone()));
            self.reply.clone()
        }
    }

    fn payload() -> LeadPayload {
        LeadPayload {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            message: "test".to_string(),
            timestamp: "2025-03-01T12:30:00.000Z".to_string(),
            source: LEAD_SOURCE.to_string(),
        }
    }

    #[test]
    fn test_payload_wire_format() {
        let value = serde_json::to_value(payload()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@x.com",
                "message": "test",
                "timestamp": "2025-03-01T12:30:00.000Z",
                "source": "the-print-route-website"
            })
        );
    }

    #[tokio::test]
    async fn test_dispatch_success_statuses() {
        for status in [200, 201, 204, 299] {
            let transport = StubTransport::replying(Ok(status));
            assert_eq!(dispatch(&transport, "https://hook", &payload()).await, Ok(()));
        }
    }

    #[tokio::test]
    async fn test_dispatch_posts_once_to_url() {
        let transport = StubTransport::replying(Ok(200));
        dispatch(&transport, "https://hooks.example.com/lead", &payload())
            .await
            .unwrap();
        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "https://hooks.example.com/lead");
        assert_eq!(seen[0].1, payload());
    }

    #[tokio::test]
    async fn test_dispatch_non_2xx_is_server_rejected() {
        for status in [301, 400, 404, 500, 503] {
            let transport = StubTransport::replying(Ok(status));
            assert_eq!(
                dispatch(&transport, "https://hook", &payload()).await,
                Err(LeadError::ServerRejected { status })
            );
        }
    }

    #[tokio::test]
    async fn test_dispatch_transport_error() {
        let transport = StubTransport::replying(Err("connection refused".to_string()));
        assert_eq!(
            dispatch(&transport, "https://hook", &payload()).await,
            Err(LeadError::TransportFailure("connection refused".to_string()))
        );
    }
}
