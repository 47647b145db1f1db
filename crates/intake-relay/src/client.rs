use serde::{Deserialize, Serialize};
use tracing::debug;

use intake_report::SubmissionDocument;

use crate::error::RelayError;

/// Opaque acknowledgment from the relay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelayAck {
    /// Optional human-readable confirmation from the relay.
    pub message: Option<String>,
}

/// Delivery seam between the submission engine and the outside world.
///
/// One call per submission attempt, never speculative. Implementations must
/// not retry internally; the engine surfaces failures for a manual retry.
pub trait Relay {
    fn deliver(
        &self,
        document: &SubmissionDocument,
    ) -> impl Future<Output = Result<RelayAck, RelayError>> + Send;
}

/// Where and how to reach the relay endpoint.
///
/// Supplied by the embedding application; the engine reads no environment
/// variables and owns no endpoint defaults.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Endpoint URL the formatted document is POSTed to.
    pub endpoint: String,
    /// Access key forwarded in the request body, when the relay wants one.
    pub access_key: Option<String>,
}

/// Request body per the relay contract.
#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_key: Option<&'a str>,
    category: &'a str,
    subject: &'a str,
    reply_to: &'a str,
    message: &'a str,
}

/// Response envelope per the relay contract.
#[derive(Debug, Deserialize)]
struct RelayEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP implementation of [`Relay`].
#[derive(Debug, Clone)]
pub struct HttpRelay {
    config: RelayConfig,
    client: reqwest::Client,
}

impl HttpRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn request<'a>(&'a self, document: &'a SubmissionDocument) -> RelayRequest<'a> {
        RelayRequest {
            access_key: self.config.access_key.as_deref(),
            category: &document.category,
            subject: &document.subject,
            reply_to: &document.reply_to,
            message: &document.body,
        }
    }
}

impl Relay for HttpRelay {
    async fn deliver(&self, document: &SubmissionDocument) -> Result<RelayAck, RelayError> {
        debug!(category = %document.category, "posting submission to relay");

        let response = self
            .client
            .post(self.config.endpoint.as_str())
            .json(&self.request(document))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = rejection_reason(status, &body);
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                reason,
            });
        }

        let envelope: RelayEnvelope =
            response
                .json()
                .await
                .map_err(|error| RelayError::MalformedResponse {
                    message: error.to_string(),
                })?;

        if envelope.success {
            debug!(category = %document.category, "relay acknowledged submission");
            Ok(RelayAck {
                message: envelope.message,
            })
        } else {
            Err(RelayError::Rejected {
                status: status.as_u16(),
                reason: envelope
                    .message
                    .unwrap_or_else(|| "relay reported failure without a reason".to_string()),
            })
        }
    }
}

/// Prefer the relay's own words; fall back to the HTTP status line.
fn rejection_reason(status: reqwest::StatusCode, body: &str) -> String {
    // Relays commonly return the envelope shape on errors too.
    if let Ok(envelope) = serde_json::from_str::<RelayEnvelope>(body)
        && let Some(message) = envelope.message
    {
        return message;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_reason_prefers_envelope_message() {
        let status = reqwest::StatusCode::UNPROCESSABLE_ENTITY;
        let body = r#"{"success":false,"message":"access key is invalid"}"#;
        assert_eq!(rejection_reason(status, body), "access key is invalid");
    }

    #[test]
    fn rejection_reason_falls_back_to_body_then_status() {
        let status = reqwest::StatusCode::BAD_GATEWAY;
        assert_eq!(rejection_reason(status, "upstream down"), "upstream down");
        assert_eq!(rejection_reason(status, "  "), "Bad Gateway");
    }

    #[test]
    fn request_body_serializes_per_contract() {
        let relay = HttpRelay::new(RelayConfig {
            endpoint: "https://relay.example/submit".to_string(),
            access_key: Some("key-123".to_string()),
        });
        let document = SubmissionDocument {
            category: "gdpr".to_string(),
            subject: "New GDPR readiness assessment enquiry from jane@example.com".to_string(),
            reply_to: "jane@example.com".to_string(),
            body: "GDPR readiness assessment\n".to_string(),
        };

        let json = serde_json::to_value(relay.request(&document)).expect("serialize request");
        assert_eq!(json["access_key"], "key-123");
        assert_eq!(json["category"], "gdpr");
        assert_eq!(json["reply_to"], "jane@example.com");
        assert!(json["message"].as_str().is_some_and(|m| m.contains("GDPR")));
    }

    #[test]
    fn access_key_is_omitted_when_not_configured() {
        let relay = HttpRelay::new(RelayConfig {
            endpoint: "https://relay.example/submit".to_string(),
            access_key: None,
        });
        let document = SubmissionDocument {
            category: "soc2".to_string(),
            subject: "s".to_string(),
            reply_to: "r@example.com".to_string(),
            body: "b".to_string(),
        };
        let json = serde_json::to_value(relay.request(&document)).expect("serialize request");
        assert!(json.get("access_key").is_none());
    }
}
