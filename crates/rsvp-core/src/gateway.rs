//! Submission gateway: best-effort delivery of the completed answer record.
//!
//! The wizard treats delivery as an opaque capability behind the
//! [`SubmissionGateway`] trait. The production implementation posts the
//! record as a flat JSON object to a fixed webhook endpoint; tests and
//! dry runs use [`NullGateway`].

use std::time::Duration;

use log::debug;

use crate::{
    error::{Result, RsvpError},
    models::AnswerRecord,
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Delivery capability for a completed answer record.
///
/// Implementations observe only transport success or failure; the wizard
/// never inspects a structured response. Delivery is at-most-once: the
/// caller does not retry on error.
pub trait SubmissionGateway: Send + Sync {
    /// Delivers the record. Blocking; the wizard calls this off the async
    /// runtime via `spawn_blocking`.
    fn deliver(&self, answers: &AnswerRecord) -> Result<()>;
}

/// Gateway that POSTs the record as JSON to a webhook endpoint.
pub struct WebhookGateway {
    endpoint: String,
    agent: ureq::Agent,
}

impl WebhookGateway {
    /// Creates a gateway for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(REQUEST_TIMEOUT)
            .timeout_write(REQUEST_TIMEOUT)
            .build();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SubmissionGateway for WebhookGateway {
    fn deliver(&self, answers: &AnswerRecord) -> Result<()> {
        let payload = serde_json::to_string(answers)?;
        debug!("posting answer record to {}", self.endpoint);

        match self
            .agent
            .post(&self.endpoint)
            .set("content-type", "application/json")
            .send_string(&payload)
        {
            Ok(resp) if (200..=299).contains(&resp.status()) => Ok(()),
            Ok(resp) => Err(RsvpError::gateway(format!(
                "webhook returned http status {}",
                resp.status()
            ))),
            Err(ureq::Error::Status(code, _)) => Err(RsvpError::gateway(format!(
                "webhook returned http status {code}"
            ))),
            Err(ureq::Error::Transport(err)) => {
                Err(RsvpError::gateway(format!("webhook transport error: {err}")))
            }
        }
    }
}

/// Gateway that accepts and discards every record.
///
/// Used for dry runs and in tests where no outbound call should happen.
#[derive(Debug, Default)]
pub struct NullGateway;

impl SubmissionGateway for NullGateway {
    fn deliver(&self, _answers: &AnswerRecord) -> Result<()> {
        debug!("dry run: answer record not delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_gateway_accepts_everything() {
        let gateway = NullGateway;
        assert!(gateway.deliver(&AnswerRecord::default()).is_ok());
    }

    #[test]
    fn webhook_gateway_keeps_endpoint() {
        let gateway = WebhookGateway::new("https://example.com/exec");
        assert_eq!(gateway.endpoint(), "https://example.com/exec");
    }
}
