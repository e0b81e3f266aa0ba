// https://docs.web3forms.com/getting-started/api-reference

pub mod error;
pub mod models;

pub use error::{Result, Web3FormsError};
pub use models::{FormSubmission, SubmitResponse};

use reqwest::Client;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.web3forms.com";

#[derive(Debug, Clone)]
pub struct Web3FormsService {
    http_client: Client,
    access_key: String,
    base_url: String,
}

impl Web3FormsService {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            access_key: access_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Relay a submission. Resolves only when the relay reports `success`.
    pub async fn submit(&self, submission: &FormSubmission) -> Result<SubmitResponse> {
        let response = self
            .http_client
            .post(format!("{}/submit", self.base_url))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&submission.to_payload(&self.access_key))
            .send()
            .await
            .map_err(|e| Web3FormsError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| Web3FormsError::Network(e.to_string()))?;

        debug!(status, "Web3Forms responded");
        interpret_response(status, &text)
    }
}

/// Turn a raw status and body into an accepted response or a typed error.
pub fn interpret_response(status: u16, body: &str) -> Result<SubmitResponse> {
    let parsed: SubmitResponse = serde_json::from_str(body)
        .map_err(|e| Web3FormsError::Parse(format!("Invalid submit response: {}", e)))?;

    if (200..300).contains(&status) && parsed.success {
        Ok(parsed)
    } else {
        Err(Web3FormsError::Api {
            status,
            message: parsed.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_submission() {
        let ok = interpret_response(200, r#"{"success": true, "message": "Email sent successfully!"}"#)
            .unwrap();
        assert_eq!(ok.message, "Email sent successfully!");
    }

    #[test]
    fn rejected_submission_keeps_status() {
        let err = interpret_response(400, r#"{"success": false, "message": "Invalid access key"}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            Web3FormsError::Api { status: 400, ref message } if message == "Invalid access key"
        ));
    }

    #[test]
    fn success_false_with_ok_status_is_an_error() {
        let err = interpret_response(200, r#"{"success": false, "message": "Spam detected"}"#)
            .unwrap_err();
        assert!(matches!(err, Web3FormsError::Api { status: 200, .. }));
    }

    #[test]
    fn unreadable_body() {
        assert!(matches!(
            interpret_response(500, "Internal Server Error"),
            Err(Web3FormsError::Parse(_))
        ));
    }

    #[test]
    fn payload_embeds_access_key_last() {
        let submission = FormSubmission::new()
            .subject("New tool submission: Foo")
            .from_name("AIBench")
            .field("name", "Foo")
            .field("access_key", "attacker");

        let payload = submission.to_payload("real-key");
        assert_eq!(payload["access_key"], "real-key");
        assert_eq!(payload["name"], "Foo");
        assert_eq!(payload["subject"], "New tool submission: Foo");
        assert_eq!(payload["from_name"], "AIBench");
        assert!(payload.get("replyto").is_none());
    }
}
