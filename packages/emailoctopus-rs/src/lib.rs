// https://emailoctopus.com/api-documentation/lists/create-contact

pub mod error;
pub mod models;

pub use error::{EmailOctopusError, Result, MEMBER_EXISTS_WITH_EMAIL_ADDRESS};
pub use models::{ApiErrorBody, ApiErrorDetail, Contact, ContactStatus, CreateContactRequest};

use reqwest::Client;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://emailoctopus.com/api/1.6";

#[derive(Debug, Clone)]
pub struct EmailOctopusOptions {
    pub api_key: String,
    pub list_id: String,
}

#[derive(Debug, Clone)]
pub struct EmailOctopusService {
    http_client: Client,
    options: EmailOctopusOptions,
    base_url: String,
}

impl EmailOctopusService {
    pub fn new(options: EmailOctopusOptions) -> Self {
        Self {
            http_client: Client::new(),
            options,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client somewhere else (proxy, local stub).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn list_id(&self) -> &str {
        &self.options.list_id
    }

    /// Add `email` to the configured list as `SUBSCRIBED`.
    ///
    /// An address that is already on the list comes back as
    /// [`EmailOctopusError::Api`] with code
    /// [`MEMBER_EXISTS_WITH_EMAIL_ADDRESS`].
    pub async fn create_contact(&self, email: &str) -> Result<Contact> {
        let url = format!(
            "{base}/lists/{list_id}/contacts",
            base = self.base_url,
            list_id = self.options.list_id
        );

        let body = CreateContactRequest {
            api_key: &self.options.api_key,
            email_address: email,
            status: ContactStatus::Subscribed,
        };

        let response = self
            .http_client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailOctopusError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| EmailOctopusError::Network(e.to_string()))?;

        debug!(status, list_id = %self.options.list_id, "EmailOctopus responded");
        interpret_response(status, &text)
    }
}

/// Turn a raw status and body into a contact or a typed error.
pub fn interpret_response(status: u16, body: &str) -> Result<Contact> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<Contact>(body)
            .map_err(|e| EmailOctopusError::Parse(format!("Invalid contact response: {}", e)));
    }

    let parsed: ApiErrorBody = serde_json::from_str(body).map_err(|e| {
        warn!(status, "Unreadable EmailOctopus error body");
        EmailOctopusError::Parse(format!("Invalid error response: {}", e))
    })?;

    let detail = parsed.error.unwrap_or(ApiErrorDetail {
        code: None,
        message: None,
    });

    Err(EmailOctopusError::Api {
        status,
        code: detail.code,
        message: detail.message,
    })
}
