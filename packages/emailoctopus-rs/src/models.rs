use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    Subscribed,
    Unsubscribed,
    Pending,
}

/// Body of `POST /lists/{list_id}/contacts`
#[derive(Debug, Serialize)]
pub struct CreateContactRequest<'a> {
    pub api_key: &'a str,
    pub email_address: &'a str,
    pub status: ContactStatus,
}

/// A contact as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub id: String,
    pub email_address: String,
    #[serde(default)]
    pub status: Option<ContactStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Error envelope: `{ "error": { "code": "...", "message": "..." } }`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
