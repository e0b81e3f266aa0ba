//! Error types for the EmailOctopus client.

use thiserror::Error;

/// Error code EmailOctopus returns when the address is already on the list.
pub const MEMBER_EXISTS_WITH_EMAIL_ADDRESS: &str = "MEMBER_EXISTS_WITH_EMAIL_ADDRESS";

/// Result type for EmailOctopus client operations.
pub type Result<T> = std::result::Result<T, EmailOctopusError>;

#[derive(Debug, Error)]
pub enum EmailOctopusError {
    /// Request never produced a response (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response with a readable error body
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },

    /// Response body was not the JSON we expected
    #[error("Parse error: {0}")]
    Parse(String),
}

impl EmailOctopusError {
    /// True when the contact is already subscribed to the list.
    pub fn is_member_exists(&self) -> bool {
        matches!(
            self,
            EmailOctopusError::Api { code: Some(code), .. } if code == MEMBER_EXISTS_WITH_EMAIL_ADDRESS
        )
    }
}
