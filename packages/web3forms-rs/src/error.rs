//! Error types for the Web3Forms client.

use thiserror::Error;

/// Result type for Web3Forms client operations.
pub type Result<T> = std::result::Result<T, Web3FormsError>;

#[derive(Debug, Error)]
pub enum Web3FormsError {
    #[error("Network error: {0}")]
    Network(String),

    /// Relay answered but did not accept the submission
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}
