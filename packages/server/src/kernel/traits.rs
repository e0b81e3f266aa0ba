// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no relay rules.
// Relay rules (validation, duplicate handling, status mapping) are domain
// functions in domains/ that call through these traits.
//
// Naming convention: Base* for trait names (e.g., BaseMailingList)

use async_trait::async_trait;
use thiserror::Error;

use crate::domains::submissions::ToolSubmission;

// =============================================================================
// Mailing List Trait (Infrastructure - newsletter contacts)
// =============================================================================

/// A contact accepted by the mailing list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum MailingListError {
    /// The address is already on the list
    #[error("Contact already subscribed")]
    AlreadySubscribed,

    /// The provider answered with a non-success status
    #[error("Mailing list rejected the contact ({status})")]
    Rejected { status: u16, message: Option<String> },

    /// Network failure or unreadable response
    #[error("Mailing list unavailable: {0}")]
    Unavailable(#[from] anyhow::Error),
}

#[async_trait]
pub trait BaseMailingList: Send + Sync {
    /// Add an email address to the newsletter list
    async fn add_subscriber(&self, email: &str) -> Result<Subscriber, MailingListError>;
}

// =============================================================================
// Form Relay Trait (Infrastructure - tool submissions)
// =============================================================================

/// Acknowledgement from the form relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReceipt {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum FormRelayError {
    #[error("Form relay rejected the submission ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Form relay unavailable: {0}")]
    Unavailable(#[from] anyhow::Error),
}

#[async_trait]
pub trait BaseFormRelay: Send + Sync {
    /// Forward a tool submission for review
    async fn relay_submission(
        &self,
        submission: &ToolSubmission,
    ) -> Result<RelayReceipt, FormRelayError>;
}
