//! Tool submission activity: validates a suggested tool and relays it.

use catalog::Catalog;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domains::submissions::models::{is_spam, ToolSubmission};
use crate::kernel::{BaseFormRelay, FormRelayError};

#[derive(Debug)]
pub enum SubmissionOutcome {
    Relayed { message: String },
    /// Honeypot was filled; acknowledged but never forwarded
    Discarded,
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The multipart body could not be read
    #[error("Invalid form data")]
    InvalidForm(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Server configuration error")]
    NotConfigured,

    #[error("Submission failed ({status})")]
    Upstream { status: u16, message: String },

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

/// Validate raw form fields and forward them to the review inbox.
///
/// 1. Drop bot traffic (honeypot) with a success answer
/// 2. Require every mandatory field
/// 3. Require a configured form relay
/// 4. Forward once, with the category name resolved from `catalog`
pub async fn submit_tool(
    fields: &HashMap<String, String>,
    catalog: &Catalog,
    form_relay: Option<&dyn BaseFormRelay>,
) -> Result<SubmissionOutcome, SubmissionError> {
    if is_spam(fields) {
        warn!("Honeypot field filled; discarding tool submission");
        return Ok(SubmissionOutcome::Discarded);
    }

    let mut submission =
        ToolSubmission::from_fields(fields).map_err(SubmissionError::MissingField)?;

    if let Some(category) = catalog.category(&submission.category_id) {
        submission = submission.with_category_name(&category.name);
    }

    let Some(form_relay) = form_relay else {
        error!("Missing Web3Forms configuration");
        return Err(SubmissionError::NotConfigured);
    };

    match form_relay.relay_submission(&submission).await {
        Ok(receipt) => {
            info!(tool = %submission.name, "Tool submission relayed");
            Ok(SubmissionOutcome::Relayed {
                message: receipt.message,
            })
        }
        Err(FormRelayError::Rejected { status, message }) => {
            warn!(status, message = %message, "Web3Forms rejected submission");
            Err(SubmissionError::Upstream { status, message })
        }
        Err(FormRelayError::Unavailable(e)) => {
            error!(error = %e, "Submission error");
            Err(SubmissionError::Internal(e))
        }
    }
}
