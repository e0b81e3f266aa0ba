//! Newsletter subscription activity: adds an address to the mailing list.

use thiserror::Error;
use tracing::{error, info, warn};

use crate::kernel::{BaseMailingList, MailingListError, Subscriber};

#[derive(Debug)]
pub enum SubscribeOutcome {
    Subscribed(Subscriber),
    /// The provider already had the address; reported as success
    AlreadySubscribed,
}

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Server configuration error")]
    NotConfigured,

    /// Provider rejected the request; its status is passed through
    #[error("Subscription failed ({status})")]
    Upstream { status: u16, message: Option<String> },

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

/// Shape check only: present and containing an `@`.
pub fn is_plausible_email(email: &str) -> bool {
    email.contains('@')
}

/// Subscribe `email` to the newsletter.
///
/// 1. Reject a missing address or one without `@`
/// 2. Require a configured mailing list
/// 3. Forward once; an existing contact counts as success
pub async fn subscribe(
    email: Option<&str>,
    mailing_list: Option<&dyn BaseMailingList>,
) -> Result<SubscribeOutcome, SubscribeError> {
    let email = match email {
        Some(email) if is_plausible_email(email) => email,
        _ => return Err(SubscribeError::InvalidEmail),
    };

    let Some(mailing_list) = mailing_list else {
        error!("Missing EmailOctopus configuration");
        return Err(SubscribeError::NotConfigured);
    };

    match mailing_list.add_subscriber(email).await {
        Ok(subscriber) => {
            info!(contact_id = %subscriber.id, "Newsletter subscription created");
            Ok(SubscribeOutcome::Subscribed(subscriber))
        }
        Err(MailingListError::AlreadySubscribed) => {
            info!("Newsletter address already subscribed");
            Ok(SubscribeOutcome::AlreadySubscribed)
        }
        Err(MailingListError::Rejected { status, message }) => {
            warn!(status, message = ?message, "EmailOctopus rejected subscription");
            Err(SubscribeError::Upstream { status, message })
        }
        Err(MailingListError::Unavailable(e)) => {
            error!(error = %e, "Subscription error");
            Err(SubscribeError::Internal(e))
        }
    }
}
