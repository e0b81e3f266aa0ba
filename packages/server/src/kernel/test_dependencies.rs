// Test doubles for the relay upstreams
//
// Provides mock services that can be injected into ServerDeps for tests.
// Every mock is cheap to clone and shares its call log with its clones,
// so a test can keep a handle after moving one into ServerDeps.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{
    BaseFormRelay, BaseMailingList, FormRelayError, MailingListError, RelayReceipt, Subscriber,
};
use crate::domains::submissions::ToolSubmission;

// =============================================================================
// Mock Mailing List
// =============================================================================

/// How the mock mailing list answers every call
#[derive(Debug, Clone)]
pub enum MailingListBehavior {
    Accept,
    AlreadySubscribed,
    Reject {
        status: u16,
        message: Option<String>,
    },
    Fail,
}

#[derive(Clone)]
pub struct MockMailingList {
    behavior: MailingListBehavior,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockMailingList {
    pub fn new() -> Self {
        Self::with_behavior(MailingListBehavior::Accept)
    }

    pub fn with_behavior(behavior: MailingListBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn already_subscribed() -> Self {
        Self::with_behavior(MailingListBehavior::AlreadySubscribed)
    }

    pub fn rejecting(status: u16, message: Option<&str>) -> Self {
        Self::with_behavior(MailingListBehavior::Reject {
            status,
            message: message.map(String::from),
        })
    }

    pub fn failing() -> Self {
        Self::with_behavior(MailingListBehavior::Fail)
    }

    /// Get all email addresses that were sent to the list
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockMailingList {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMailingList for MockMailingList {
    async fn add_subscriber(&self, email: &str) -> Result<Subscriber, MailingListError> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(email.to_string());
            calls.len()
        };

        match &self.behavior {
            MailingListBehavior::Accept => Ok(Subscriber {
                id: format!("contact-{}", call_number),
                email: email.to_string(),
            }),
            MailingListBehavior::AlreadySubscribed => Err(MailingListError::AlreadySubscribed),
            MailingListBehavior::Reject { status, message } => Err(MailingListError::Rejected {
                status: *status,
                message: message.clone(),
            }),
            MailingListBehavior::Fail => Err(MailingListError::Unavailable(anyhow::anyhow!(
                "connection refused"
            ))),
        }
    }
}

// =============================================================================
// Mock Form Relay
// =============================================================================

/// How the mock form relay answers every call
#[derive(Debug, Clone)]
pub enum FormRelayBehavior {
    Accept,
    Reject { status: u16, message: String },
    Fail,
}

#[derive(Clone)]
pub struct MockFormRelay {
    behavior: FormRelayBehavior,
    submissions: Arc<Mutex<Vec<ToolSubmission>>>,
}

impl MockFormRelay {
    pub fn new() -> Self {
        Self::with_behavior(FormRelayBehavior::Accept)
    }

    pub fn with_behavior(behavior: FormRelayBehavior) -> Self {
        Self {
            behavior,
            submissions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn rejecting(status: u16, message: &str) -> Self {
        Self::with_behavior(FormRelayBehavior::Reject {
            status,
            message: message.to_string(),
        })
    }

    pub fn failing() -> Self {
        Self::with_behavior(FormRelayBehavior::Fail)
    }

    /// Get all submissions that were relayed
    pub fn submissions(&self) -> Vec<ToolSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

impl Default for MockFormRelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseFormRelay for MockFormRelay {
    async fn relay_submission(
        &self,
        submission: &ToolSubmission,
    ) -> Result<RelayReceipt, FormRelayError> {
        self.submissions.lock().unwrap().push(submission.clone());

        match &self.behavior {
            FormRelayBehavior::Accept => Ok(RelayReceipt {
                message: "Email sent successfully!".to_string(),
            }),
            FormRelayBehavior::Reject { status, message } => Err(FormRelayError::Rejected {
                status: *status,
                message: message.clone(),
            }),
            FormRelayBehavior::Fail => Err(FormRelayError::Unavailable(anyhow::anyhow!(
                "connection refused"
            ))),
        }
    }
}
