//! Server dependencies (using traits for testability)
//!
//! This module provides the dependency container shared by every route.
//! Relay upstreams go through trait objects so tests can swap in mocks.

use anyhow::{Context, Result};
use async_trait::async_trait;
use catalog::{Catalog, LocalizedCatalogs, Translations};
use emailoctopus::{EmailOctopusError, EmailOctopusOptions, EmailOctopusService};
use std::sync::Arc;
use tracing::{debug, info, warn};
use web3forms::{FormSubmission, Web3FormsError, Web3FormsService};

use crate::config::Config;
use crate::domains::submissions::ToolSubmission;
use crate::kernel::{
    BaseFormRelay, BaseMailingList, FormRelayError, MailingListError, RelayReceipt, Subscriber,
};

// =============================================================================
// EmailOctopusService Adapter (implements BaseMailingList trait)
// =============================================================================

/// Wrapper around EmailOctopusService that implements BaseMailingList trait
pub struct EmailOctopusAdapter(pub Arc<EmailOctopusService>);

impl EmailOctopusAdapter {
    pub fn new(service: Arc<EmailOctopusService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseMailingList for EmailOctopusAdapter {
    async fn add_subscriber(&self, email: &str) -> Result<Subscriber, MailingListError> {
        debug!(list_id = %self.0.list_id(), "Creating EmailOctopus contact");
        match self.0.create_contact(email).await {
            Ok(contact) => Ok(Subscriber {
                id: contact.id,
                email: contact.email_address,
            }),
            Err(e) if e.is_member_exists() => Err(MailingListError::AlreadySubscribed),
            Err(EmailOctopusError::Api {
                status, message, ..
            }) => Err(MailingListError::Rejected { status, message }),
            Err(e) => Err(MailingListError::Unavailable(anyhow::Error::new(e))),
        }
    }
}

// =============================================================================
// Web3FormsService Adapter (implements BaseFormRelay trait)
// =============================================================================

/// Wrapper around Web3FormsService that implements BaseFormRelay trait
pub struct Web3FormsAdapter(pub Arc<Web3FormsService>);

impl Web3FormsAdapter {
    pub fn new(service: Arc<Web3FormsService>) -> Self {
        Self(service)
    }
}

/// Map a tool submission onto the relay's envelope and field list.
pub fn to_form_submission(submission: &ToolSubmission) -> FormSubmission {
    let mut form = FormSubmission::new()
        .subject(format!("New tool submission: {}", submission.name))
        .from_name("AIBench")
        .reply_to(&submission.email)
        .field("name", &submission.name)
        .field("website_url", &submission.website_url)
        .field("icon_url", &submission.icon_url)
        .field("category_id", &submission.category_id)
        .field("description", &submission.description)
        .field("email", &submission.email);

    if let Some(category_name) = &submission.category_name {
        form = form.field("category_name", category_name);
    }
    if let Some(long_description) = &submission.long_description {
        form = form.field("long_description", long_description);
    }
    if !submission.tags.is_empty() {
        form = form.field("tags", submission.tags.join(", "));
    }
    if let Some(pricing) = &submission.pricing {
        form = form.field("pricing", pricing);
    }

    form
}

#[async_trait]
impl BaseFormRelay for Web3FormsAdapter {
    async fn relay_submission(
        &self,
        submission: &ToolSubmission,
    ) -> Result<RelayReceipt, FormRelayError> {
        match self.0.submit(&to_form_submission(submission)).await {
            Ok(response) => Ok(RelayReceipt {
                message: response.message,
            }),
            Err(Web3FormsError::Api { status, message }) => {
                Err(FormRelayError::Rejected { status, message })
            }
            Err(e) => Err(FormRelayError::Unavailable(anyhow::Error::new(e))),
        }
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Which relay credentials were present at startup
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigStatus {
    pub has_api_key: bool,
    pub has_list_id: bool,
    pub has_access_key: bool,
}

/// Dependencies shared by every request handler
#[derive(Clone)]
pub struct ServerDeps {
    /// Catalog per locale, built once at startup
    pub catalogs: Arc<LocalizedCatalogs>,
    pub translations: Arc<Translations>,
    /// `None` when EmailOctopus credentials are missing
    pub mailing_list: Option<Arc<dyn BaseMailingList>>,
    /// `None` when the Web3Forms access key is missing
    pub form_relay: Option<Arc<dyn BaseFormRelay>>,
    pub config_status: ConfigStatus,
}

impl ServerDeps {
    pub fn new(
        catalog: Catalog,
        translations: Translations,
        mailing_list: Option<Arc<dyn BaseMailingList>>,
        form_relay: Option<Arc<dyn BaseFormRelay>>,
        config_status: ConfigStatus,
    ) -> Self {
        let catalogs = LocalizedCatalogs::build(&catalog, &translations);

        Self {
            catalogs: Arc::new(catalogs),
            translations: Arc::new(translations),
            mailing_list,
            form_relay,
            config_status,
        }
    }

    /// Load the built-in catalog and locale bundles and wire real upstreams
    /// for whichever credentials are configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = Catalog::builtin().context("Failed to load built-in catalog")?;
        let translations =
            Translations::builtin().context("Failed to load built-in locale bundles")?;
        info!(
            tools = catalog.tools().len(),
            categories = catalog.categories().len(),
            "Catalog loaded"
        );

        let mailing_list: Option<Arc<dyn BaseMailingList>> = match (
            &config.emailoctopus_api_key,
            &config.emailoctopus_list_id,
        ) {
            (Some(api_key), Some(list_id)) => {
                let service = EmailOctopusService::new(EmailOctopusOptions {
                    api_key: api_key.clone(),
                    list_id: list_id.clone(),
                });
                Some(Arc::new(EmailOctopusAdapter::new(Arc::new(service))))
            }
            _ => {
                warn!("EmailOctopus credentials not set; /api/subscribe will return configuration errors");
                None
            }
        };

        let form_relay: Option<Arc<dyn BaseFormRelay>> = match &config.web3forms_access_key {
            Some(access_key) => Some(Arc::new(Web3FormsAdapter::new(Arc::new(
                Web3FormsService::new(access_key.clone()),
            )))),
            None => {
                warn!("WEB3FORMS_ACCESS_KEY not set; /api/submit will return configuration errors");
                None
            }
        };

        let config_status = ConfigStatus {
            has_api_key: config.emailoctopus_api_key.is_some(),
            has_list_id: config.emailoctopus_list_id.is_some(),
            has_access_key: config.web3forms_access_key.is_some(),
        };

        Ok(Self::new(
            catalog,
            translations,
            mailing_list,
            form_relay,
            config_status,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ToolSubmission {
        ToolSubmission {
            name: "Foo".into(),
            website_url: "https://foo.example".into(),
            icon_url: "https://foo.example/icon.png".into(),
            category_id: "3".into(),
            category_name: Some("Coding Development".into()),
            description: "Writes code".into(),
            long_description: None,
            tags: vec!["ai".into(), "code".into()],
            pricing: None,
            email: "maker@foo.example".into(),
        }
    }

    #[test]
    fn form_submission_carries_all_present_fields() {
        let payload = to_form_submission(&submission()).to_payload("key");

        assert_eq!(payload["subject"], "New tool submission: Foo");
        assert_eq!(payload["replyto"], "maker@foo.example");
        assert_eq!(payload["category_name"], "Coding Development");
        assert_eq!(payload["tags"], "ai, code");
        assert!(payload.get("long_description").is_none());
        assert!(payload.get("pricing").is_none());
    }

    #[test]
    fn from_config_without_credentials_has_no_upstreams() {
        let deps = ServerDeps::from_config(&Config::default()).unwrap();
        assert!(deps.mailing_list.is_none());
        assert!(deps.form_relay.is_none());
        assert!(!deps.config_status.has_api_key);
    }

    #[test]
    fn from_config_with_credentials_wires_upstreams() {
        let config = Config {
            emailoctopus_api_key: Some("key".into()),
            emailoctopus_list_id: Some("list".into()),
            web3forms_access_key: Some("access".into()),
            ..Default::default()
        };
        let deps = ServerDeps::from_config(&config).unwrap();
        assert!(deps.mailing_list.is_some());
        assert!(deps.form_relay.is_some());
        assert!(deps.config_status.has_access_key);
    }
}
