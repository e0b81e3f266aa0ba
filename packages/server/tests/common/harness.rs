//! Test harness that serves the real router against mock relays.

use std::sync::Arc;

use axum::Router;
use catalog::{Catalog, Translations};
use server_core::kernel::{
    BaseFormRelay, BaseMailingList, ConfigStatus, MockFormRelay, MockMailingList, ServerDeps,
};
use server_core::server::build_app;

pub struct TestHarness {
    pub app: Router,
    /// Shares its call log with the copy wired into the app
    pub mailing_list: MockMailingList,
    pub form_relay: MockFormRelay,
}

impl TestHarness {
    /// Both relays configured and accepting.
    pub fn new() -> Self {
        Self::with_relays(Some(MockMailingList::new()), Some(MockFormRelay::new()))
    }

    /// No relay credentials at all.
    pub fn unconfigured() -> Self {
        Self::with_relays(None, None)
    }

    pub fn with_mailing_list(mailing_list: MockMailingList) -> Self {
        Self::with_relays(Some(mailing_list), Some(MockFormRelay::new()))
    }

    pub fn with_form_relay(form_relay: MockFormRelay) -> Self {
        Self::with_relays(Some(MockMailingList::new()), Some(form_relay))
    }

    /// Real upstream adapters, e.g. pointed at a local stub server. The
    /// mock call logs stay empty.
    pub fn with_upstreams(
        mailing_list: Arc<dyn BaseMailingList>,
        form_relay: Arc<dyn BaseFormRelay>,
    ) -> Self {
        init_tracing();

        let config_status = ConfigStatus {
            has_api_key: true,
            has_list_id: true,
            has_access_key: true,
        };

        let deps = ServerDeps::new(
            Catalog::builtin().expect("built-in catalog loads"),
            Translations::builtin().expect("built-in bundles load"),
            Some(mailing_list),
            Some(form_relay),
            config_status,
        );

        Self {
            app: build_app(Arc::new(deps), &[]),
            mailing_list: MockMailingList::default(),
            form_relay: MockFormRelay::default(),
        }
    }

    pub fn with_relays(
        mailing_list: Option<MockMailingList>,
        form_relay: Option<MockFormRelay>,
    ) -> Self {
        init_tracing();

        let config_status = ConfigStatus {
            has_api_key: mailing_list.is_some(),
            has_list_id: mailing_list.is_some(),
            has_access_key: form_relay.is_some(),
        };

        let deps = ServerDeps::new(
            Catalog::builtin().expect("built-in catalog loads"),
            Translations::builtin().expect("built-in bundles load"),
            mailing_list
                .clone()
                .map(|m| Arc::new(m) as Arc<dyn BaseMailingList>),
            form_relay
                .clone()
                .map(|r| Arc::new(r) as Arc<dyn BaseFormRelay>),
            config_status,
        );

        Self {
            app: build_app(Arc::new(deps), &[]),
            mailing_list: mailing_list.unwrap_or_default(),
            form_relay: form_relay.unwrap_or_default(),
        }
    }
}

fn init_tracing() {
    // RUST_LOG=debug cargo test -- --nocapture
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
