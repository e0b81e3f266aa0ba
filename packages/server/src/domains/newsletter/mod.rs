//! Newsletter domain - relays sign-ups to the mailing list provider

pub mod activities;
pub mod data;

pub use activities::{subscribe, SubscribeError, SubscribeOutcome};
pub use data::{SubscribeRequest, SubscribeResponse, SubscribedContact};
