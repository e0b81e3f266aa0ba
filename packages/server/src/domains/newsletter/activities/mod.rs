pub mod subscribe;

pub use subscribe::{subscribe, SubscribeError, SubscribeOutcome};
