// AIBench - API Core
//
// This crate provides the backend API for the AI tool directory: the
// localized catalog read API plus the newsletter and tool submission relays.
// Architecture follows domain-driven design; upstream services sit behind
// the Base* traits in kernel/.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
