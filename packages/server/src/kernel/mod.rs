//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{ConfigStatus, EmailOctopusAdapter, ServerDeps, Web3FormsAdapter};
pub use test_dependencies::{MockFormRelay, MockMailingList};
pub use traits::*;
