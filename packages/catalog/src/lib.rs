//! AI tool catalog
//!
//! Static tool and category records, the search/filter/sort query engine,
//! curated collections and locale-keyed text lookup.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::{Catalog, QueryState, SortKey};
//!
//! let catalog = Catalog::builtin()?;
//! let state = QueryState::new().with_query("chat").with_sort(SortKey::Rating);
//! for tool in catalog.query(&state) {
//!     println!("{} ({})", tool.name, tool.rating);
//! }
//! ```

pub mod collections;
pub mod dataset;
pub mod error;
pub mod i18n;
pub mod localize;
pub mod models;
pub mod query;
pub mod search;

pub use collections::{collection, collections, Collection, CollectionKind};
pub use dataset::Catalog;
pub use error::{CatalogError, Result};
pub use i18n::{I18nError, Locale, Translations};
pub use localize::LocalizedCatalogs;
pub use models::{CategoryRecord, IconName, Pricing, ToolRecord};
pub use query::{apply_query, sort_tools, QueryState, SortKey};
pub use search::ToolSearch;
