//! Error types for catalog loading.

use thiserror::Error;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog load and parse errors.
///
/// The query engine itself never fails; these only surface while loading
/// or validating a dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Dataset JSON could not be parsed (includes unknown icon names)
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate tool id: {0}")]
    DuplicateToolId(String),

    #[error("Duplicate category id: {0}")]
    DuplicateCategoryId(String),

    #[error("Duplicate category slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}
