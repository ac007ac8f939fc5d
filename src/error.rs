//! Error types for catalog operations.
//!
//! This module provides the [`CatalogError`] type for all catalog library operations
//! and the [`Result`] convenience type.
//!
//! Missing record fields are never errors: accessors return `Option` and the
//! summary and formatting paths substitute placeholder text. A failed update
//! lookup is reported as `false` by
//! [`CatalogManager::update_record`](crate::catalog::CatalogManager::update_record).

use thiserror::Error;

/// Error type for all catalog library operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A non-sequence value was supplied where a sequence of records is required.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A JSON value could not be turned into a catalog record.
    #[error("Invalid catalog record: {0}")]
    InvalidRecord(String),

    /// JSON parse or serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from the underlying source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
