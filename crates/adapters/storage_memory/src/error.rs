//! Storage-specific error type.

use maisonci_domain::catalog::CatalogError;
use maisonci_domain::error::MaisonError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The seed file could not be read.
    #[error("failed to read catalog seed file")]
    Io(#[from] std::io::Error),

    /// The seed file is not valid JSON for a catalog.
    #[error("failed to decode catalog seed file")]
    Json(#[from] serde_json::Error),

    /// A built-in seed record failed validation.
    #[error("invalid seed record")]
    Record(#[source] MaisonError),

    /// The seed decoded but breaks catalog invariants.
    #[error("invalid catalog")]
    Catalog(#[from] CatalogError),

    /// A writer panicked while holding the quote-request log.
    #[error("quote request log is poisoned")]
    Poisoned,
}

impl From<StorageError> for MaisonError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
