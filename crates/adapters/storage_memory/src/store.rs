//! Store setup: the shared catalog and quote-request log.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use maisonci_domain::catalog::Catalog;
use maisonci_domain::quote_request::QuoteRequest;

use crate::catalog_repo::{MemoryAgencyCatalog, MemoryServiceCatalog};
use crate::error::StorageError;
use crate::quote_request_repo::MemoryQuoteRequestRepository;
use crate::seed;

/// Configuration for the in-memory storage adapter.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// JSON seed file replacing the built-in catalog, if set.
    pub seed_path: Option<PathBuf>,
}

impl Config {
    /// Build a [`Store`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the seed cannot be loaded or is invalid.
    pub fn build(self) -> Result<Store, StorageError> {
        let catalog = match self.seed_path {
            Some(path) => seed::load(&path)?,
            None => seed::default_catalog()?,
        };
        Ok(Store::new(catalog))
    }
}

/// Holds the catalog and the quote-request log, and hands out repositories
/// sharing them.
pub struct Store {
    catalog: Arc<Catalog>,
    quote_requests: Arc<RwLock<Vec<QuoteRequest>>>,
}

impl Store {
    /// Wrap an already-validated catalog with an empty quote-request log.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            quote_requests: Arc::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn service_catalog(&self) -> MemoryServiceCatalog {
        MemoryServiceCatalog::new(Arc::clone(&self.catalog))
    }

    #[must_use]
    pub fn agency_catalog(&self) -> MemoryAgencyCatalog {
        MemoryAgencyCatalog::new(Arc::clone(&self.catalog))
    }

    #[must_use]
    pub fn quote_request_repository(&self) -> MemoryQuoteRequestRepository {
        MemoryQuoteRequestRepository::new(Arc::clone(&self.quote_requests))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maisonci_app::ports::{AgencyCatalog, QuoteRequestRepository, ServiceCatalog};
    use maisonci_domain::id::QuoteRequestId;
    use maisonci_domain::quote_request::NewQuoteRequest;

    #[test]
    fn should_build_default_store_without_seed_path() {
        let store = Config::default().build().unwrap();
        assert_eq!(store.catalog().services().len(), 3);
        assert_eq!(store.catalog().agencies().len(), 6);
    }

    #[test]
    fn should_fail_when_seed_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            seed_path: Some(dir.path().join("missing.json")),
        };
        assert!(matches!(config.build(), Err(StorageError::Io(_))));
    }

    #[tokio::test]
    async fn should_share_state_between_handed_out_repositories() {
        let store = Config::default().build().unwrap();
        let writer = store.quote_request_repository();
        let reader = store.quote_request_repository();

        let request = NewQuoteRequest {
            nom: "Awa".to_string(),
            email: "awa@example.ci".to_string(),
            service: "Jardinage".to_string(),
            message: "Tonte de pelouse mensuelle.".to_string(),
        }
        .accept(QuoteRequestId::new(), maisonci_domain::time::now())
        .unwrap();
        writer.create(request.clone()).await.unwrap();

        assert_eq!(reader.get_all().await.unwrap(), vec![request]);
        assert_eq!(store.service_catalog().get_all().await.unwrap().len(), 3);
        assert_eq!(store.agency_catalog().get_all().await.unwrap().len(), 6);
    }
}
