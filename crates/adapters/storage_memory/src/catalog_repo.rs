//! In-memory implementations of [`ServiceCatalog`] and [`AgencyCatalog`].

use std::future::Future;
use std::sync::Arc;

use maisonci_app::ports::{AgencyCatalog, ServiceCatalog};
use maisonci_domain::agency::Agency;
use maisonci_domain::catalog::Catalog;
use maisonci_domain::error::MaisonError;
use maisonci_domain::id::{AgencyId, ServiceId};
use maisonci_domain::service::Service;

/// Service catalog served from a shared, immutable [`Catalog`].
#[derive(Debug, Clone)]
pub struct MemoryServiceCatalog {
    catalog: Arc<Catalog>,
}

impl MemoryServiceCatalog {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl ServiceCatalog for MemoryServiceCatalog {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, MaisonError>> + Send {
        let services = self.catalog.services().to_vec();
        async move { Ok(services) }
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, MaisonError>> + Send {
        let found = self.catalog.service(id).cloned();
        async move { Ok(found) }
    }
}

/// Agency directory served from a shared, immutable [`Catalog`].
#[derive(Debug, Clone)]
pub struct MemoryAgencyCatalog {
    catalog: Arc<Catalog>,
}

impl MemoryAgencyCatalog {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl AgencyCatalog for MemoryAgencyCatalog {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Agency>, MaisonError>> + Send {
        let agencies = self.catalog.agencies().to_vec();
        async move { Ok(agencies) }
    }

    fn get_by_id(
        &self,
        id: AgencyId,
    ) -> impl Future<Output = Result<Option<Agency>, MaisonError>> + Send {
        let found = self.catalog.agency(id).cloned();
        async move { Ok(found) }
    }
}
