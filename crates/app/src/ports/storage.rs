//! Storage ports: read access to the catalog and the quote-request log.
//!
//! The catalog ports are read-only: services and agencies are reference data
//! loaded at startup. The quote-request port is append-only: there is no
//! update or delete.

use std::future::Future;

use maisonci_domain::agency::Agency;
use maisonci_domain::error::MaisonError;
use maisonci_domain::id::{AgencyId, ServiceId};
use maisonci_domain::quote_request::QuoteRequest;
use maisonci_domain::service::Service;

/// Read access to the [`Service`] catalog.
pub trait ServiceCatalog {
    /// All services, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, MaisonError>> + Send;

    /// The service with the given key, if any.
    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, MaisonError>> + Send;
}

/// Read access to the [`Agency`] directory.
pub trait AgencyCatalog {
    /// All agencies, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Agency>, MaisonError>> + Send;

    /// The agency with the given key, if any.
    fn get_by_id(
        &self,
        id: AgencyId,
    ) -> impl Future<Output = Result<Option<Agency>, MaisonError>> + Send;
}

/// Append-only log of [`QuoteRequest`]s.
pub trait QuoteRequestRepository {
    /// Append a validated request and return it.
    fn create(
        &self,
        request: QuoteRequest,
    ) -> impl Future<Output = Result<QuoteRequest, MaisonError>> + Send;

    /// All stored requests, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<QuoteRequest>, MaisonError>> + Send;
}
