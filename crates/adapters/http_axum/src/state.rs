//! Shared application state for axum handlers.

use std::sync::Arc;

use maisonci_app::ports::{AgencyCatalog, EventPublisher, QuoteRequestRepository, ServiceCatalog};
use maisonci_app::services::catalog_service::CatalogService;
use maisonci_app::services::quote_request_service::QuoteRequestService;

/// Application state shared across all axum handlers.
///
/// Generic over the catalog, quote-request repository and event publisher
/// types to avoid dynamic dispatch. `Clone` is implemented manually so the
/// underlying types themselves do not need to be `Clone`; only the `Arc`
/// wrappers are cloned.
pub struct AppState<SC, AC, QR, EP> {
    /// Read use-cases over services and agencies.
    pub catalog_service: Arc<CatalogService<SC, AC>>,
    /// Quote-request intake.
    pub quote_request_service: Arc<QuoteRequestService<QR, EP>>,
}

impl<SC, AC, QR, EP> Clone for AppState<SC, AC, QR, EP> {
    fn clone(&self) -> Self {
        Self {
            catalog_service: Arc::clone(&self.catalog_service),
            quote_request_service: Arc::clone(&self.quote_request_service),
        }
    }
}

impl<SC, AC, QR, EP> AppState<SC, AC, QR, EP>
where
    SC: ServiceCatalog + Send + Sync + 'static,
    AC: AgencyCatalog + Send + Sync + 'static,
    QR: QuoteRequestRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        catalog_service: CatalogService<SC, AC>,
        quote_request_service: QuoteRequestService<QR, EP>,
    ) -> Self {
        Self {
            catalog_service: Arc::new(catalog_service),
            quote_request_service: Arc::new(quote_request_service),
        }
    }
}
