//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod agencies;
#[allow(clippy::missing_errors_doc)]
pub mod quote_requests;
#[allow(clippy::missing_errors_doc)]
pub mod services;

use axum::Router;
use axum::routing::get;

use maisonci_app::ports::{AgencyCatalog, EventPublisher, QuoteRequestRepository, ServiceCatalog};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<SC, AC, QR, EP>() -> Router<AppState<SC, AC, QR, EP>>
where
    SC: ServiceCatalog + Send + Sync + 'static,
    AC: AgencyCatalog + Send + Sync + 'static,
    QR: QuoteRequestRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        // Services
        .route("/services", get(services::list::<SC, AC, QR, EP>))
        .route("/services/{id}", get(services::get::<SC, AC, QR, EP>))
        // Agencies
        .route("/agencies", get(agencies::list::<SC, AC, QR, EP>))
        .route("/agencies/facets", get(agencies::facets::<SC, AC, QR, EP>))
        .route("/agencies/{id}", get(agencies::get::<SC, AC, QR, EP>))
        // Quote requests
        .route(
            "/quote-requests",
            get(quote_requests::list::<SC, AC, QR, EP>)
                .post(quote_requests::create::<SC, AC, QR, EP>),
        )
}
