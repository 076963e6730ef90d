//! JSON REST handlers for the service catalog.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use maisonci_app::ports::{AgencyCatalog, EventPublisher, QuoteRequestRepository, ServiceCatalog};
use maisonci_domain::service::Service;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Service>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Service>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/services`
pub async fn list<SC, AC, QR, EP>(
    State(state): State<AppState<SC, AC, QR, EP>>,
) -> Result<ListResponse, ApiError>
where
    SC: ServiceCatalog + Send + Sync + 'static,
    AC: AgencyCatalog + Send + Sync + 'static,
    QR: QuoteRequestRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let services = state.catalog_service.list_services().await?;
    Ok(ListResponse::Ok(Json(services)))
}

/// `GET /api/services/:id`
pub async fn get<SC, AC, QR, EP>(
    State(state): State<AppState<SC, AC, QR, EP>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SC: ServiceCatalog + Send + Sync + 'static,
    AC: AgencyCatalog + Send + Sync + 'static,
    QR: QuoteRequestRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let service = state.catalog_service.get_service_by_key(&id).await?;
    Ok(GetResponse::Ok(Json(service)))
}
