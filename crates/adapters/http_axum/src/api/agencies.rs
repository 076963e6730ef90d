//! JSON REST handlers for the agency directory.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use maisonci_app::ports::{AgencyCatalog, EventPublisher, QuoteRequestRepository, ServiceCatalog};
use maisonci_domain::agency::Agency;
use maisonci_domain::agency_filter::{AgencyFacets, AgencyFilter, Selection};

use crate::error::ApiError;
use crate::state::AppState;

/// Optional query parameters of the list endpoint.
///
/// `ville` and `service` accept the `all` sentinel; a missing or empty
/// parameter does not restrict the result.
#[derive(Debug, Default, Deserialize)]
pub struct AgencyQuery {
    pub search: Option<String>,
    pub ville: Option<String>,
    pub service: Option<String>,
}

impl From<AgencyQuery> for AgencyFilter {
    fn from(query: AgencyQuery) -> Self {
        Self::new()
            .search(query.search.unwrap_or_default())
            .city(selection(query.ville.as_deref()))
            .service(selection(query.service.as_deref()))
    }
}

// `?ville=` arrives as an empty string; a blank select box means no choice.
fn selection(value: Option<&str>) -> Selection {
    Selection::from(value.filter(|v| !v.is_empty()))
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Agency>>),
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
    Ok(Json<Agency>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the facets endpoint.
pub enum FacetsResponse {
    Ok(Json<AgencyFacets>),
}

impl IntoResponse for FacetsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/agencies`
pub async fn list<SC, AC, QR, EP>(
    State(state): State<AppState<SC, AC, QR, EP>>,
    query: Result<Query<AgencyQuery>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    SC: ServiceCatalog + Send + Sync + 'static,
    AC: AgencyCatalog + Send + Sync + 'static,
    QR: QuoteRequestRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let Query(query) = query?;
    let filter = AgencyFilter::from(query);
    let agencies = state.catalog_service.search_agencies(&filter).await?;
    Ok(ListResponse::Ok(Json(agencies)))
}

/// `GET /api/agencies/:id`
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
    let agency = state.catalog_service.get_agency_by_key(&id).await?;
    Ok(GetResponse::Ok(Json(agency)))
}

/// `GET /api/agencies/facets`
pub async fn facets<SC, AC, QR, EP>(
    State(state): State<AppState<SC, AC, QR, EP>>,
) -> Result<FacetsResponse, ApiError>
where
    SC: ServiceCatalog + Send + Sync + 'static,
    AC: AgencyCatalog + Send + Sync + 'static,
    QR: QuoteRequestRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let facets = state.catalog_service.agency_facets().await?;
    Ok(FacetsResponse::Ok(Json(facets)))
}
