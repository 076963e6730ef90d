//! JSON REST handlers for quote requests.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use maisonci_app::ports::{AgencyCatalog, EventPublisher, QuoteRequestRepository, ServiceCatalog};
use maisonci_domain::error::{InvalidInputError, MaisonError};
use maisonci_domain::quote_request::{NewQuoteRequest, QuoteRequest};
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<QuoteRequest>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<QuoteRequest>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/quote-requests`
pub async fn list<SC, AC, QR, EP>(
    State(state): State<AppState<SC, AC, QR, EP>>,
) -> Result<ListResponse, ApiError>
where
    SC: ServiceCatalog + Send + Sync + 'static,
    AC: AgencyCatalog + Send + Sync + 'static,
    QR: QuoteRequestRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let requests = state.quote_request_service.list_quote_requests().await?;
    Ok(ListResponse::Ok(Json(requests)))
}

/// `POST /api/quote-requests`
///
/// Missing fields decode as empty strings and are reported by field
/// validation; a body that is not a JSON object is rejected as malformed.
pub async fn create<SC, AC, QR, EP>(
    State(state): State<AppState<SC, AC, QR, EP>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    SC: ServiceCatalog + Send + Sync + 'static,
    AC: AgencyCatalog + Send + Sync + 'static,
    QR: QuoteRequestRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let input: NewQuoteRequest = serde_json::from_value(Value::Object(body))
        .map_err(|err| MaisonError::from(InvalidInputError::MalformedPayload(err.to_string())))?;
    let created = state
        .quote_request_service
        .create_quote_request(input)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}
