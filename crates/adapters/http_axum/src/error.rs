//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use maisonci_domain::error::{InvalidInputError, MaisonError, ValidationErrors};

/// Top-level message of a field validation failure.
pub const INVALID_REQUEST_DATA: &str = "Invalid request data";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<FieldIssue>,
}

/// One rejected field in a validation failure body.
#[derive(Serialize)]
struct FieldIssue {
    field: &'static str,
    message: String,
}

fn field_issues(errors: &ValidationErrors) -> Vec<FieldIssue> {
    errors
        .iter()
        .map(|err| FieldIssue {
            field: err.field(),
            message: err.to_string(),
        })
        .collect()
}

/// Maps [`MaisonError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(MaisonError);

impl From<MaisonError> for ApiError {
    fn from(err: MaisonError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(InvalidInputError::MalformedPayload(rejection.body_text()).into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(InvalidInputError::MalformedPayload(rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self.0 {
            MaisonError::InvalidInput(err) => (StatusCode::BAD_REQUEST, err.to_string(), Vec::new()),
            MaisonError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                INVALID_REQUEST_DATA.to_string(),
                field_issues(errors),
            ),
            MaisonError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string(), Vec::new()),
            MaisonError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
