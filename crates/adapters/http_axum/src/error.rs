//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use locbox_domain::error::LocboxError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps handler failures to an HTTP response with appropriate status code.
///
/// Client mistakes become `400` with the reason. Everything on the server
/// side is logged and becomes a bare `500`.
pub enum ApiError {
    /// Failure reported by the application layer.
    Domain(LocboxError),
    /// The response body could not be serialized.
    Encode(serde_json::Error),
}

impl From<LocboxError> for ApiError {
    fn from(err: LocboxError) -> Self {
        Self::Domain(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Domain(LocboxError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(err @ LocboxError::KeyExhausted { .. }) => {
                tracing::error!(error = %err, "could not allocate location key");
                internal()
            }
            Self::Domain(LocboxError::Storage(err)) => {
                tracing::error!(error = %err, source = ?err.source(), "storage error");
                internal()
            }
            Self::Encode(err) => {
                tracing::error!(error = %err, "response encoding error");
                internal()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error".to_string(),
    )
}
