//! Handlers for the location collection.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use locbox_app::ports::LocationRepository;
use locbox_domain::error::LocboxError;
use locbox_domain::location::Location;

use crate::error::ApiError;
use crate::state::AppState;

/// Body sent back after a location has been stored.
pub const CONFIRMATION: &str = "ありがとうございました！\n";

const TEXT_PLAIN_UTF8: &str = r#"text/plain; charset="utf-8""#;
const JSON_UTF8: &str = r#"application/json; charset="utf-8""#;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    /// Serialized JSON array of every stored document.
    Ok(Vec<u8>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(body) => ([(header::CONTENT_TYPE, JSON_UTF8)], body).into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => ([(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)], CONFIRMATION).into_response(),
        }
    }
}

/// `GET /locations`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
{
    let locations = state.location_service.list_locations().await?;
    let body = serde_json::to_vec(&locations)?;
    Ok(ListResponse::Ok(body))
}

/// `POST /locations`
///
/// The body is read whole regardless of its content type; it only has to be
/// one valid JSON value. The generated key is not part of the response.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    R: LocationRepository + Send + Sync + 'static,
{
    let location = Location::from_slice(&body).map_err(LocboxError::from)?;
    state.location_service.record_location(location).await?;
    Ok(CreateResponse::Ok)
}
