//! API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod locations;

use axum::Router;
use axum::routing::get;

use locbox_app::ports::LocationRepository;

use crate::state::AppState;

/// Build the API routes.
///
/// Only `GET` and `POST` exist on `/locations`; axum answers other methods
/// with `405 Method Not Allowed`.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: LocationRepository + Send + Sync + 'static,
{
    Router::new().route(
        "/locations",
        get(locations::list::<R>).post(locations::create::<R>),
    )
}
