//! Axum router assembly.

use axum::Router;
use tower_http::trace::TraceLayer;

use locbox_app::ports::LocationRepository;

use crate::access_log::AccessLog;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Includes a [`TraceLayer`] that logs every request/response at the `INFO`
/// level through the `tracing` ecosystem (see [`AccessLog`]).
pub fn build<R>(state: AppState<R>) -> Router
where
    R: LocationRepository + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::api::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(AccessLog)
                .on_response(AccessLog),
        )
        .with_state(state)
}
