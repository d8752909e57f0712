//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use mockhub_app::ports::DeviceRepository;

use crate::cors::CorsHeaders;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the device API and change stream under `/api/v1` and stamps the
/// CORS headers on every response, including 404s. A trailing slash is
/// trimmed before routing, so `/api/v1/devices/` serves the same as
/// `/api/v1/devices`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<DR>(state: AppState<DR>, cors: &CorsHeaders) -> Router
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", crate::api::routes());

    let app = cors
        .apply(router)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Router layers run after route matching, so path normalisation has to
    // wrap the whole router.
    Router::new().fallback_service(NormalizePath::trim_trailing_slash(app))
}

async fn health_check() -> &'static str {
    "OK"
}
