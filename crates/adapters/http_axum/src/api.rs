//! Versioned JSON API and change stream, mounted under `/api/v1`.

pub mod devices;
pub mod refresh;

use axum::Router;
use axum::routing::get;

use mockhub_app::ports::DeviceRepository;

use crate::state::AppState;

/// Build the `/api/v1` sub-router.
pub fn routes<DR>() -> Router<AppState<DR>>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/devices", get(devices::list::<DR>))
        .route("/device/{device_id}", get(devices::get::<DR>))
        .route("/refresh", get(refresh::stream::<DR>))
}
