//! Shared application state for axum handlers.

use std::sync::Arc;

use tokio::sync::watch;

use mockhub_app::event_bus::InProcessEventBus;
use mockhub_app::ports::DeviceRepository;
use mockhub_app::services::device_service::DeviceService;

/// Application state shared across all axum handlers.
///
/// Generic over the device repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<DR> {
    /// Device query service.
    pub device_service: Arc<DeviceService<DR>>,
    /// Bus the simulation publishes device changes on.
    pub event_bus: Arc<InProcessEventBus>,
    /// Flips to `true` when the server is shutting down; open change
    /// streams end when it does.
    pub shutdown: watch::Receiver<bool>,
}

impl<DR> Clone for AppState<DR> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            event_bus: Arc::clone(&self.event_bus),
            shutdown: self.shutdown.clone(),
        }
    }
}

impl<DR> AppState<DR>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    /// Create a new application state.
    ///
    /// The event bus is taken as an `Arc` because the simulation publishes
    /// on the same instance.
    pub fn new(device_service: DeviceService<DR>, event_bus: Arc<InProcessEventBus>) -> Self {
        let (_, shutdown) = watch::channel(false);
        Self {
            device_service: Arc::new(device_service),
            event_bus,
            shutdown,
        }
    }

    /// End open change streams once `shutdown` becomes `true`.
    ///
    /// Without this the streams only end when their client disconnects,
    /// which would hold a graceful shutdown open indefinitely.
    #[must_use]
    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = shutdown;
        self
    }
}
