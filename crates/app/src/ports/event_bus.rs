//! Event bus port — publish/subscribe for device change notifications.

use std::future::Future;

use mockhub_domain::error::MockHubError;
use mockhub_domain::event::DeviceChanged;

/// Publishes device changes to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(
        &self,
        event: DeviceChanged,
    ) -> impl Future<Output = Result<(), MockHubError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        event: DeviceChanged,
    ) -> impl Future<Output = Result<(), MockHubError>> + Send {
        (**self).publish(event)
    }
}
