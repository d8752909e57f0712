//! Storage port — read access to the device fleet.
//!
//! The fleet is fixed at startup, so the port only exposes queries.
//! Mutation is reserved to the simulation, which works on the concrete
//! [`InMemoryDeviceRegistry`](crate::registry::InMemoryDeviceRegistry).

use std::future::Future;

use mockhub_domain::device::Device;
use mockhub_domain::error::MockHubError;
use mockhub_domain::id::DeviceId;

/// Read-only repository of devices, in stable registry order.
pub trait DeviceRepository {
    /// Every device, in registry order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, MockHubError>> + Send;

    /// The first device whose id equals `id`, if any.
    fn get_by_id(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, MockHubError>> + Send;
}

impl<T: DeviceRepository + Send + Sync> DeviceRepository for std::sync::Arc<T> {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, MockHubError>> + Send {
        (**self).get_all()
    }

    fn get_by_id(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, MockHubError>> + Send {
        (**self).get_by_id(id)
    }
}
