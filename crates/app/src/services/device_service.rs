//! Device service — read-only use-cases over the device fleet.

use mockhub_domain::device::Device;
use mockhub_domain::error::{MockHubError, NotFoundError};
use mockhub_domain::id::DeviceId;

use crate::ports::DeviceRepository;

/// Application service for device queries.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`MockHubError::NotFound`] when no device with `id` exists.
    #[tracing::instrument(skip(self), fields(device_id = %id))]
    pub async fn get_device(&self, id: &DeviceId) -> Result<Device, MockHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all devices in registry order.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, MockHubError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InMemoryDeviceRegistry;
    use mockhub_domain::device::{Brightness, Bulb, Color, DeviceKind, Outlet};

    fn make_service() -> DeviceService<InMemoryDeviceRegistry> {
        let bulb = Device::builder()
            .id("b1")
            .name("Kitchen")
            .kind(DeviceKind::Bulb(Bulb {
                is_turned_on: true,
                brightness: Brightness::new(70).unwrap(),
                color: Color::from_rgb(0x00cc_cccc),
            }))
            .build()
            .unwrap();
        let outlet = Device::builder()
            .id("o1")
            .name("Electric heater")
            .kind(DeviceKind::Outlet(Outlet::new(false)))
            .build()
            .unwrap();
        DeviceService::new(InMemoryDeviceRegistry::new(vec![bulb, outlet]))
    }

    #[tokio::test]
    async fn should_list_all_devices_in_order() {
        let svc = make_service();
        let all = svc.list_devices().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id(), "b1");
        assert_eq!(all[1].id(), "o1");
    }

    #[tokio::test]
    async fn should_get_device_by_id() {
        let svc = make_service();
        let device = svc.get_device(&DeviceId::new("o1")).await.unwrap();
        assert_eq!(device.name(), "Electric heater");
    }

    #[tokio::test]
    async fn should_return_not_found_when_device_missing() {
        let svc = make_service();
        let result = svc.get_device(&DeviceId::new("zz")).await;
        assert!(matches!(result, Err(MockHubError::NotFound(_))));
    }
}
