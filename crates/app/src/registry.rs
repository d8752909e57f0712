//! In-memory device registry — the single owner of simulated device state.

use std::future::Future;
use std::sync::{PoisonError, RwLock};

use mockhub_domain::device::Device;
use mockhub_domain::error::MockHubError;
use mockhub_domain::id::DeviceId;

use crate::ports::DeviceRepository;

/// Ordered, fixed-membership collection of devices.
///
/// Devices are seeded once at construction. Afterwards they can be edited
/// in place through [`mutate`](Self::mutate) but never added or removed,
/// so the registry keeps the same size and order for its whole lifetime.
///
/// Each `mutate` call holds the write lock for its whole closure: readers
/// see the fleet either before or after it, never half-updated.
pub struct InMemoryDeviceRegistry {
    devices: RwLock<Vec<Device>>,
}

impl InMemoryDeviceRegistry {
    /// Seed the registry with `devices`, preserving their order.
    #[must_use]
    pub fn new(devices: Vec<Device>) -> Self {
        Self {
            devices: RwLock::new(devices),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Clone of every device, in registry order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Device> {
        self.read().clone()
    }

    /// Linear scan for the first device whose id equals `id`.
    #[must_use]
    pub fn find(&self, id: &DeviceId) -> Option<Device> {
        self.read().iter().find(|d| d.id() == id).cloned()
    }

    /// Run `f` with exclusive, in-place access to the devices.
    pub fn mutate<T>(&self, f: impl FnOnce(&mut [Device]) -> T) -> T {
        let mut devices = self
            .devices
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(devices.as_mut_slice())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Device>> {
        self.devices.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeviceRepository for InMemoryDeviceRegistry {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, MockHubError>> + Send {
        let devices = self.snapshot();
        async { Ok(devices) }
    }

    fn get_by_id(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, MockHubError>> + Send {
        let device = self.find(id);
        async { Ok(device) }
    }
}
