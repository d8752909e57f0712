//! Event — a notification that the simulation changed a device.

use serde::Serialize;

use crate::device::Device;
use crate::id::DeviceId;

/// A device's full state right after a simulation tick changed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeviceChanged {
    pub device: Device,
}

impl DeviceChanged {
    #[must_use]
    pub fn new(device: Device) -> Self {
        Self { device }
    }

    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        self.device.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DeviceKind, Outlet};

    #[test]
    fn should_serialize_as_the_bare_device() {
        let device = Device::builder()
            .id("o1")
            .name("Electric heater")
            .kind(DeviceKind::Outlet(Outlet::new(false)))
            .build()
            .unwrap();
        let event = DeviceChanged::new(device.clone());

        assert_eq!(event.device_id(), "o1");
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::to_value(&device).unwrap()
        );
    }
}
