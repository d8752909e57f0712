//! The seed fleet every process starts from.

use mockhub_domain::device::{
    Brightness, Bulb, Color, ConnectionState, Device, DeviceKind, Outlet, TemperatureSensor,
};
use mockhub_domain::error::MockHubError;

/// Build the four seed devices, in registry order.
///
/// # Errors
///
/// Returns a validation error if a builder fails (should not happen
/// with hardcoded inputs).
pub fn seed_fleet() -> Result<Vec<Device>, MockHubError> {
    Ok(vec![
        Device::builder()
            .id("b1")
            .name("Kitchen")
            .connection_state(ConnectionState::Connected)
            .kind(DeviceKind::Bulb(Bulb {
                is_turned_on: true,
                brightness: Brightness::new(70)?,
                color: Color::parse("#cccccc")?,
            }))
            .build()?,
        Device::builder()
            .id("b2")
            .name("Bathroom")
            .connection_state(ConnectionState::PoorConnection)
            .kind(DeviceKind::Bulb(Bulb {
                is_turned_on: false,
                brightness: Brightness::new(50)?,
                color: Color::parse("#ffffff")?,
            }))
            .build()?,
        Device::builder()
            .id("o1")
            .name("Electric heater")
            .connection_state(ConnectionState::Connected)
            .kind(DeviceKind::Outlet(Outlet::new(false)))
            .build()?,
        Device::builder()
            .id("ts1")
            .name("Outside")
            .connection_state(ConnectionState::Connected)
            .kind(DeviceKind::TemperatureSensor(TemperatureSensor {
                temperature: 20.0,
            }))
            .build()?,
    ])
}
