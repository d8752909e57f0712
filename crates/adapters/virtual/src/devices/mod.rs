//! Per-device simulation rules — connection drift plus one rule per kind.
//!
//! Each rule mutates the device in place and reports whether the change
//! is worth broadcasting.

mod bulb;
mod connection;
mod outlet;
mod sensor;

use mockhub_domain::device::{Device, DeviceKind};

use crate::dice::Dice;

/// Apply the connection rule, then the rule for the device's kind.
///
/// Both rules always run. Returns `true` if either reported a change.
pub fn apply_rules(device: &mut Device, dice: &mut impl Dice) -> bool {
    let connection_changed = connection::update(device, dice);
    let kind_changed = match device.kind_mut() {
        DeviceKind::Bulb(bulb) => bulb::update(bulb, dice),
        DeviceKind::Outlet(outlet) => outlet::update(outlet, dice),
        DeviceKind::TemperatureSensor(sensor) => sensor::update(sensor, dice),
    };
    connection_changed || kind_changed
}
