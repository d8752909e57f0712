//! # mockhub-adapter-virtual
//!
//! Virtual integration that owns the simulated device fleet and keeps it
//! changing.
//!
//! ## Provided devices
//!
//! | Id | Type | Name | Behaviour |
//! |----|------|------|-----------|
//! | `b1` | bulb | Kitchen | Random power toggles, brightness and colour changes |
//! | `b2` | bulb | Bathroom | Same as `b1` |
//! | `o1` | outlet | Electric heater | Random power toggles, 200 W while on |
//! | `ts1` | temperatureSensor | Outside | Half-degree walk biased toward 18–22 °C |
//!
//! Every device additionally drifts between `connected`, `disconnected` and
//! `poorConnection`.
//!
//! ## Dependency rule
//!
//! Depends on `mockhub-app` (port traits, registry) and `mockhub-domain` only.

mod devices;
pub mod dice;
pub mod fleet;
pub mod simulator;

pub use devices::apply_rules;
pub use dice::Dice;
pub use fleet::seed_fleet;
pub use simulator::Simulator;
