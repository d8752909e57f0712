//! Device — a simulated smart device and its type-specific state.
//!
//! Every device shares an id, a display name and a [`ConnectionState`].
//! What else it carries depends on its [`DeviceKind`]: bulbs have a power
//! flag, brightness and colour; outlets have a power flag coupled to their
//! consumption; temperature sensors hold a reading.
//!
//! On the wire a device is a single flat JSON object whose leading `type`
//! field names the kind:
//!
//! ```json
//! {"type":"bulb","id":"b1","name":"Kitchen","connectionState":"connected",
//!  "isTurnedOn":true,"brightness":70,"color":"#cccccc"}
//! ```

mod brightness;
mod color;
mod connection_state;

pub use brightness::Brightness;
pub use color::Color;
pub use connection_state::ConnectionState;

use serde::{Serialize, Serializer};

use crate::error::{MockHubError, ValidationError};
use crate::id::DeviceId;

/// A simulated device.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    id: DeviceId,
    name: String,
    connection_state: ConnectionState,
    kind: DeviceKind,
}

/// Wire layout of a [`Device`]: `type` first, then the common fields,
/// then the kind's own fields.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeviceWire<'a> {
    #[serde(rename = "type")]
    kind_name: &'static str,
    id: &'a DeviceId,
    name: &'a str,
    connection_state: ConnectionState,
    #[serde(flatten)]
    state: KindState<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum KindState<'a> {
    Bulb(&'a Bulb),
    Outlet(&'a Outlet),
    TemperatureSensor(&'a TemperatureSensor),
}

impl Serialize for Device {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let state = match &self.kind {
            DeviceKind::Bulb(bulb) => KindState::Bulb(bulb),
            DeviceKind::Outlet(outlet) => KindState::Outlet(outlet),
            DeviceKind::TemperatureSensor(sensor) => KindState::TemperatureSensor(sensor),
        };
        DeviceWire {
            kind_name: self.kind.type_name(),
            id: &self.id,
            name: &self.name,
            connection_state: self.connection_state,
            state,
        }
        .serialize(serializer)
    }
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        self.connection_state
    }

    pub fn set_connection_state(&mut self, state: ConnectionState) {
        self.connection_state = state;
    }

    #[must_use]
    pub fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    /// Mutable access to the type-specific state.
    ///
    /// The id and name stay fixed; only the functional state may change.
    pub fn kind_mut(&mut self) -> &mut DeviceKind {
        &mut self.kind
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MockHubError::Validation`] when `id` or `name` is empty.
    pub fn validate(&self) -> Result<(), MockHubError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Type-specific device state, named by [`type_name`](Self::type_name)
/// in the `type` field on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceKind {
    Bulb(Bulb),
    Outlet(Outlet),
    TemperatureSensor(TemperatureSensor),
}

impl DeviceKind {
    /// The wire name of this kind (`bulb`, `outlet`, `temperatureSensor`).
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bulb(_) => "bulb",
            Self::Outlet(_) => "outlet",
            Self::TemperatureSensor(_) => "temperatureSensor",
        }
    }
}

/// A dimmable colour bulb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bulb {
    pub is_turned_on: bool,
    pub brightness: Brightness,
    pub color: Color,
}

/// A switchable power outlet.
///
/// The power flag and the consumption reading only change together, so an
/// outlet always reports [`Outlet::ON_POWER_CONSUMPTION`] while on and `0`
/// while off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outlet {
    is_turned_on: bool,
    power_consumption: u32,
}

impl Outlet {
    /// Consumption reported while the outlet is on.
    pub const ON_POWER_CONSUMPTION: u32 = 200;

    #[must_use]
    pub fn new(is_turned_on: bool) -> Self {
        Self {
            is_turned_on,
            power_consumption: Self::consumption_for(is_turned_on),
        }
    }

    #[must_use]
    pub fn is_turned_on(&self) -> bool {
        self.is_turned_on
    }

    #[must_use]
    pub fn power_consumption(&self) -> u32 {
        self.power_consumption
    }

    /// Flip the power flag and update the consumption to match.
    pub fn toggle(&mut self) {
        *self = Self::new(!self.is_turned_on);
    }

    fn consumption_for(is_turned_on: bool) -> u32 {
        if is_turned_on {
            Self::ON_POWER_CONSUMPTION
        } else {
            0
        }
    }
}

/// An outdoor or indoor temperature probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureSensor {
    pub temperature: f64,
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    connection_state: ConnectionState,
    kind: Option<DeviceKind>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn connection_state(mut self, state: ConnectionState) -> Self {
        self.connection_state = state;
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`MockHubError::Validation`] if the id or name is missing or
    /// empty, or if no kind was given.
    pub fn build(self) -> Result<Device, MockHubError> {
        let kind = self.kind.ok_or(ValidationError::MissingKind)?;
        let device = Device {
            id: self.id.unwrap_or_else(|| DeviceId::new("")),
            name: self.name.unwrap_or_default(),
            connection_state: self.connection_state,
            kind,
        };
        device.validate()?;
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kitchen_bulb() -> Device {
        Device::builder()
            .id("b1")
            .name("Kitchen")
            .kind(DeviceKind::Bulb(Bulb {
                is_turned_on: true,
                brightness: Brightness::new(70).unwrap(),
                color: Color::parse("#cccccc").unwrap(),
            }))
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_device_with_defaults() {
        let device = kitchen_bulb();
        assert_eq!(device.id(), "b1");
        assert_eq!(device.name(), "Kitchen");
        assert_eq!(device.connection_state(), ConnectionState::Connected);
        assert_eq!(device.kind().type_name(), "bulb");
    }

    #[test]
    fn should_reject_empty_id() {
        let result = Device::builder()
            .name("Nameless")
            .kind(DeviceKind::Outlet(Outlet::new(false)))
            .build();
        assert!(matches!(
            result,
            Err(MockHubError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_reject_empty_name() {
        let result = Device::builder()
            .id("o9")
            .kind(DeviceKind::Outlet(Outlet::new(false)))
            .build();
        assert!(matches!(
            result,
            Err(MockHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_missing_kind() {
        let result = Device::builder().id("x").name("X").build();
        assert!(matches!(
            result,
            Err(MockHubError::Validation(ValidationError::MissingKind))
        ));
    }

    #[test]
    fn should_serialize_bulb_as_flat_tagged_object() {
        let json = serde_json::to_value(kitchen_bulb()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "bulb",
                "id": "b1",
                "name": "Kitchen",
                "connectionState": "connected",
                "isTurnedOn": true,
                "brightness": 70,
                "color": "#cccccc"
            })
        );
    }

    #[test]
    fn should_serialize_type_first_then_common_fields() {
        let json = serde_json::to_string(&kitchen_bulb()).unwrap();
        assert_eq!(
            json,
            r##"{"type":"bulb","id":"b1","name":"Kitchen","connectionState":"connected","isTurnedOn":true,"brightness":70,"color":"#cccccc"}"##
        );
    }

    #[test]
    fn should_serialize_outlet_with_power_consumption() {
        let device = Device::builder()
            .id("o1")
            .name("Electric heater")
            .kind(DeviceKind::Outlet(Outlet::new(true)))
            .build()
            .unwrap();
        let json = serde_json::to_value(device).unwrap();
        assert_eq!(json["type"], "outlet");
        assert_eq!(json["isTurnedOn"], true);
        assert_eq!(json["powerConsumption"], 200);
    }

    #[test]
    fn should_serialize_temperature_sensor_type_in_camel_case() {
        let device = Device::builder()
            .id("ts1")
            .name("Outside")
            .kind(DeviceKind::TemperatureSensor(TemperatureSensor {
                temperature: 19.5,
            }))
            .build()
            .unwrap();
        let json = serde_json::to_value(device).unwrap();
        assert_eq!(json["type"], "temperatureSensor");
        assert_eq!(json["temperature"], 19.5);
    }

    #[test]
    fn should_couple_outlet_consumption_to_power_flag() {
        let mut outlet = Outlet::new(false);
        assert_eq!(outlet.power_consumption(), 0);

        outlet.toggle();
        assert!(outlet.is_turned_on());
        assert_eq!(outlet.power_consumption(), 200);

        outlet.toggle();
        assert!(!outlet.is_turned_on());
        assert_eq!(outlet.power_consumption(), 0);
    }

    #[test]
    fn should_update_connection_state_in_place() {
        let mut device = kitchen_bulb();
        device.set_connection_state(ConnectionState::PoorConnection);
        assert_eq!(device.connection_state(), ConnectionState::PoorConnection);
    }
}
