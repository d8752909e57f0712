//! Connection state — the network-quality status of a device.

use serde::Serialize;

/// Network-quality status, independent of the device's functional state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionState {
    #[default]
    Connected,
    Disconnected,
    PoorConnection,
}

impl ConnectionState {
    /// Every state, in canonical order.
    pub const ALL: [Self; 3] = [Self::Connected, Self::Disconnected, Self::PoorConnection];

    /// The two states other than `self`, in canonical order.
    #[must_use]
    pub fn others(self) -> [Self; 2] {
        match self {
            Self::Connected => [Self::Disconnected, Self::PoorConnection],
            Self::Disconnected => [Self::Connected, Self::PoorConnection],
            Self::PoorConnection => [Self::Connected, Self::Disconnected],
        }
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connected => f.write_str("connected"),
            Self::Disconnected => f.write_str("disconnected"),
            Self::PoorConnection => f.write_str("poorConnection"),
        }
    }
}
