//! Bulb brightness, a percentage in `1..=100`.

use serde::Serialize;

use crate::error::ValidationError;

/// Brightness percentage. Never zero: an unlit bulb is expressed by its
/// power flag, not by a brightness of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Brightness(u8);

impl Brightness {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Validate and wrap a brightness value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BrightnessOutOfRange`] outside `1..=100`.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(ValidationError::BrightnessOutOfRange(value)),
        }
    }

    /// Wrap a value, saturating it into `1..=100`.
    #[must_use]
    pub fn clamped(value: u32) -> Self {
        let v = value.clamp(u32::from(Self::MIN), u32::from(Self::MAX));
        Self(u8::try_from(v).unwrap_or(Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Brightness {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
