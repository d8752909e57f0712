//! Bulb colour, an RGB hex string such as `#a1b2c3`.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// RGB colour, always stored as `#` followed by six lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Build a colour from the low 24 bits of `rgb`; higher bits are ignored.
    #[must_use]
    pub fn from_rgb(rgb: u32) -> Self {
        Self(format!("#{:06x}", rgb & 0x00ff_ffff))
    }

    /// Parse a `#rrggbb` string. Uppercase digits are accepted and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidColor`] for anything else.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let digits = value
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ValidationError::InvalidColor(value.to_string()))?;
        Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
