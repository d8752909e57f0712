//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`MockHubError`] via `#[from]`.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum MockHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// A domain invariant was violated while building a value.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("id must not be empty")]
    EmptyId,

    #[error("name must not be empty")]
    EmptyName,

    #[error("device kind is required")]
    MissingKind,

    #[error("brightness {0} is outside 1..=100")]
    BrightnessOutOfRange(u32),

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
