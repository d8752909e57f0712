//! # mockhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the read-only **JSON API** under `/api/v1`
//!   (`/devices`, `/device/{deviceId}`)
//! - Stream device changes to any number of subscribers as
//!   **Server-Sent Events** on `/api/v1/refresh` (an `EventSource`
//!   endpoint; socket.io clients need to switch to `EventSource`)
//! - Stamp every response with the configured CORS headers
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `mockhub-app` (for port traits, services and the event bus) and
//! `mockhub-domain` (for domain types used in responses). Never leaks axum
//! types into the domain.

pub mod api;
pub mod cors;
pub mod error;
pub mod router;
pub mod state;
