//! # mockhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters use or implement:
//!   - `DeviceRepository` — read access to the device fleet
//!   - `EventPublisher` — fan-out of device change notifications
//! - Provide the **in-memory device registry**, the single owner of
//!   simulated device state
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Define the `DeviceService` use-case consumed by driving adapters
//!
//! ## Dependency rule
//! Depends on `mockhub-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod registry;
pub mod services;
