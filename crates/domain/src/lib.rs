//! # mockhub-domain
//!
//! Pure domain model for the mockhub device simulator.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Devices** (bulbs, outlets, temperature sensors) as a tagged union
//! - Define the value objects guarding device invariants
//!   (brightness range, colour format, outlet power coupling)
//! - Define **Events** emitted when the simulation changes a device
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;

pub mod device;
pub mod event;
