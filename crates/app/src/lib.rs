//! # petcare-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PetRepository`: create, read, list, and update pets
//!   - `EventPublisher`: deliver care events to subscribers
//!   - `Clock`: source of the current time
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PetCareService`: adopt, feed, play, peek status, sweep decay
//!   - `DecaySweeper`: periodic background decay sweep
//! - Provide **in-process infrastructure** (event bus, per-pet locks)
//! - Serialize read-decide-write cycles per pet, which the pure engine in
//!   `petcare-domain` leaves to its caller
//!
//! ## Dependency rule
//! Depends on `petcare-domain` only (plus `tokio` for channels, locks, and
//! the sweeper task). Never imports adapter crates.

pub mod decay_sweeper;
pub mod event_bus;
pub mod pet_locks;
pub mod ports;
pub mod services;

#[cfg(test)]
mod test_support;
