//! # petcare-domain
//!
//! Pure domain model for the virtual-pet layer of the family app.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Pets** and their persisted [`PetState`](pet::PetState)
//! - Define the **care schedule** (decay rates, cooldowns, effect sizes)
//! - Implement the **care engine**: decay, cooldown gating, timing bonus,
//!   feed / play, status and sweep
//! - Define **care events** for callers that publish what they persisted
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Persistence, authorization, and event delivery are ports in `petcare-app`.

pub mod error;
pub mod id;
pub mod time;

pub mod care;
pub mod event;
pub mod pet;
pub mod schedule;
