//! Care event: an immutable record of a change the caller applied to a pet.
//!
//! The engine never emits events itself; application services build them
//! after persisting an accepted action or a decay sweep.

use serde::{Deserialize, Serialize};

use crate::id::{EventId, PetId};
use crate::pet::PetState;
use crate::time::Timestamp;

/// What happened to the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareEventKind {
    Fed,
    Played,
    Decayed,
}

impl std::fmt::Display for CareEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fed => f.write_str("fed"),
            Self::Played => f.write_str("played"),
            Self::Decayed => f.write_str("decayed"),
        }
    }
}

/// A persisted change to a pet, carrying the state that was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareEvent {
    pub id: EventId,
    pub kind: CareEventKind,
    pub pet_id: PetId,
    pub state: PetState,
    pub timestamp: Timestamp,
}

impl CareEvent {
    /// Create a new event with a fresh id.
    #[must_use]
    pub fn new(kind: CareEventKind, pet_id: PetId, state: PetState, timestamp: Timestamp) -> Self {
        Self {
            id: EventId::new(),
            kind,
            pet_id,
            state,
            timestamp,
        }
    }
}
