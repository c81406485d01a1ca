//! Pet: a child's virtual companion and the record the care engine works on.

mod mood;
mod state;

pub use mood::Mood;
pub use state::{MAX_STAT, PetState};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{ChildId, PetId};
use crate::time::{Timestamp, now};

/// A virtual pet owned by one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub child_id: ChildId,
    pub name: String,
    pub state: PetState,
}

impl Pet {
    /// Create a builder for constructing a [`Pet`].
    #[must_use]
    pub fn builder() -> PetBuilder {
        PetBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank, or
    /// [`ValidationError::StatOutOfRange`] when a stat exceeds 100.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        self.state.validate()
    }
}

/// Step-by-step builder for [`Pet`].
#[derive(Debug, Default)]
pub struct PetBuilder {
    id: Option<PetId>,
    child_id: Option<ChildId>,
    name: Option<String>,
    state: Option<PetState>,
    born_at: Option<Timestamp>,
}

impl PetBuilder {
    #[must_use]
    pub fn id(mut self, id: PetId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn child_id(mut self, child_id: ChildId) -> Self {
        self.child_id = Some(child_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Use an explicit state instead of a newborn one.
    #[must_use]
    pub fn state(mut self, state: PetState) -> Self {
        self.state = Some(state);
        self
    }

    /// Adoption time used for the newborn state when no explicit state is set.
    #[must_use]
    pub fn born_at(mut self, born_at: Timestamp) -> Self {
        self.born_at = Some(born_at);
        self
    }

    /// Consume the builder, validate, and return a [`Pet`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name` is missing or the state is
    /// out of range.
    pub fn build(self) -> Result<Pet, ValidationError> {
        let state = self
            .state
            .unwrap_or_else(|| PetState::newborn(self.born_at.unwrap_or_else(now)));
        let pet = Pet {
            id: self.id.unwrap_or_default(),
            child_id: self.child_id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            state,
        };
        pet.validate()?;
        Ok(pet)
    }
}
