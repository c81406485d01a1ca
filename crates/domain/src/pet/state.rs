//! Pet state: the persisted stats the care engine reads and rewrites.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::pet::Mood;
use crate::time::Timestamp;

/// Upper bound of `happiness` and `energy`.
pub const MAX_STAT: u8 = 100;

/// Snapshot of a pet's stats as stored by the persistence layer.
///
/// The engine never mutates a state in place: every operation takes a
/// reference and returns a new value for the caller to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetState {
    pub happiness: u8,
    pub energy: u8,
    pub mood: Mood,
    pub last_fed: Timestamp,
    pub last_played: Timestamp,
    pub xp: u64,
}

impl PetState {
    /// State of a freshly adopted pet: full stats, no xp, both care
    /// timestamps set to the adoption time.
    #[must_use]
    pub fn newborn(now: Timestamp) -> Self {
        Self {
            happiness: MAX_STAT,
            energy: MAX_STAT,
            mood: Mood::from_stats(MAX_STAT, MAX_STAT, 0, 0),
            last_fed: now,
            last_played: now,
            xp: 0,
        }
    }

    /// Check that both stats are within `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::StatOutOfRange`] for the first stat above
    /// [`MAX_STAT`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.happiness > MAX_STAT {
            return Err(ValidationError::StatOutOfRange {
                stat: "happiness",
                value: self.happiness,
            });
        }
        if self.energy > MAX_STAT {
            return Err(ValidationError::StatOutOfRange {
                stat: "energy",
                value: self.energy,
            });
        }
        Ok(())
    }

    /// Whether the stat fields that decay touches (happiness, energy, mood)
    /// differ from `other`.
    #[must_use]
    pub fn stats_differ(&self, other: &Self) -> bool {
        self.happiness != other.happiness || self.energy != other.energy || self.mood != other.mood
    }
}
