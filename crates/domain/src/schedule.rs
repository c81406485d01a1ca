//! Care schedule: the rates, cooldowns, and effect sizes the engine uses.

use serde::{Deserialize, Serialize};

use crate::care::CareAction;
use crate::error::ValidationError;

/// Tunable parameters of the pet-care engine.
///
/// [`Default`] yields the production schedule. Every field is optional when
/// deserializing, so a config file only needs to list what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetCareSchedule {
    /// Happiness lost per whole hour since the last play session.
    pub happiness_decay_per_hour: u32,
    /// Energy lost per whole hour since the last feeding.
    pub energy_decay_per_hour: u32,
    /// Energy regained per hour while sleeping and well fed.
    pub sleep_regen_per_hour: u32,
    /// Below this energy a well-fed pet is considered asleep.
    pub sleep_energy_threshold: u8,
    /// A pet fed fewer than this many hours ago counts as well fed.
    pub well_fed_hours: u32,
    pub feed_cooldown_minutes: u32,
    pub play_cooldown_minutes: u32,
    pub feed_happiness_gain: u32,
    pub feed_energy_gain: u32,
    pub play_happiness_gain: u32,
    /// Energy spent by a play session at a neutral (1.0) bonus.
    pub play_energy_cost: u32,
    pub play_xp_gain: u32,
    /// Minimum energy after decay required to play.
    pub min_play_energy: u8,
}

impl Default for PetCareSchedule {
    fn default() -> Self {
        Self {
            happiness_decay_per_hour: 2,
            energy_decay_per_hour: 3,
            sleep_regen_per_hour: 5,
            sleep_energy_threshold: 30,
            well_fed_hours: 4,
            feed_cooldown_minutes: 120,
            play_cooldown_minutes: 60,
            feed_happiness_gain: 15,
            feed_energy_gain: 10,
            play_happiness_gain: 20,
            play_energy_cost: 15,
            play_xp_gain: 5,
            min_play_energy: 20,
        }
    }
}

impl PetCareSchedule {
    /// Cooldown, in minutes, between two successful `action`s.
    #[must_use]
    pub fn cooldown_minutes(&self, action: CareAction) -> u32 {
        match action {
            CareAction::Feed => self.feed_cooldown_minutes,
            CareAction::Play => self.play_cooldown_minutes,
        }
    }

    /// Check the schedule is usable.
    ///
    /// Cooldowns double as the optimal timing window of the care bonus and
    /// must therefore be non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveSchedule`] naming the first
    /// zero cooldown.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.feed_cooldown_minutes == 0 {
            return Err(ValidationError::NonPositiveSchedule {
                field: "feed_cooldown_minutes",
            });
        }
        if self.play_cooldown_minutes == 0 {
            return Err(ValidationError::NonPositiveSchedule {
                field: "play_cooldown_minutes",
            });
        }
        Ok(())
    }
}
