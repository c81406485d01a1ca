//! Mood: the pet's displayed disposition, derived from its stats.

use serde::{Deserialize, Serialize};

/// Discrete mood of a pet.
///
/// Mood is never set directly: it is always recomputed from stats and
/// elapsed time through [`Mood::from_stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Sleeping,
    Sad,
    #[default]
    Neutral,
    Happy,
    Excited,
}

impl Mood {
    /// Derive the mood from stats and the hours elapsed since the last
    /// feeding and play session. Rules are checked in order; the first
    /// match wins.
    #[must_use]
    pub fn from_stats(
        happiness: u8,
        energy: u8,
        hours_since_fed: i64,
        hours_since_played: i64,
    ) -> Self {
        if energy < 20 {
            Self::Sleeping
        } else if happiness > 80 && energy > 70 {
            Self::Excited
        } else if happiness > 60 && energy > 50 {
            Self::Happy
        } else if happiness < 40 || hours_since_fed > 8 || hours_since_played > 6 {
            Self::Sad
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sleeping => f.write_str("sleeping"),
            Self::Sad => f.write_str("sad"),
            Self::Neutral => f.write_str("neutral"),
            Self::Happy => f.write_str("happy"),
            Self::Excited => f.write_str("excited"),
        }
    }
}
