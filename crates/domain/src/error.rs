//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PetCareError`]
//! via `#[from]`. Adapters box their errors into [`PetCareError::Storage`].

use crate::care::CareAction;

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum PetCareError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Care(#[from] CareError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("{stat} must be within 0..=100, got {value}")]
    StatOutOfRange { stat: &'static str, value: u8 },

    #[error("schedule field `{field}` must be greater than zero")]
    NonPositiveSchedule { field: &'static str },
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A care action was rejected. Both variants are expected, user-facing
/// outcomes that clear up by waiting or by feeding the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CareError {
    /// The action's cooldown has not elapsed yet.
    #[error("cannot {action} yet, try again in {minutes_remaining} minutes")]
    TooSoon {
        action: CareAction,
        minutes_remaining: i64,
    },

    /// Energy after decay is below the play threshold.
    #[error("pet is too tired to play (energy {energy}), feed it first")]
    TooTired { energy: u8 },
}
