//! Storage-specific error type.

use petcare_domain::error::{PetCareError, ValidationError};

/// Errors originating from the in-memory store and its snapshot files.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing a snapshot file failed.
    #[error("snapshot I/O error")]
    Io(#[from] std::io::Error),

    /// A snapshot file is not valid JSON for a list of pets.
    #[error("snapshot JSON error")]
    Json(#[from] serde_json::Error),

    /// A snapshot entry breaks a pet invariant.
    #[error("snapshot pet {id} is invalid")]
    InvalidPet {
        id: String,
        #[source]
        source: ValidationError,
    },

    /// `create` was called for an id that is already stored.
    #[error("pet {0} already exists")]
    Duplicate(String),
}

impl From<StorageError> for PetCareError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
