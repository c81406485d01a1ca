//! # petcare-adapter-storage-memory
//!
//! In-memory implementation of the `PetRepository` port, with optional
//! JSON snapshots so a daemon can keep its pets across restarts.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `petcare-app::ports::storage`
//! - Load a snapshot at startup (a missing file means "no pets yet")
//! - Write a snapshot on demand, e.g. at shutdown
//!
//! ## Dependency rule
//! Depends on `petcare-app` (for port traits) and `petcare-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;

use std::collections::BTreeMap;
use std::future::Future;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use petcare_app::ports::PetRepository;
use petcare_domain::error::{NotFoundError, PetCareError};
use petcare_domain::id::PetId;
use petcare_domain::pet::Pet;

pub use error::StorageError;

/// Pets held in a mutex-guarded ordered map.
#[derive(Debug, Default)]
pub struct InMemoryPetRepository {
    pets: Mutex<BTreeMap<PetId, Pet>>,
}

impl InMemoryPetRepository {
    /// Create a store holding the given pets.
    #[must_use]
    pub fn with_pets(pets: impl IntoIterator<Item = Pet>) -> Self {
        Self {
            pets: Mutex::new(pets.into_iter().map(|pet| (pet.id, pet)).collect()),
        }
    }

    /// Load a store from a JSON snapshot. A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file exists but cannot be read,
    /// [`StorageError::Json`] if it is not a JSON array of pets, or
    /// [`StorageError::InvalidPet`] for the first pet with a blank name or a
    /// stat above 100.
    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no snapshot found, starting empty");
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        let pets: Vec<Pet> = serde_json::from_str(&content)?;
        for pet in &pets {
            pet.validate().map_err(|source| StorageError::InvalidPet {
                id: pet.id.to_string(),
                source,
            })?;
        }
        tracing::info!(path = %path.display(), count = pets.len(), "snapshot loaded");
        Ok(Self::with_pets(pets))
    }

    /// Write every pet to `path` as a pretty-printed JSON array, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Json`] if a pet fails to serialize, or
    /// [`StorageError::Io`] if the file cannot be written.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let path = path.as_ref();
        let pets: Vec<Pet> = self.lock().values().cloned().collect();
        let json = serde_json::to_string_pretty(&pets)?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), count = pets.len(), "snapshot written");
        Ok(())
    }

    /// Number of stored pets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<PetId, Pet>> {
        self.pets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PetRepository for InMemoryPetRepository {
    fn create(&self, pet: Pet) -> impl Future<Output = Result<Pet, PetCareError>> + Send {
        let mut pets = self.lock();
        let result: Result<Pet, PetCareError> = if pets.contains_key(&pet.id) {
            Err(StorageError::Duplicate(pet.id.to_string()).into())
        } else {
            pets.insert(pet.id, pet.clone());
            Ok(pet)
        };
        async { result }
    }

    fn get_by_id(
        &self,
        id: PetId,
    ) -> impl Future<Output = Result<Option<Pet>, PetCareError>> + Send {
        let result = self.lock().get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Pet>, PetCareError>> + Send {
        let result: Vec<Pet> = self.lock().values().cloned().collect();
        async { Ok(result) }
    }

    fn update(&self, pet: Pet) -> impl Future<Output = Result<Pet, PetCareError>> + Send {
        let mut pets = self.lock();
        let result: Result<Pet, PetCareError> = match pets.get_mut(&pet.id) {
            Some(slot) => {
                *slot = pet.clone();
                Ok(pet)
            }
            None => Err(NotFoundError {
                entity: "Pet",
                id: pet.id.to_string(),
            }
            .into()),
        };
        async { result }
    }
}
