//! Storage port: repository trait for pet persistence.

use std::future::Future;
use std::sync::Arc;

use petcare_domain::error::PetCareError;
use petcare_domain::id::PetId;
use petcare_domain::pet::Pet;

/// Repository for persisting and querying [`Pet`]s.
pub trait PetRepository {
    /// Store a new pet.
    fn create(&self, pet: Pet) -> impl Future<Output = Result<Pet, PetCareError>> + Send;

    /// Get a pet by its unique identifier.
    fn get_by_id(
        &self,
        id: PetId,
    ) -> impl Future<Output = Result<Option<Pet>, PetCareError>> + Send;

    /// Get all pets.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Pet>, PetCareError>> + Send;

    /// Overwrite an existing pet.
    fn update(&self, pet: Pet) -> impl Future<Output = Result<Pet, PetCareError>> + Send;
}

impl<T: PetRepository + Send + Sync> PetRepository for Arc<T> {
    fn create(&self, pet: Pet) -> impl Future<Output = Result<Pet, PetCareError>> + Send {
        (**self).create(pet)
    }

    fn get_by_id(
        &self,
        id: PetId,
    ) -> impl Future<Output = Result<Option<Pet>, PetCareError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Pet>, PetCareError>> + Send {
        (**self).get_all()
    }

    fn update(&self, pet: Pet) -> impl Future<Output = Result<Pet, PetCareError>> + Send {
        (**self).update(pet)
    }
}
