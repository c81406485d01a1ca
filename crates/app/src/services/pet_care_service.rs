//! Pet care service: load a pet, run the care engine, persist, publish.

use petcare_domain::care::{CareAction, PetCareEngine, PetStatus};
use petcare_domain::error::{NotFoundError, PetCareError};
use petcare_domain::event::{CareEvent, CareEventKind};
use petcare_domain::id::{ChildId, PetId};
use petcare_domain::pet::Pet;
use petcare_domain::time::Timestamp;

use crate::pet_locks::PetLocks;
use crate::ports::{Clock, EventPublisher, PetRepository};

/// Application service wrapping the pure [`PetCareEngine`].
///
/// Every operation that writes a pet holds that pet's lock from the read to
/// the write, so concurrent feeds, plays, and sweeps on one pet never lose
/// an update. Authorization (does this child own the pet?) happens before
/// these methods are called.
pub struct PetCareService<R, P, C> {
    engine: PetCareEngine,
    repo: R,
    publisher: P,
    clock: C,
    locks: PetLocks,
}

impl<R, P, C> PetCareService<R, P, C>
where
    R: PetRepository,
    P: EventPublisher,
    C: Clock,
{
    /// Create a new service.
    pub fn new(engine: PetCareEngine, repo: R, publisher: P, clock: C) -> Self {
        Self {
            engine,
            repo,
            publisher,
            clock,
            locks: PetLocks::default(),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &PetCareEngine {
        &self.engine
    }

    /// Create a newborn pet for a child.
    ///
    /// # Errors
    ///
    /// Returns [`PetCareError::Validation`] if `name` is blank, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn adopt_pet(&self, child_id: ChildId, name: &str) -> Result<Pet, PetCareError> {
        let pet = Pet::builder()
            .child_id(child_id)
            .name(name)
            .born_at(self.clock.now())
            .build()?;
        let pet = self.repo.create(pet).await?;
        tracing::info!(pet_id = %pet.id, "pet adopted");
        Ok(pet)
    }

    /// Look up a pet by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PetCareError::NotFound`] when no pet with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_pet(&self, id: PetId) -> Result<Pet, PetCareError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Pet",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all pets as stored, without applying decay.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_pets(&self) -> Result<Vec<Pet>, PetCareError> {
        self.repo.get_all().await
    }

    /// Feed a pet and persist the result.
    ///
    /// # Errors
    ///
    /// Returns [`PetCareError::Care`] with
    /// [`CareError::TooSoon`](petcare_domain::error::CareError::TooSoon) while
    /// the feed cooldown runs, [`PetCareError::NotFound`] for an unknown pet,
    /// or a storage error. A rejected feed persists nothing.
    #[tracing::instrument(skip(self))]
    pub async fn feed(&self, id: PetId) -> Result<Pet, PetCareError> {
        self.apply_care(id, CareAction::Feed).await
    }

    /// Play with a pet and persist the result.
    ///
    /// # Errors
    ///
    /// Returns [`PetCareError::Care`] with `TooSoon` while the play cooldown
    /// runs or `TooTired` when the pet needs feeding first,
    /// [`PetCareError::NotFound`] for an unknown pet, or a storage error.
    /// A rejected play persists nothing.
    #[tracing::instrument(skip(self))]
    pub async fn play(&self, id: PetId) -> Result<Pet, PetCareError> {
        self.apply_care(id, CareAction::Play).await
    }

    /// Current decayed stats and action availability. Writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PetCareError::NotFound`] for an unknown pet, or a storage
    /// error.
    #[tracing::instrument(skip(self))]
    pub async fn peek_status(&self, id: PetId) -> Result<PetStatus, PetCareError> {
        let pet = self.get_pet(id).await?;
        Ok(self.engine.peek_status(&pet.state, self.clock.now()))
    }

    /// Apply decay to every pet and persist those whose stats changed.
    ///
    /// A pet that fails to persist is logged and skipped; the sweep carries
    /// on with the rest. Returns the number of pets written.
    ///
    /// # Errors
    ///
    /// Returns a storage error only if listing pets fails.
    #[tracing::instrument(skip(self))]
    pub async fn sweep_decay(&self) -> Result<usize, PetCareError> {
        let now = self.clock.now();
        let pets = self.repo.get_all().await?;
        let candidates = self.engine.sweep_decay(&pets, now);

        let mut updated = 0;
        for (id, _) in &candidates {
            match self.persist_decay(*id, now).await {
                Ok(true) => updated += 1,
                Ok(false) => {}
                Err(err) => tracing::warn!(pet_id = %id, %err, "failed to persist decayed pet"),
            }
        }

        tracing::debug!(
            scanned = pets.len(),
            changed = candidates.len(),
            updated,
            "decay sweep complete"
        );
        Ok(updated)
    }

    async fn apply_care(&self, id: PetId, action: CareAction) -> Result<Pet, PetCareError> {
        let _guard = self.locks.lock(id).await;
        let mut pet = self.get_pet(id).await?;
        let now = self.clock.now();

        let outcome = match action {
            CareAction::Feed => self.engine.feed(&pet.state, now),
            CareAction::Play => self.engine.play(&pet.state, now),
        };
        pet.state = match outcome {
            Ok(state) => state,
            Err(err) => {
                tracing::info!(pet_id = %id, %action, %err, "care action rejected");
                return Err(err.into());
            }
        };

        let pet = self.repo.update(pet).await?;
        tracing::info!(
            pet_id = %id,
            %action,
            happiness = pet.state.happiness,
            energy = pet.state.energy,
            mood = %pet.state.mood,
            "care action applied"
        );

        let kind = match action {
            CareAction::Feed => CareEventKind::Fed,
            CareAction::Play => CareEventKind::Played,
        };
        self.publish(CareEvent::new(kind, pet.id, pet.state.clone(), now))
            .await;
        Ok(pet)
    }

    /// Re-read `id` under its lock and persist its decayed state if it still
    /// changes. Returns whether a write happened.
    async fn persist_decay(&self, id: PetId, now: Timestamp) -> Result<bool, PetCareError> {
        let _guard = self.locks.lock(id).await;
        // a feed or play may have landed since the sweep listed this pet
        let Some(mut pet) = self.repo.get_by_id(id).await? else {
            return Ok(false);
        };
        let Some(state) = self.engine.decay_state(&pet.state, now) else {
            return Ok(false);
        };

        pet.state = state;
        let pet = self.repo.update(pet).await?;
        self.publish(CareEvent::new(
            CareEventKind::Decayed,
            pet.id,
            pet.state.clone(),
            now,
        ))
        .await;
        Ok(true)
    }

    async fn publish(&self, event: CareEvent) {
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(%err, "failed to publish care event");
        }
    }
}
