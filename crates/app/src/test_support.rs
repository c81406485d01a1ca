//! In-memory port fakes shared by the unit tests of this crate.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use chrono::Duration;
use petcare_domain::error::{NotFoundError, PetCareError};
use petcare_domain::event::CareEvent;
use petcare_domain::id::PetId;
use petcare_domain::pet::Pet;
use petcare_domain::time::Timestamp;

use crate::ports::{Clock, EventPublisher, PetRepository};

#[derive(Default)]
pub struct InMemoryPetRepo {
    store: Mutex<HashMap<PetId, Pet>>,
    fail_updates_for: Mutex<Option<PetId>>,
}

impl InMemoryPetRepo {
    pub fn with(pets: Vec<Pet>) -> Self {
        let map: HashMap<_, _> = pets.into_iter().map(|p| (p.id, p)).collect();
        Self {
            store: Mutex::new(map),
            fail_updates_for: Mutex::new(None),
        }
    }

    pub fn fail_updates_for(&self, id: PetId) {
        *self.fail_updates_for.lock().unwrap() = Some(id);
    }

    pub fn stored(&self, id: PetId) -> Option<Pet> {
        self.store.lock().unwrap().get(&id).cloned()
    }
}

impl PetRepository for InMemoryPetRepo {
    fn create(&self, pet: Pet) -> impl Future<Output = Result<Pet, PetCareError>> + Send {
        self.store.lock().unwrap().insert(pet.id, pet.clone());
        async { Ok(pet) }
    }

    fn get_by_id(
        &self,
        id: PetId,
    ) -> impl Future<Output = Result<Option<Pet>, PetCareError>> + Send {
        let result = self.store.lock().unwrap().get(&id).cloned();
        // yield so that concurrent callers interleave between read and write
        async move {
            tokio::task::yield_now().await;
            Ok(result)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Pet>, PetCareError>> + Send {
        let result: Vec<Pet> = self.store.lock().unwrap().values().cloned().collect();
        async { Ok(result) }
    }

    fn update(&self, pet: Pet) -> impl Future<Output = Result<Pet, PetCareError>> + Send {
        let failing = *self.fail_updates_for.lock().unwrap() == Some(pet.id);
        let mut store = self.store.lock().unwrap();
        let result: Result<Pet, PetCareError> = if failing {
            Err(PetCareError::Storage(Box::new(std::io::Error::other(
                "disk full",
            ))))
        } else if store.contains_key(&pet.id) {
            store.insert(pet.id, pet.clone());
            Ok(pet)
        } else {
            Err(NotFoundError {
                entity: "Pet",
                id: pet.id.to_string(),
            }
            .into())
        };
        async { result }
    }
}

pub struct FixedClock(Mutex<Timestamp>);

impl FixedClock {
    pub fn at(ts: Timestamp) -> Self {
        Self(Mutex::new(ts))
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.0.lock().unwrap()
    }
}

#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<CareEvent>>,
}

impl RecordingPublisher {
    pub fn events(&self) -> Vec<CareEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event: CareEvent) -> impl Future<Output = Result<(), PetCareError>> + Send {
        self.events.lock().unwrap().push(event);
        async { Ok(()) }
    }
}
