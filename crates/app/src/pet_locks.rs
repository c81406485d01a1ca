//! Per-pet async locks.
//!
//! The care engine is pure and performs no locking, so every
//! read-decide-write cycle on a pet must hold that pet's lock. Locks for
//! different pets are independent.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::OwnedMutexGuard;

use petcare_domain::id::PetId;

type Slot = Arc<tokio::sync::Mutex<()>>;

/// Registry of one async mutex per pet.
///
/// A slot exists only while someone holds or waits for it; the last guard
/// to drop removes it again.
#[derive(Debug, Default)]
pub struct PetLocks {
    slots: Mutex<HashMap<PetId, Slot>>,
}

impl PetLocks {
    /// Wait for exclusive access to `id`. Access ends when the guard drops.
    pub async fn lock(&self, id: PetId) -> PetLockGuard<'_> {
        let slot = Arc::clone(self.slots().entry(id).or_default());
        let guard = slot.lock_owned().await;
        PetLockGuard {
            locks: self,
            id,
            guard: Some(guard),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots().len()
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<PetId, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn release(&self, id: PetId) {
        let mut slots = self.slots();
        // one reference left means only the registry still points at it
        if slots.get(&id).is_some_and(|slot| Arc::strong_count(slot) == 1) {
            slots.remove(&id);
        }
    }
}

/// Exclusive access to one pet, released on drop.
#[derive(Debug)]
pub struct PetLockGuard<'a> {
    locks: &'a PetLocks,
    id: PetId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for PetLockGuard<'_> {
    fn drop(&mut self) {
        // the inner guard holds a reference to the slot until it is gone
        drop(self.guard.take());
        self.locks.release(self.id);
    }
}
