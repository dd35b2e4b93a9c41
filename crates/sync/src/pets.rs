// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline-first listing sync.
//!
//! A [`SyncCoordinator`] serves the cached listing of the active pet type
//! while it refreshes that cache from the remote service:
//!
//! ```text
//! set_category(t)
//!   ├─► cache watch: PetStore::watch(t) ──► sort ──► observe()
//!   └─► fetch: service.pets_list(t) ──► PetStore::replace_pets(t)
//!                                          └─► (store change) ──► cache watch
//! ```
//!
//! Remote results never reach observers directly; they land in the store and
//! flow back out through the cache watch. Every task captures the generation
//! current when it was spawned and may only publish or write while that
//! generation is still current.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shelter_core::{Pet, PetStore, PetType, PetWatch, Publisher};
use tokio::runtime::Handle;

use crate::error::{Error, Result};
use crate::ordering::PetOrdering;
use crate::service::PetsService;
use crate::slot::TaskSlot;

/// Advisory report of a failed remote call.
///
/// Published out of band; the listing keeps showing cached data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFailure {
    pub pet_type: PetType,
    pub message: String,
}

impl fmt::Display for SyncFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pet_type, self.message)
    }
}

struct SyncState {
    active: Option<PetType>,
    /// Bumped by `set_category` and `dispose`.
    generation: u64,
    /// Bumped by `set_category` and `refresh`.
    fetch_seq: u64,
    ordering: PetOrdering,
    cache_task: TaskSlot,
    fetch_task: TaskSlot,
    disposed: bool,
}

impl SyncState {
    fn is_current(&self, generation: u64) -> bool {
        !self.disposed && self.generation == generation
    }

    fn is_current_fetch(&self, generation: u64, fetch_seq: u64) -> bool {
        self.is_current(generation) && self.fetch_seq == fetch_seq
    }
}

struct Shared {
    state: Mutex<SyncState>,
    pets: Publisher<Vec<Pet>>,
    errors: Publisher<SyncFailure>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SyncState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keeps the published listing in step with the active pet type.
///
/// Publishing happens while the coordinator's state is locked, so observers
/// attached to [`observe`](Self::observe) or [`errors`](Self::errors) must
/// not call back into the coordinator.
pub struct SyncCoordinator<S: PetsService> {
    shared: Arc<Shared>,
    store: PetStore,
    service: Arc<S>,
    runtime: Handle,
}

impl<S: PetsService> SyncCoordinator<S> {
    /// Create a coordinator sorting by name.
    ///
    /// Must be called from within a Tokio runtime; background work is
    /// spawned onto it.
    pub fn new(store: PetStore, service: Arc<S>) -> Result<Self> {
        Self::with_ordering(store, service, PetOrdering::default())
    }

    pub fn with_ordering(store: PetStore, service: Arc<S>, ordering: PetOrdering) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        Ok(SyncCoordinator {
            shared: Arc::new(Shared {
                state: Mutex::new(SyncState {
                    active: None,
                    generation: 0,
                    fetch_seq: 0,
                    ordering,
                    cache_task: TaskSlot::new(),
                    fetch_task: TaskSlot::new(),
                    disposed: false,
                }),
                pets: Publisher::new(),
                errors: Publisher::new(),
            }),
            store,
            service,
            runtime,
        })
    }

    /// Switch to `pet_type`.
    ///
    /// Cancels work for the previous type, starts watching the cache for the
    /// new one and issues exactly one remote fetch. Returns immediately.
    pub fn set_category(&self, pet_type: PetType) {
        let mut state = self.shared.lock();
        if state.disposed {
            tracing::debug!(pet_type = %pet_type, "ignoring category change after dispose");
            return;
        }

        state.generation += 1;
        state.fetch_seq += 1;
        state.active = Some(pet_type);
        let generation = state.generation;
        let fetch_seq = state.fetch_seq;
        tracing::debug!(pet_type = %pet_type, generation, "switching category");

        let cache = watch_cache(
            Arc::clone(&self.shared),
            self.store.watch(pet_type),
            generation,
        );
        state.cache_task.replace(self.runtime.spawn(cache));
        state
            .fetch_task
            .replace(self.runtime.spawn(self.fetch(pet_type, generation, fetch_seq)));
    }

    /// Fetch the active type again, superseding any fetch in flight.
    ///
    /// The cache watch keeps running. Does nothing before the first
    /// [`set_category`](Self::set_category) or after dispose.
    pub fn refresh(&self) {
        let mut state = self.shared.lock();
        if state.disposed {
            return;
        }
        let Some(pet_type) = state.active else {
            tracing::debug!("refresh without an active category");
            return;
        };

        state.fetch_seq += 1;
        let generation = state.generation;
        let fetch_seq = state.fetch_seq;
        state
            .fetch_task
            .replace(self.runtime.spawn(self.fetch(pet_type, generation, fetch_seq)));
    }

    /// Replace the listing order and republish the current listing with it.
    pub fn set_ordering(&self, ordering: PetOrdering) {
        let mut state = self.shared.lock();
        tracing::debug!(ordering = ordering.label(), "changing listing order");
        state.ordering = ordering;
        if state.disposed {
            return;
        }
        if let Some(mut pets) = self.shared.pets.latest() {
            state.ordering.sort(&mut pets);
            self.shared.pets.set(pets);
        }
    }

    /// Publisher of the sorted listing for the active type.
    pub fn observe(&self) -> Publisher<Vec<Pet>> {
        self.shared.pets.clone()
    }

    /// Publisher of remote failures.
    pub fn errors(&self) -> Publisher<SyncFailure> {
        self.shared.errors.clone()
    }

    pub fn active_category(&self) -> Option<PetType> {
        self.shared.lock().active
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.lock().disposed
    }

    /// Cancel all work. Nothing is published or written afterwards.
    ///
    /// Calling this more than once is a no-op.
    pub fn dispose(&self) {
        let mut state = self.shared.lock();
        if state.disposed {
            return;
        }
        state.disposed = true;
        state.generation += 1;
        state.active = None;
        state.cache_task.clear();
        state.fetch_task.clear();
        tracing::debug!("sync coordinator disposed");
    }

    fn fetch(
        &self,
        pet_type: PetType,
        generation: u64,
        fetch_seq: u64,
    ) -> impl std::future::Future<Output = ()> + Send + 'static {
        fetch_pets(
            Arc::clone(&self.shared),
            self.store.clone(),
            Arc::clone(&self.service),
            pet_type,
            generation,
            fetch_seq,
        )
    }
}

impl<S: PetsService> Drop for SyncCoordinator<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Republish every cached listing of the watched type until superseded.
async fn watch_cache(shared: Arc<Shared>, mut watch: PetWatch, generation: u64) {
    let pet_type = watch.pet_type();
    loop {
        match watch.next().await {
            Ok(Some(mut pets)) => {
                let state = shared.lock();
                if !state.is_current(generation) {
                    tracing::debug!(pet_type = %pet_type, "discarding stale cache emission");
                    return;
                }
                state.ordering.sort(&mut pets);
                shared.pets.set(pets);
            }
            Ok(None) => {
                tracing::debug!(pet_type = %pet_type, "pet store closed, stopping cache watch");
                return;
            }
            Err(e) => {
                let state = shared.lock();
                if state.is_current(generation) {
                    tracing::warn!(pet_type = %pet_type, error = %e, "failed to read cached pets");
                    shared.errors.set(SyncFailure {
                        pet_type,
                        message: e.to_string(),
                    });
                }
                return;
            }
        }
    }
}

/// Fetch the listing once and, if still wanted, store it.
async fn fetch_pets<S: PetsService>(
    shared: Arc<Shared>,
    store: PetStore,
    service: Arc<S>,
    pet_type: PetType,
    generation: u64,
    fetch_seq: u64,
) {
    let fetched = service.pets_list(pet_type).await;

    let is_current = || shared.lock().is_current_fetch(generation, fetch_seq);
    if !is_current() {
        tracing::debug!(pet_type = %pet_type, "discarding stale fetch result");
        return;
    }

    // Checked again under the store lock: dispose or a newer fetch may land
    // while we wait for the connection.
    let outcome = match fetched {
        Ok(pets) => store
            .replace_pets_if(pet_type, &pets, is_current)
            .await
            .map(|written| written.then_some(pets.len()))
            .map_err(Error::from),
        Err(e) => Err(Error::from(e)),
    };

    match outcome {
        Ok(Some(count)) => tracing::info!(pet_type = %pet_type, count, "synced pets"),
        Ok(None) => tracing::debug!(pet_type = %pet_type, "discarding stale fetch result"),
        Err(e) => {
            let state = shared.lock();
            if !state.is_current_fetch(generation, fetch_seq) {
                tracing::debug!(pet_type = %pet_type, error = %e, "discarding stale fetch failure");
                return;
            }
            tracing::warn!(pet_type = %pet_type, error = %e, "sync failed, keeping cached pets");
            shared.errors.set(SyncFailure {
                pet_type,
                message: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
#[path = "pets_tests.rs"]
mod tests;
