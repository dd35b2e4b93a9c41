// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Details of a single pet with picture selection.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shelter_core::{PetDetails, PetType, Publisher};
use tokio::runtime::Handle;

use crate::error::{Error, Result};
use crate::pets::SyncFailure;
use crate::service::PetsService;
use crate::slot::TaskSlot;

#[derive(Default)]
struct DetailState {
    pictures: Vec<String>,
    selected: Option<usize>,
    fetch_task: TaskSlot,
    disposed: bool,
}

struct Shared {
    state: Mutex<DetailState>,
    details: Publisher<PetDetails>,
    picture: Publisher<String>,
    errors: Publisher<SyncFailure>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, DetailState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Loads one pet's details once and tracks the selected picture.
pub struct DetailCoordinator {
    shared: Arc<Shared>,
    pet_type: PetType,
    id: i64,
}

impl DetailCoordinator {
    /// Start loading the details of pet `id` of `pet_type`.
    ///
    /// Exactly one remote call is made. Must be called from within a Tokio
    /// runtime.
    pub fn new<S: PetsService>(service: Arc<S>, pet_type: PetType, id: i64) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        let shared = Arc::new(Shared {
            state: Mutex::new(DetailState::default()),
            details: Publisher::new(),
            picture: Publisher::new(),
            errors: Publisher::new(),
        });

        let task = runtime.spawn(fetch_details(Arc::clone(&shared), service, pet_type, id));
        shared.lock().fetch_task.replace(task);

        Ok(DetailCoordinator {
            shared,
            pet_type,
            id,
        })
    }

    /// Publisher of the loaded details; receives at most one value.
    pub fn details(&self) -> Publisher<PetDetails> {
        self.shared.details.clone()
    }

    /// Publisher of the selected picture URL.
    pub fn picture(&self) -> Publisher<String> {
        self.shared.picture.clone()
    }

    pub fn errors(&self) -> Publisher<SyncFailure> {
        self.shared.errors.clone()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.shared.lock().selected
    }

    /// Show picture `index`.
    ///
    /// Out-of-range indices and calls made before the details arrive leave
    /// the current picture in place.
    pub fn select_picture(&self, index: usize) {
        let mut state = self.shared.lock();
        if state.disposed {
            return;
        }
        let Some(url) = state.pictures.get(index).cloned() else {
            tracing::debug!(
                index,
                available = state.pictures.len(),
                "ignoring out of range picture"
            );
            return;
        };
        state.selected = Some(index);
        self.shared.picture.set(url);
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.lock().disposed
    }

    /// Cancel the pending fetch. Idempotent.
    pub fn dispose(&self) {
        let mut state = self.shared.lock();
        if state.disposed {
            return;
        }
        state.disposed = true;
        state.fetch_task.clear();
        tracing::debug!(pet_type = %self.pet_type, id = self.id, "detail coordinator disposed");
    }
}

impl Drop for DetailCoordinator {
    fn drop(&mut self) {
        self.dispose();
    }
}

async fn fetch_details<S: PetsService>(
    shared: Arc<Shared>,
    service: Arc<S>,
    pet_type: PetType,
    id: i64,
) {
    let result = service.pet_details(pet_type, id).await;

    let mut state = shared.lock();
    if state.disposed {
        tracing::debug!(pet_type = %pet_type, id, "discarding details after dispose");
        return;
    }

    match result {
        Ok(details) => {
            tracing::info!(pet_type = %pet_type, id, pictures = details.pic_urls.len(), "loaded pet details");
            state.pictures = details.pic_urls.clone();
            let first = details.pic_urls.first().cloned();
            shared.details.set(details);
            if let Some(url) = first {
                state.selected = Some(0);
                shared.picture.set(url);
            }
        }
        Err(e) => {
            tracing::warn!(pet_type = %pet_type, id, error = %e, "failed to load pet details");
            shared.errors.set(SyncFailure {
                pet_type,
                message: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
