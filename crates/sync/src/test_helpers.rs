// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for coordinator tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use shelter_core::{Pet, PetDetails, PetType, Publisher, Subscription};
use tokio::sync::oneshot;

use crate::service::{PetsService, ServiceError, ServiceFuture, ServiceResult};

/// Scripted replies for one endpoint.
///
/// Gated replies are consumed first, in order. After that the standing reply
/// answers every call. With neither, the call never completes.
struct Script<T> {
    gates: VecDeque<oneshot::Receiver<ServiceResult<T>>>,
    standing: Option<ServiceResult<T>>,
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Script {
            gates: VecDeque::new(),
            standing: None,
        }
    }
}

enum Next<T> {
    Gate(oneshot::Receiver<ServiceResult<T>>),
    Ready(ServiceResult<T>),
    Hang,
}

impl<T: Clone> Script<T> {
    fn next(&mut self) -> Next<T> {
        if let Some(gate) = self.gates.pop_front() {
            return Next::Gate(gate);
        }
        match &self.standing {
            Some(reply) => Next::Ready(reply.clone()),
            None => Next::Hang,
        }
    }
}

async fn resolve<T>(next: Next<T>) -> ServiceResult<T> {
    match next {
        Next::Ready(reply) => reply,
        Next::Gate(gate) => gate
            .await
            .unwrap_or_else(|_| Err(ServiceError::Request("gate dropped".into()))),
        Next::Hang => std::future::pending().await,
    }
}

/// A recorded call to the mock service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    List(PetType),
    Details(PetType, i64),
}

/// Mock pets service driven by scripted replies.
#[derive(Default)]
pub struct MockPetsService {
    lists: Mutex<HashMap<PetType, Script<Vec<Pet>>>>,
    details: Mutex<HashMap<(PetType, i64), Script<PetDetails>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockPetsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every listing call for `pet_type` with `reply`.
    pub fn reply_list(&self, pet_type: PetType, reply: ServiceResult<Vec<Pet>>) {
        let mut lists = self.lists.lock().unwrap();
        lists.entry(pet_type).or_default().standing = Some(reply);
    }

    /// Hold the next listing call for `pet_type` until the sender fires.
    pub fn gate_list(&self, pet_type: PetType) -> oneshot::Sender<ServiceResult<Vec<Pet>>> {
        let (tx, rx) = oneshot::channel();
        let mut lists = self.lists.lock().unwrap();
        lists.entry(pet_type).or_default().gates.push_back(rx);
        tx
    }

    /// Answer every details call for the pet with `reply`.
    pub fn reply_details(&self, pet_type: PetType, id: i64, reply: ServiceResult<PetDetails>) {
        let mut details = self.details.lock().unwrap();
        details.entry((pet_type, id)).or_default().standing = Some(reply);
    }

    /// Hold the next details call for the pet until the sender fires.
    pub fn gate_details(
        &self,
        pet_type: PetType,
        id: i64,
    ) -> oneshot::Sender<ServiceResult<PetDetails>> {
        let (tx, rx) = oneshot::channel();
        let mut details = self.details.lock().unwrap();
        details.entry((pet_type, id)).or_default().gates.push_back(rx);
        tx
    }

    /// All calls received so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of listing calls received for `pet_type`.
    pub fn list_calls(&self, pet_type: PetType) -> usize {
        self.calls()
            .iter()
            .filter(|call| **call == Call::List(pet_type))
            .count()
    }
}

impl PetsService for MockPetsService {
    fn pets_list(&self, pet_type: PetType) -> ServiceFuture<'_, Vec<Pet>> {
        self.calls.lock().unwrap().push(Call::List(pet_type));
        let next = self
            .lists
            .lock()
            .unwrap()
            .entry(pet_type)
            .or_default()
            .next();
        Box::pin(resolve(next))
    }

    fn pet_details(&self, pet_type: PetType, id: i64) -> ServiceFuture<'_, PetDetails> {
        self.calls.lock().unwrap().push(Call::Details(pet_type, id));
        let next = self
            .details
            .lock()
            .unwrap()
            .entry((pet_type, id))
            .or_default()
            .next();
        Box::pin(resolve(next))
    }
}

/// Collects every value a publisher emits while attached.
pub struct Recorder<T> {
    seen: Arc<Mutex<Vec<T>>>,
    _subscription: Subscription,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    pub fn attach(publisher: &Publisher<T>) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let subscription = publisher.subscribe(move |value: &T| {
            sink.lock().unwrap().push(value.clone());
        });
        Recorder {
            seen,
            _subscription: subscription,
        }
    }

    pub fn values(&self) -> Vec<T> {
        self.seen.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    /// Wait until at least `count` values have been recorded.
    pub async fn wait_for(&self, count: usize) {
        wait_until(|| self.len() >= count).await;
    }
}

/// Poll `condition` until it holds, failing the test after about two seconds.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..400 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(condition(), "condition not met in time");
}

/// Give spawned tasks a chance to run (and to misbehave).
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(30)).await;
}

pub fn pet(pet_type: PetType, id: i64, name: &str) -> Pet {
    Pet::new(id, pet_type, name)
}

pub fn dog(id: i64, name: &str) -> Pet {
    pet(PetType::Dog, id, name)
}

pub fn cat(id: i64, name: &str) -> Pet {
    pet(PetType::Cat, id, name)
}

pub fn names(pets: &[Pet]) -> Vec<String> {
    pets.iter().map(|p| p.name.clone()).collect()
}

pub fn make_details(pet_type: PetType, id: i64, pictures: &[&str]) -> PetDetails {
    PetDetails {
        id,
        pet_type,
        name: format!("pet-{id}"),
        pic_urls: pictures.iter().map(|p| p.to_string()).collect(),
        video_url: None,
        description: "Friendly and house trained.".into(),
        sex: Some("female".into()),
        breed: None,
        age: Some("2 years".into()),
        size: None,
        color: None,
        altered: Some(true),
        declawed: false,
        in_foster_care: false,
        adoption_pending: false,
    }
}
