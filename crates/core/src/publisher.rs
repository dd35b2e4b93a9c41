// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Latest-value publisher with explicit subscriptions.
//!
//! A [`Publisher`] holds the most recent value of `T` and pushes every new
//! value to the observers attached at that moment. It is not a queue: an
//! observer that attaches late receives only the current value, never the
//! history.
//!
//! ```text
//! set(v) ──► [ latest: Some(v) ] ──► observer A
//!                                └──► observer B
//! subscribe(C) ──► C(latest) immediately, then future sets
//! ```
//!
//! Sets are serialized and observers run synchronously inside `set` while
//! the publisher is locked. Observers must therefore stay short and must
//! not call back into the same publisher (no `set`, `subscribe` or
//! `Subscription::dispose` on it from within the callback).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::sync::mpsc;

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Shared<T> {
    value: Option<T>,
    observers: Vec<(u64, Observer<T>)>,
    next_id: u64,
}

/// Lock ignoring poisoning: a panicking observer must not wedge the publisher.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Type-erased detach so that [`Subscription`] need not be generic.
trait Detach: Send + Sync {
    fn detach(&self, id: u64);
}

impl<T: Send> Detach for Mutex<Shared<T>> {
    fn detach(&self, id: u64) {
        lock(self).observers.retain(|(observer_id, _)| *observer_id != id);
    }
}

/// Single-writer, multi-reader holder of the latest value.
///
/// Cloning yields another handle to the same value and observer list.
pub struct Publisher<T> {
    shared: Arc<Mutex<Shared<T>>>,
}

impl<T> Clone for Publisher<T> {
    fn clone(&self) -> Self {
        Publisher {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + Send + 'static> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Publisher<T> {
    /// Create a publisher with no value yet.
    pub fn new() -> Self {
        Publisher {
            shared: Arc::new(Mutex::new(Shared {
                value: None,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Store `value` and notify every attached observer before returning.
    pub fn set(&self, value: T) {
        let mut shared = lock(&self.shared);
        let shared = &mut *shared;
        let value = &*shared.value.insert(value);
        for (_, observer) in &shared.observers {
            observer(value);
        }
    }

    /// Attach an observer.
    ///
    /// If a value is already held the observer sees it immediately, before
    /// any later `set` can reach it. The observer stays attached until the
    /// returned [`Subscription`] is disposed or dropped.
    #[must_use = "dropping the subscription detaches the observer"]
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut shared = lock(&self.shared);
        let id = shared.next_id;
        shared.next_id += 1;

        let observer: Observer<T> = Arc::new(observer);
        if let Some(value) = &shared.value {
            observer(value);
        }
        shared.observers.push((id, observer));
        drop(shared);

        let target: Weak<dyn Detach> = Arc::downgrade(&self.shared) as Weak<dyn Detach>;
        Subscription {
            target,
            id,
            disposed: AtomicBool::new(false),
        }
    }

    /// Attach a channel that receives a clone of every published value.
    ///
    /// Convenient for async consumers that want to `.recv().await`.
    #[must_use = "dropping the subscription detaches the channel"]
    pub fn subscribe_channel(&self) -> (Subscription, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = self.subscribe(move |value: &T| {
            // Receiver gone means the consumer stopped listening.
            let _ = tx.send(value.clone());
        });
        (subscription, rx)
    }

    /// The latest value, if any has been published.
    pub fn latest(&self) -> Option<T> {
        lock(&self.shared).value.clone()
    }

    /// Number of attached observers.
    pub fn subscriber_count(&self) -> usize {
        lock(&self.shared).observers.len()
    }
}

/// Handle to an attached observer.
///
/// Disposal is idempotent and also happens on drop.
pub struct Subscription {
    target: Weak<dyn Detach>,
    id: u64,
    disposed: AtomicBool,
}

impl Subscription {
    /// Detach the observer. Calling this more than once is a no-op.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(target) = self.target.upgrade() {
            target.detach(self.id);
        }
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

#[cfg(test)]
#[path = "publisher_tests.rs"]
mod tests;
