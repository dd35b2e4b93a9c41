// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-flight task handle.

use tokio::task::JoinHandle;

/// Owns at most one background task.
///
/// Replacing or clearing the slot aborts the task it held. Abort is a
/// request: the task stops at its next await point, it is never waited on.
#[derive(Debug, Default)]
pub struct TaskSlot {
    handle: Option<JoinHandle<()>>,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle`, aborting whatever task was there before.
    pub fn replace(&mut self, handle: JoinHandle<()>) {
        if let Some(previous) = self.handle.replace(handle) {
            previous.abort();
        }
    }

    /// Abort the held task, if any.
    pub fn clear(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether the slot holds a task that has not finished yet.
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;
