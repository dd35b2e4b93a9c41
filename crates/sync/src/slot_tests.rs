// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Spawn a task that sets `flag` once it is allowed to run to completion.
fn spawn_flagging(flag: &Arc<AtomicBool>, delay: Duration) -> JoinHandle<()> {
    let flag = Arc::clone(flag);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        flag.store(true, Ordering::SeqCst);
    })
}

#[tokio::test]
async fn empty_slot_is_inactive() {
    let slot = TaskSlot::new();
    assert!(!slot.is_active());
}

#[tokio::test]
async fn replace_aborts_previous_task() {
    let first = Arc::new(AtomicBool::new(false));
    let second = Arc::new(AtomicBool::new(false));

    let mut slot = TaskSlot::new();
    slot.replace(spawn_flagging(&first, Duration::from_millis(30)));
    slot.replace(spawn_flagging(&second, Duration::from_millis(10)));
    assert!(slot.is_active());

    tokio::time::sleep(Duration::from_millis(80)).await;
    assert!(!first.load(Ordering::SeqCst));
    assert!(second.load(Ordering::SeqCst));
    assert!(!slot.is_active());
}

#[tokio::test]
async fn clear_aborts_task() {
    let flag = Arc::new(AtomicBool::new(false));
    let mut slot = TaskSlot::new();
    slot.replace(spawn_flagging(&flag, Duration::from_millis(20)));
    slot.clear();
    assert!(!slot.is_active());

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(!flag.load(Ordering::SeqCst));
}

#[tokio::test]
async fn drop_aborts_task() {
    let flag = Arc::new(AtomicBool::new(false));
    {
        let mut slot = TaskSlot::new();
        slot.replace(spawn_flagging(&flag, Duration::from_millis(20)));
    }

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(!flag.load(Ordering::SeqCst));
}
