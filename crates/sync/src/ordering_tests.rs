// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use shelter_core::PetType;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use yare::parameterized;

fn pets(entries: &[(i64, &str)]) -> Vec<Pet> {
    entries
        .iter()
        .map(|(id, name)| Pet::new(*id, PetType::Dog, *name))
        .collect()
}

fn ids(pets: &[Pet]) -> Vec<i64> {
    pets.iter().map(|p| p.id).collect()
}

#[test]
fn by_name_is_case_insensitive() {
    let mut list = pets(&[(1, "rex"), (2, "Biscuit"), (3, "apollo")]);
    PetOrdering::by_name().sort(&mut list);
    assert_eq!(ids(&list), vec![3, 2, 1]);
}

#[test]
fn by_name_breaks_ties_by_id() {
    let mut list = pets(&[(9, "Max"), (4, "max"), (6, "Max")]);
    PetOrdering::by_name().sort(&mut list);
    assert_eq!(ids(&list), vec![4, 6, 9]);
}

#[test]
fn by_id_sorts_numerically() {
    let mut list = pets(&[(100, "A"), (20, "B"), (3, "C")]);
    PetOrdering::by_id().sort(&mut list);
    assert_eq!(ids(&list), vec![3, 20, 100]);
}

#[test]
fn by_key_custom() {
    let mut list = pets(&[(1, "aa"), (2, "b"), (3, "cccc")]);
    let ordering = PetOrdering::by_key("name length", |pet| std::cmp::Reverse(pet.name.len()));
    ordering.sort(&mut list);
    assert_eq!(ids(&list), vec![3, 1, 2]);
    assert_eq!(ordering.label(), "name length");
}

#[test]
fn keys_are_computed_once_per_pet() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let ordering = PetOrdering::by_key("counted", move |pet| {
        counter.fetch_add(1, AtomicOrdering::SeqCst);
        pet.name.to_lowercase()
    });

    let mut list = pets(&[(1, "d"), (2, "B"), (3, "a"), (4, "c"), (5, "e"), (6, "b")]);
    ordering.sort(&mut list);

    assert_eq!(ids(&list), vec![3, 2, 6, 4, 1, 5]);
    assert_eq!(calls.load(AtomicOrdering::SeqCst), 6);
}

#[test]
fn default_is_by_name() {
    assert_eq!(PetOrdering::default().label(), "name");
    assert_eq!(format!("{:?}", PetOrdering::default()), "PetOrdering(\"name\")");
}

#[parameterized(
    name = { "name", OrderBy::Name },
    id_upper = { "ID", OrderBy::Id },
)]
fn order_by_from_str(input: &str, expected: OrderBy) {
    assert_eq!(input.parse::<OrderBy>().unwrap(), expected);
}

#[test]
fn order_by_rejects_unknown() {
    let err = "age".parse::<OrderBy>().unwrap_err();
    assert!(err.to_string().contains("valid orders"));
}

#[test]
fn order_by_converts_to_ordering() {
    assert_eq!(PetOrdering::from(OrderBy::Id).label(), "id");
    assert_eq!(PetOrdering::from(OrderBy::Name).label(), "name");
}
