// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! shelter-core: Shared library for the shelter listing
//!
//! This crate provides the pet data types, the SQLite listing cache, and the
//! latest-value publisher used by the sync coordinators and the CLI.

pub mod db;
pub mod error;
pub mod pet;
pub mod publisher;

pub use db::{PetStore, PetWatch};
pub use error::{Error, Result};
pub use pet::{Pet, PetDetails, PetType};
pub use publisher::{Publisher, Subscription};
