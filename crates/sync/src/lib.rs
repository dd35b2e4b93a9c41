// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! shelter-sync: keeps the local pet cache in step with the remote shelter API.
//!
//! This crate provides:
//! - [`SyncCoordinator`]: serves the cached listing of one pet type while
//!   refreshing it from the remote service
//! - [`DetailCoordinator`]: loads one pet's details and tracks picture selection
//! - [`PetsService`] and its HTTP implementation [`HttpPetsService`]
//! - [`Config`]: TOML client configuration

pub mod config;
pub mod detail;
pub mod error;
pub mod http;
pub mod ordering;
pub mod pets;
pub mod service;
pub mod slot;

#[cfg(test)]
mod test_helpers;

pub use config::{default_config_path, Config, RemoteConfig};
pub use detail::DetailCoordinator;
pub use error::{Error, Result};
pub use http::HttpPetsService;
pub use ordering::{OrderBy, PetOrdering};
pub use pets::{SyncCoordinator, SyncFailure};
pub use service::{PetsService, ServiceError, ServiceFuture, ServiceResult};
pub use slot::TaskSlot;
