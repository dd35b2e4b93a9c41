// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote pet service abstraction.
//!
//! Provides a trait-based boundary to the shelter's remote API so that:
//! - the HTTP client is used in production
//! - scripted mock services drive the coordinator tests

use std::future::Future;
use std::pin::Pin;

use shelter_core::{Pet, PetDetails, PetType};

/// Error type for remote service calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// No pet with this id exists for the type.
    #[error("pet not found: {pet_type} {id}")]
    NotFound { pet_type: PetType, id: i64 },
}

/// Result type for remote service calls.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Boxed future returned by [`PetsService`] methods.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = ServiceResult<T>> + Send + 'a>>;

/// Source of authoritative pet listings.
///
/// Calls may be slow or fail; timeouts are the implementation's concern.
/// Dropping a returned future cancels the call.
pub trait PetsService: Send + Sync + 'static {
    /// Fetch the full listing for a pet type.
    fn pets_list(&self, pet_type: PetType) -> ServiceFuture<'_, Vec<Pet>>;

    /// Fetch the details of one pet.
    fn pet_details(&self, pet_type: PetType, id: i64) -> ServiceFuture<'_, PetDetails>;
}
