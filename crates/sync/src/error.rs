// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::service::ServiceError;

/// All possible errors that can occur while wiring up or running sync.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] shelter_core::Error),

    #[error("remote error: {0}")]
    Service(#[from] ServiceError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no async runtime\n  hint: coordinators must be created inside a Tokio runtime")]
    NoRuntime,
}

/// A specialized Result type for sync operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
