// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for shelter-core operations.

use thiserror::Error;

/// All possible errors that can occur in shelter-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "invalid pet type: '{0}'\n  hint: valid types are: cat, dog, rabbit, small_mammal, reptile"
    )]
    InvalidPetType(String),

    #[error("pet {id} is a {found}, cannot store it as a {expected}")]
    PetTypeMismatch {
        expected: String,
        found: String,
        id: i64,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for shelter-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
