// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors reported by the `shelter` command.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Sync(#[from] shelter_sync::Error),

    #[error(transparent)]
    Core(#[from] shelter_core::Error),

    #[error("could not load {what}: {message}")]
    Remote { what: String, message: String },

    #[error("timed out after {secs}s waiting for {what}\n  hint: raise --wait-secs or check [remote] base_url")]
    Timeout { what: String, secs: u64 },

    #[error("config file already exists: {0}\n  hint: pass --force to overwrite it")]
    ConfigExists(String),

    #[error("failed to render config: {0}")]
    RenderConfig(String),
}

/// A specialized Result type for `shelter` commands.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
