// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    remote = {
        Error::Remote { what: "dog 7".into(), message: "pet not found: dog 7".into() },
        "could not load dog 7: pet not found: dog 7"
    },
    timeout = {
        Error::Timeout { what: "cached dogs".into(), secs: 3 },
        "timed out after 3s waiting for cached dogs"
    },
    config_exists = {
        Error::ConfigExists("/tmp/config.toml".into()),
        "config file already exists: /tmp/config.toml"
    },
)]
fn error_display_starts_with(err: Error, expected: &str) {
    assert!(err.to_string().starts_with(expected), "{err}");
}

#[test]
fn timeout_has_hint() {
    let err = Error::Timeout {
        what: "details".into(),
        secs: 1,
    };
    assert!(err.to_string().contains("hint: raise --wait-secs"));
}

#[test]
fn wrapped_errors_are_transparent() {
    let err: Error = shelter_core::Error::InvalidPetType("lizard".into()).into();
    assert!(err.to_string().starts_with("invalid pet type: 'lizard'"));

    let err: Error = shelter_sync::Error::NoRuntime.into();
    assert!(err.to_string().starts_with("no async runtime"));
}
