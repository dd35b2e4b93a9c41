// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn init_writes_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("shelter").join("config.toml");

    init(&path, false).unwrap();
    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "order_by = \"id\"\n").unwrap();

    let err = init(&path, false).unwrap_err();
    assert!(matches!(err, Error::ConfigExists(_)));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "order_by = \"id\"\n"
    );
}

#[test]
fn init_force_overwrites() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "order_by = \"id\"\n").unwrap();

    init(&path, true).unwrap();
    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn render_includes_remote_section() {
    let text = render(&Config::default()).unwrap();
    assert!(text.contains("order_by = \"name\""));
    assert!(text.contains("[remote]"));
    assert!(text.contains("base_url = \"http://localhost:8080/api\""));
}
