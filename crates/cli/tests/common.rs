// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use assert_cmd::assert::OutputAssertExt;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn shelter() -> Command {
    let mut cmd = cargo_bin_cmd!("shelter");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Write a config into `temp` pointing at `base_url`, and return its path.
pub fn write_config(temp: &TempDir, base_url: &str) -> PathBuf {
    let path = temp.path().join("config.toml");
    let db = temp.path().join("shelter.db");
    let content = format!(
        "database = \"{}\"\n\n[remote]\nbase_url = \"{}\"\ntimeout_secs = 2\n",
        db.display(),
        base_url
    );
    std::fs::write(&path, content).unwrap();
    path
}

/// Path of the cache database used by [`write_config`].
pub fn db_path(temp: &TempDir) -> PathBuf {
    temp.path().join("shelter.db")
}

/// A base URL on which nothing listens.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

/// Serve canned JSON keyed by request path until the test ends.
///
/// Unknown paths answer 404.
pub async fn serve(routes: &[(&str, &'static str)]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: HashMap<String, &'static str> = routes
        .iter()
        .map(|(path, body)| (path.to_string(), *body))
        .collect();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut chunk = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&chunk[..n]),
                    }
                }
                let request = String::from_utf8_lossy(&request);
                let path = request
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or_default()
                    .to_string();

                let (status, body) = match routes.get(&path) {
                    Some(body) => ("200 OK", *body),
                    None => ("404 Not Found", "{}"),
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
            });
        }
    });

    format!("http://{addr}/api")
}

/// Run `shelter` off the async test thread so the mock server keeps serving.
pub async fn run_shelter(args: Vec<String>) -> assert_cmd::assert::Assert {
    let output = tokio::task::spawn_blocking(move || shelter().args(args).output().unwrap())
        .await
        .unwrap();
    output.assert()
}

pub fn args(config: &Path, rest: &[&str]) -> Vec<String> {
    let mut args = vec!["--config".to_string(), config.display().to_string()];
    args.extend(rest.iter().map(|s| s.to_string()));
    args
}
