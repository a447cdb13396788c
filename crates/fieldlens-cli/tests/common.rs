//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;

/// Path to a committed fixture result document.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A fieldlens command isolated from the host environment: no user config,
/// no price overrides leaking in from the shell.
pub fn fieldlens() -> Command {
    let mut cmd = Command::cargo_bin("fieldlens").expect("fieldlens binary builds");
    cmd.arg("--config").arg("/nonexistent/fieldlens-test.toml");
    cmd.env_remove("FIELDLENS_ENDPOINT");
    cmd.env_remove("FIELDLENS_API_KEY");
    cmd.env_remove("FIELDLENS_PRICE_PER_1K_INPUT");
    cmd.env_remove("FIELDLENS_PRICE_PER_1K_OUTPUT");
    cmd
}
