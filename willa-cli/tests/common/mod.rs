//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including
//! test environment setup with an isolated data directory and
//! convenience wrappers around common commands.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the willa data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created yet - willa will create it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("willa-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Use this when you need to override the data directory or test
    /// global flag behavior. Environment variables that would leak in
    /// from the host are cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("willa").expect("Failed to find willa binary");
        cmd.env_remove("WILLA_USER")
            .env_remove("WILLA_ADMIN")
            .env_remove("WILLA_DATA_DIR")
            .env_remove("WILLA_BUSY_TIMEOUT")
            .env_remove("WILLA_DISABLE_AUTOINIT")
            .env_remove("WILLA_OUTPUT_FORMAT");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get a command builder acting as the given user.
    pub fn command_as(&self, user: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("--user").arg(user);
        cmd
    }

    /// Add a catalog item, asserting success.
    pub fn add_item(&self, kind: &str, name: &str) {
        self.command()
            .args(["item", "add", kind, name])
            .assert()
            .success();
    }

    /// Submit a booking as a user, asserting success.
    pub fn submit_simple(&self, user: &str, kind: &str, id: &str, start: &str, end: &str) {
        self.command_as(user)
            .args(["submit", kind, id, "--start", start, "--end", end])
            .assert()
            .success();
    }
}
