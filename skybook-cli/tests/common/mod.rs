//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary store
//! - Command builder helpers for common patterns
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI reads; cleared so the host cannot leak in.
const SKYBOOK_VARS: [&str; 4] = [
    "SKYBOOK_DATABASE",
    "SKYBOOK_BUSY_TIMEOUT",
    "SKYBOOK_OUTPUT_FORMAT",
    "SKYBOOK_LOG_MODE",
];

/// Test environment with an isolated store file.
///
/// Commands run with the temporary directory as both working directory
/// and home directory, so no real configuration files are picked up.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the store file
    pub db_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The store file is not created yet; the first command creates it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let db_path = temp_path.join("data").join("flights.db");

        Self {
            temp_dir,
            temp_path,
            db_path,
        }
    }

    /// Get a command builder without the `--database` flag.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("skybook").expect("Failed to find skybook binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in SKYBOOK_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the store path pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--database").arg(&self.db_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `skybook.yaml` into the working directory.
    pub fn write_project_config(&self, content: &str) {
        std::fs::write(self.temp_path.join("skybook.yaml"), content)
            .expect("Failed to write project config");
    }

    /// Book a reservation and return its id.
    ///
    /// # Panics
    /// Panics if the book command fails or doesn't print a valid id.
    pub fn book(&self, name: &str, flight: &str, date: &str, seat: &str) -> i64 {
        let output = self
            .command()
            .args([
                "book", "--name", name, "--flight", flight, "--from", "New York", "--to",
                "Los Angeles", "--date", date, "--seat", seat,
            ])
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout
            .trim()
            .parse()
            .expect("Output is not a valid reservation id")
    }

    /// Book a reservation with default details.
    pub fn book_simple(&self, name: &str) -> i64 {
        self.book(name, "AA123", "2024-12-25", "12A")
    }

    /// Run `list` with the given format and return stdout.
    pub fn list_format(&self, format: &str) -> String {
        let output = self
            .command()
            .args(["list", "--format", format])
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Run `list --format json` and return the parsed array.
    pub fn list_json(&self) -> Vec<serde_json::Value> {
        let output = self.list_format("json");
        let value: serde_json::Value =
            serde_json::from_str(&output).expect("Invalid JSON from list");
        value.as_array().expect("Expected JSON array").clone()
    }

    /// Open the store file directly for inspection.
    pub fn open_db(&self) -> rusqlite::Connection {
        rusqlite::Connection::open(&self.db_path).expect("Failed to open store file")
    }
}
