//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - A seeded catalog fixture

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Catalog used by most tests: a small Queen at 100, a large King at 250,
/// and a small King at 120.
pub const CATALOG_CSV: &str = "\
RoomCode,RoomName,Beds,bedType,maxOcc,basePrice,decor
A1,Garden view,1,Queen,2,100,modern
B2,Harbor suite,2,King,4,250,traditional
C3,Attic nook,1,King,2,120.00,rustic
";

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the inn data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created; `import-rooms` creates it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("inn-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Create a new environment with [`CATALOG_CSV`] imported.
    pub fn with_catalog() -> Self {
        let env = Self::new();
        env.import(CATALOG_CSV);
        env
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// `INN_*` variables from the caller's environment are cleared so the
    /// tests see built-in defaults.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("inn").expect("Failed to find inn binary");
        for var in [
            "INN_DATA_DIR",
            "INN_BUSY_TIMEOUT",
            "INN_LOG_MODE",
            "INN_REFERENCE_DATE",
            "INN_POPULARITY_WINDOW_DAYS",
            "INN_MAXIMUM_LOCK_WAIT_SECONDS",
            "INN_OUTPUT_FORMAT",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Write `contents` to a file under the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Import a catalog CSV.
    pub fn import(&self, csv: &str) {
        let path = self.write_file("rooms.csv", csv);
        self.command()
            .arg("import-rooms")
            .arg(&path)
            .assert()
            .success();
    }

    /// Write `<data dir>/config.yaml`.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Book `room` for two adults and return the confirmation code.
    ///
    /// # Panics
    /// Panics if the reserve command fails or prints no code.
    pub fn reserve(&self, room: &str, check_in: &str, check_out: &str) -> i64 {
        let output = self
            .command()
            .args(["reserve", "--first-name", "Ada", "--last-name", "Lovelace"])
            .args(["--check-in", check_in, "--check-out", check_out])
            .args(["--room", room, "--adults", "2", "--choice", "1"])
            .output()
            .expect("Failed to run reserve command");

        assert!(
            output.status.success(),
            "Reserve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        parse_code(&output.stdout)
    }

    /// Run `lookup --format json` and return the parsed array.
    pub fn lookup_json(&self, args: &[&str]) -> Vec<serde_json::Value> {
        let output = self
            .command()
            .arg("lookup")
            .args(args)
            .args(["--format", "json"])
            .output()
            .expect("Failed to run lookup command");
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).expect("lookup printed invalid JSON")
    }
}

/// Parse a confirmation code from command output.
pub fn parse_code(stdout: &[u8]) -> i64 {
    String::from_utf8_lossy(stdout)
        .trim()
        .parse()
        .expect("Output is not a confirmation code")
}
