//! Common test utilities for CLI integration tests.

use clap::Parser;
use rosterline_cli::cli::Args;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary workspace holding payload and config files.
pub struct TestHarness {
    /// Backing directory, removed on drop
    pub dir: TempDir,
}

impl TestHarness {
    /// Creates an empty harness.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Writes a file into the harness directory and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    /// Writes a JSON payload and returns its path as a string.
    pub fn payload(&self, name: &str, value: &serde_json::Value) -> String {
        let path = self.write(name, &value.to_string());
        path.to_str().expect("utf-8 path").to_string()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a command line the way `main` does.
pub fn args(argv: &[&str]) -> Args {
    let mut full = vec!["rosterline"];
    full.extend_from_slice(argv);
    Args::try_parse_from(full).expect("valid command line")
}

/// A small employee export mixing inline and history assignments.
pub fn employee_export() -> serde_json::Value {
    serde_json::json!([
        {
            "employee_name": "Ada Byron",
            "employee_id": 7,
            "project": "Bridge",
            "start_date": "2024-03-01",
            "end_date": "2024-03-31",
            "work_phone": "555-123-4567 x12"
        },
        {
            "firstName": "Grace",
            "lastName": "Hopper",
            "emp_id": "E-2",
            "cellPhone": "1 (555) 987-6543",
            "transfers": [
                {"from": "2024-02-01", "to": "2024-02-28", "project_code": "Tunnel"},
                {"from": "2024-01-01", "to": "2024-01-31"}
            ]
        },
        "not a record"
    ])
}
