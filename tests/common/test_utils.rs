//! Test utilities for temporary file handling
//!
//! Wraps `tempfile` directories so each test gets its own input file and
//! output directory, cleaned up on drop.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// RAII wrapper for a test workspace: an input CSV location plus an output directory
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create a new empty workspace
    pub fn new() -> Self {
        TestWorkspace {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Root of the workspace
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Output directory (not created until the pipeline runs)
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("processed")
    }

    /// Write `content` to `name` inside the workspace and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

/// Helper to create CSV text from headers and rows
pub fn csv_text(headers: &[&str], rows: &[&[&str]]) -> String {
    let mut text = headers.join(",");
    text.push('\n');
    for row in rows {
        text.push_str(&row.join(","));
        text.push('\n');
    }
    text
}

/// Compare floats with a tolerance
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
