//! Test fixture helpers for creating snapshot files
//!
//! Snapshots are written in the bundle analyzer's camelCase JSON shape.

#![allow(dead_code)]

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding snapshots, configs and reports
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Workspace root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a snapshot of `(filename, parsed_size, gzip_size)` entries
    pub fn snapshot(&self, name: &str, assets: &[(&str, u64, u64)]) -> PathBuf {
        let records: Vec<_> = assets
            .iter()
            .map(|(filename, parsed, gzip)| {
                json!({ "filename": filename, "parsedSize": parsed, "gzipSize": gzip })
            })
            .collect();
        self.raw(name, &serde_json::to_string_pretty(&records).expect("serialize snapshot"))
    }

    /// Write a file with arbitrary contents
    pub fn raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    /// Write `.bundle-delta.toml` into the workspace root
    pub fn config(&self, contents: &str) -> PathBuf {
        self.raw(".bundle-delta.toml", contents)
    }
}

/// Base snapshot from the hashed-rename scenario
pub const RENAMED_BASE: &[(&str, u64, u64)] = &[("app-abc12345.js", 1000, 400)];

/// Current snapshot from the hashed-rename scenario
pub const RENAMED_CURRENT: &[(&str, u64, u64)] = &[("app-xyz98765.js", 1200, 450)];

/// A mixed base snapshot touching every bucket
pub const MIXED_BASE: &[(&str, u64, u64)] = &[
    ("main-aaaaaaaa.js", 5000, 1500),
    ("vendor-bbbbbbbb.js", 20000, 6000),
    ("legacy.css", 800, 200),
    ("logo.svg", 300, 150),
];

/// Current counterpart of [`MIXED_BASE`]
pub const MIXED_CURRENT: &[(&str, u64, u64)] = &[
    ("main-cccccccc.js", 5600, 1650),
    ("vendor-dddddddd.js", 18000, 5400),
    ("charts-eeeeeeee.js", 4000, 1200),
    ("logo.svg", 300, 150),
];
