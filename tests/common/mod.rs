//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Snapshot fixture creation utilities
//! - Assertion helpers for report contents
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! fn test_report() {
//!     let workspace = fixtures::Workspace::new();
//!     let base = workspace.snapshot("base.json", &[("app.js", 100, 40)]);
//! }
//! ```

pub mod assertions;
pub mod fixtures;

use assert_cmd::Command;

/// Helper to get the bundle-delta binary command
#[allow(dead_code)]
pub fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bundle-delta"));
    cmd.env("NO_EMOJI", "1").env_remove("RUST_LOG");
    cmd
}
