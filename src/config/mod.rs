//! Configuration for bundle-delta
//!
//! This module provides:
//! - .bundle-delta.toml data structures
//! - Growth budget validation
//! - Config file loading

pub mod file;
pub mod loader;

pub use file::{ConfigFile, GrowthBudget, CONFIG_FILE_NAME, DEFAULT_TITLE};
pub use loader::ConfigLoader;
