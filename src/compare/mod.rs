//! Comparison of two bundle snapshots
//!
//! This module provides:
//! - Asset name normalization (content hashes stripped for grouping)
//! - The comparison engine (grouping, rank pairing, classification, ordering)
//! - Result types consumed by renderers and CI output

mod engine;
mod normalizer;
mod types;

pub use engine::{compare, compare_with};
pub use normalizer::{
    normalize, AssetNormalizer, HashNormalizer, DEFAULT_HASH_PATTERN, HASH_PLACEHOLDER,
};
pub use types::{AddedAsset, AssetChange, ComparisonResult, RemovedAsset};
