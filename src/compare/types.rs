//! Comparison result types

use crate::fmt;
use crate::snapshot::AssetRecord;
use serde::{Deserialize, Serialize};

/// A base asset paired with a current asset whose parsed size changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetChange {
    /// Canonical key shared by both records
    pub key: String,
    /// Record from the base snapshot
    pub previous: AssetRecord,
    /// Record from the current snapshot
    pub next: AssetRecord,
    /// `next.parsed_size - previous.parsed_size`
    pub parsed_delta: i64,
    /// `next.gzip_size - previous.gzip_size`
    pub gzip_delta: i64,
}

impl AssetChange {
    /// Pair two records and compute their deltas
    pub fn new(key: impl Into<String>, previous: AssetRecord, next: AssetRecord) -> Self {
        let parsed_delta = fmt::size_delta(previous.parsed_size, next.parsed_size);
        let gzip_delta = fmt::size_delta(previous.gzip_size, next.gzip_size);
        Self {
            key: key.into(),
            previous,
            next,
            parsed_delta,
            gzip_delta,
        }
    }

    /// Parsed-size change in percent, `None` when the base size was zero
    pub fn percent_change(&self) -> Option<f64> {
        fmt::percent_change(self.previous.parsed_size, self.next.parsed_size)
    }
}

/// A current asset with no base counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedAsset {
    /// Canonical key of the asset
    pub key: String,
    /// Record from the current snapshot
    pub next: AssetRecord,
}

/// A base asset with no current counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedAsset {
    /// Canonical key of the asset
    pub key: String,
    /// Record from the base snapshot
    pub previous: AssetRecord,
}

/// Classified differences between two snapshots
///
/// Pairs whose parsed size did not change are not listed anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Grown assets, largest growth first
    pub bigger: Vec<AssetChange>,
    /// Shrunk assets, largest shrink first
    pub smaller: Vec<AssetChange>,
    /// New assets, largest first
    pub added: Vec<AddedAsset>,
    /// Dropped assets, largest first
    pub removed: Vec<RemovedAsset>,
}

impl ComparisonResult {
    /// True when no bucket has entries
    pub fn is_empty(&self) -> bool {
        self.bigger.is_empty()
            && self.smaller.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
    }

    /// Total number of reported entries across all buckets
    pub fn len(&self) -> usize {
        self.bigger.len() + self.smaller.len() + self.added.len() + self.removed.len()
    }
}
