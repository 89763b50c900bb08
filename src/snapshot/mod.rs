//! Bundle snapshots: asset records, loading and totals
//!
//! A snapshot is the list of assets one build produced, each with its parsed
//! and gzip size.

mod loader;
mod record;
mod totals;

pub use loader::{SnapshotLoader, SnapshotRole};
pub use record::{AssetRecord, RawAssetRecord, UNKNOWN_ASSET_NAME};
pub use totals::{totals, SizeTotals};
