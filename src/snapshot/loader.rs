//! Snapshot file loading
//!
//! A snapshot file is the JSON array written by a bundle analyzer. Shape
//! validation happens here so the comparison engine only ever sees
//! well-formed records.

use super::record::{AssetRecord, RawAssetRecord, UNKNOWN_ASSET_NAME};
use crate::error::BundleDeltaError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::Result;
use log::{debug, info, warn};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Which side of the comparison a snapshot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotRole {
    /// Baseline build
    Base,
    /// Proposed build
    Current,
}

impl fmt::Display for SnapshotRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Current => f.write_str("current"),
        }
    }
}

/// Loads asset records from snapshot files
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Load a snapshot from disk
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bundle_delta::snapshot::{SnapshotLoader, SnapshotRole};
    /// use std::path::Path;
    ///
    /// let records = SnapshotLoader::load(Path::new("base-stats.json"), SnapshotRole::Base)?;
    /// println!("{} assets in baseline", records.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BundleDeltaError::SnapshotNotFound`] when the file is missing,
    /// [`BundleDeltaError::InvalidSnapshot`] when it is not a JSON array of
    /// objects, and [`BundleDeltaError::Io`] for other read failures.
    pub fn load(path: &Path, role: SnapshotRole) -> Result<Vec<AssetRecord>> {
        Self::load_with_fs(path, role, &RealFileSystem)
    }

    /// Load a snapshot with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(
        path: &Path,
        role: SnapshotRole,
        fs: &FS,
    ) -> Result<Vec<AssetRecord>> {
        let contents = match fs.read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BundleDeltaError::SnapshotNotFound {
                    path: path.to_path_buf(),
                    role,
                }
                .into());
            }
            Err(e) => {
                return Err(BundleDeltaError::Io {
                    context: format!("reading {} snapshot {}", role, path.display()),
                    source: e,
                }
                .into());
            }
        };

        let records = Self::parse(&contents, path)?;
        info!(
            "Loaded {} snapshot {} ({} assets)",
            role,
            path.display(),
            records.len()
        );
        Ok(records)
    }

    /// Decode snapshot JSON into asset records
    pub fn parse(contents: &str, path: &Path) -> Result<Vec<AssetRecord>, BundleDeltaError> {
        let invalid = |reason: String| BundleDeltaError::InvalidSnapshot {
            path: path.to_path_buf(),
            reason,
        };

        let value: Value =
            serde_json::from_str(contents).map_err(|e| invalid(format!("not valid JSON: {}", e)))?;

        let Value::Array(items) = value else {
            return Err(invalid("expected a JSON array of assets".to_string()));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if !item.is_object() {
                    return Err(invalid(format!("asset #{} is not an object", index)));
                }
                let raw: RawAssetRecord = serde_json::from_value(item)
                    .map_err(|e| invalid(format!("asset #{}: {}", index, e)))?;
                let record = raw.into_record();
                if record.name == UNKNOWN_ASSET_NAME {
                    warn!("asset #{} in {} has no filename or label", index, path.display());
                }
                debug!(
                    "asset {} parsed={} gzip={}",
                    record.name, record.parsed_size, record.gzip_size
                );
                Ok(record)
            })
            .collect()
    }
}
