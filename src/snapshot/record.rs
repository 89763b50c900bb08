//! Asset records as they appear in a bundle stats snapshot

use serde::{Deserialize, Serialize};

/// Name used when a record carries neither `filename` nor `label`
pub const UNKNOWN_ASSET_NAME: &str = "unknown";

/// One build output file with its measured sizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Original asset name (hashes intact)
    pub name: String,
    /// Uncompressed size in bytes
    pub parsed_size: u64,
    /// Gzip-compressed size in bytes
    pub gzip_size: u64,
}

impl AssetRecord {
    /// Create a record from a name and its two sizes
    pub fn new(name: impl Into<String>, parsed_size: u64, gzip_size: u64) -> Self {
        Self {
            name: name.into(),
            parsed_size,
            gzip_size,
        }
    }
}

/// Record shape emitted by bundle analyzers (webpack-bundle-analyzer and friends)
///
/// Any field may be missing or `null`; [`RawAssetRecord::into_record`] applies
/// the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAssetRecord {
    /// Emitted file name
    #[serde(default)]
    pub filename: Option<String>,
    /// Display label, used when `filename` is absent
    #[serde(default)]
    pub label: Option<String>,
    /// Uncompressed size in bytes
    #[serde(default)]
    pub parsed_size: Option<u64>,
    /// Gzip-compressed size in bytes
    #[serde(default)]
    pub gzip_size: Option<u64>,
}

impl RawAssetRecord {
    /// Resolve the name and size defaults into an [`AssetRecord`]
    pub fn into_record(self) -> AssetRecord {
        AssetRecord {
            name: self
                .filename
                .or(self.label)
                .unwrap_or_else(|| UNKNOWN_ASSET_NAME.to_string()),
            parsed_size: self.parsed_size.unwrap_or(0),
            gzip_size: self.gzip_size.unwrap_or(0),
        }
    }
}

impl From<RawAssetRecord> for AssetRecord {
    fn from(raw: RawAssetRecord) -> Self {
        raw.into_record()
    }
}
