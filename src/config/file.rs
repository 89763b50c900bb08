//! Configuration file data structures

use crate::compare::HashNormalizer;
use crate::error::BundleDeltaError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".bundle-delta.toml";

/// Title used when neither the config nor the CLI supplies one
pub const DEFAULT_TITLE: &str = "Bundle size";

/// bundle-delta configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Report title, also used for the deduplication marker
    #[serde(default = "default_title")]
    pub title: String,

    /// Where to write the markdown report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Custom asset name pattern with a named `hash` group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_pattern: Option<String>,

    /// Growth limits for the total parsed size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<GrowthBudget>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            title: default_title(),
            output: None,
            hash_pattern: None,
            budget: None,
        }
    }
}

impl ConfigFile {
    /// Normalizer for asset names, honoring `hash-pattern` when set
    pub fn normalizer(&self) -> Result<HashNormalizer, BundleDeltaError> {
        match self.hash_pattern.as_deref() {
            Some(pattern) => HashNormalizer::with_pattern(pattern),
            None => Ok(HashNormalizer::default()),
        }
    }
}

/// Growth budget configuration
///
/// Limits apply to the percentage growth of the total parsed size between the
/// base and current snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthBudget {
    /// Growth above this percentage prints a warning
    #[serde(rename = "warn-increase-percent", skip_serializing_if = "Option::is_none")]
    pub warn_increase_percent: Option<f64>,

    /// Growth above this percentage fails the run
    #[serde(rename = "max-increase-percent", skip_serializing_if = "Option::is_none")]
    pub max_increase_percent: Option<f64>,
}

impl GrowthBudget {
    /// True when no threshold is configured
    pub fn is_empty(&self) -> bool {
        self.warn_increase_percent.is_none() && self.max_increase_percent.is_none()
    }

    /// Validate that thresholds are non-negative numbers and properly ordered
    ///
    /// Ensures: 0 <= warn <= max
    pub fn validate(&self) -> Result<(), BundleDeltaError> {
        for (name, value) in [
            ("warn-increase-percent", self.warn_increase_percent),
            ("max-increase-percent", self.max_increase_percent),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(BundleDeltaError::InvalidBudget {
                        reason: format!("{} must be a non-negative number, got {}", name, v),
                    });
                }
            }
        }

        if let (Some(warn), Some(max)) = (self.warn_increase_percent, self.max_increase_percent) {
            if warn > max {
                return Err(BundleDeltaError::InvalidBudget {
                    reason: format!(
                        "warn-increase-percent ({}%) cannot exceed max-increase-percent ({}%)",
                        warn, max
                    ),
                });
            }
        }

        Ok(())
    }
}
