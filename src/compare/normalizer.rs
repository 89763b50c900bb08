//! Asset name normalization
//!
//! Bundlers embed content hashes in emitted file names (`app-3f9a1c2b.js`), so
//! the same logical asset gets a different name in every build. Normalizers
//! map a name to a canonical key with the hash replaced by a fixed marker.
//! Keys are only used for grouping; reports keep the original names.

use crate::error::BundleDeltaError;
use regex::Regex;
use std::sync::LazyLock;

/// Literal that replaces the hash segment in canonical keys
pub const HASH_PLACEHOLDER: &str = "[hash]";

/// Default hash pattern: the last hyphen followed by 8+ `[A-Za-z0-9_-]`
/// characters that sit directly before the final `.extension`
pub const DEFAULT_HASH_PATTERN: &str = r"^.*-(?P<hash>[A-Za-z0-9_-]{8,})\.\w+$";

static DEFAULT_NORMALIZER: LazyLock<HashNormalizer> = LazyLock::new(|| HashNormalizer {
    pattern: Regex::new(DEFAULT_HASH_PATTERN).expect("default hash pattern compiles"),
});

/// Maps raw asset names to canonical grouping keys
pub trait AssetNormalizer {
    /// Canonical key for `name`; must be a pure function of `name`
    fn normalize(&self, name: &str) -> String;
}

/// Regex-driven normalizer that replaces a named `hash` capture group
#[derive(Debug, Clone)]
pub struct HashNormalizer {
    pattern: Regex,
}

impl HashNormalizer {
    /// Build a normalizer from a custom pattern
    ///
    /// The pattern must contain a named group `hash`. On a match, the span of
    /// that group is replaced by [`HASH_PLACEHOLDER`]; names that don't match
    /// are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_delta::compare::{AssetNormalizer, HashNormalizer};
    ///
    /// // Dot-separated hashes: main.1a2b3c4d.js
    /// let normalizer = HashNormalizer::with_pattern(r"^.*\.(?P<hash>[0-9a-f]{8,})\.\w+$")?;
    /// assert_eq!(normalizer.normalize("main.1a2b3c4d.js"), "main.[hash].js");
    /// # Ok::<(), bundle_delta::error::BundleDeltaError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BundleDeltaError::InvalidHashPattern`] if the regex does not
    /// compile or has no `hash` group.
    pub fn with_pattern(pattern: &str) -> Result<Self, BundleDeltaError> {
        let regex = Regex::new(pattern).map_err(|e| BundleDeltaError::InvalidHashPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        if !regex.capture_names().any(|name| name == Some("hash")) {
            return Err(BundleDeltaError::InvalidHashPattern {
                pattern: pattern.to_string(),
                reason: "missing named group `hash`".to_string(),
            });
        }

        Ok(Self { pattern: regex })
    }

    /// Pattern source this normalizer was built from
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for HashNormalizer {
    fn default() -> Self {
        DEFAULT_NORMALIZER.clone()
    }
}

impl AssetNormalizer for HashNormalizer {
    fn normalize(&self, name: &str) -> String {
        match self
            .pattern
            .captures(name)
            .and_then(|caps| caps.name("hash"))
        {
            Some(hash) => format!(
                "{}{}{}",
                &name[..hash.start()],
                HASH_PLACEHOLDER,
                &name[hash.end()..]
            ),
            None => name.to_string(),
        }
    }
}

/// Normalize `name` with the default hash pattern
///
/// # Examples
///
/// ```
/// use bundle_delta::compare::normalize;
///
/// assert_eq!(normalize("app-abc12345.js"), "app-[hash].js");
/// assert_eq!(normalize("styles.css"), "styles.css");
/// ```
pub fn normalize(name: &str) -> String {
    DEFAULT_NORMALIZER.normalize(name)
}
