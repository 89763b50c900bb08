//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Proper exit codes for CI/CD
//!
//! # Examples
//!
//! ```no_run
//! use bundle_delta::snapshot::{SnapshotLoader, SnapshotRole};
//! use std::path::Path;
//!
//! match SnapshotLoader::load(Path::new("base.json"), SnapshotRole::Base) {
//!     Ok(records) => println!("{} assets", records.len()),
//!     Err(e) => {
//!         eprintln!("Load failed: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::snapshot::SnapshotRole;

/// bundle-delta errors with contextual suggestions
#[derive(Error, Debug)]
pub enum BundleDeltaError {
    /// Snapshot file does not exist
    #[error("{role} snapshot not found: {path}")]
    SnapshotNotFound {
        /// Path that was looked up
        path: PathBuf,
        /// Side of the comparison the file was meant for
        role: SnapshotRole,
    },

    /// Snapshot file exists but has the wrong shape
    #[error("Invalid snapshot {path}: {reason}")]
    InvalidSnapshot {
        /// Offending file
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// Custom asset name pattern could not be used
    #[error("Invalid hash pattern '{pattern}': {reason}")]
    InvalidHashPattern {
        /// Pattern as configured
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// Growth budget thresholds are inconsistent
    #[error("Invalid growth budget: {reason}")]
    InvalidBudget {
        /// Why the budget was rejected
        reason: String,
    },

    /// Total parsed size grew beyond the configured maximum
    #[error("Bundle grew by {percent:.2}%, exceeding the maximum of {max_percent:.2}%")]
    GrowthBudgetExceeded {
        /// Observed growth of total parsed size
        percent: f64,
        /// Configured maximum growth
        max_percent: f64,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl BundleDeltaError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_delta::error::BundleDeltaError;
    ///
    /// let error = BundleDeltaError::GrowthBudgetExceeded {
    ///     percent: 12.5,
    ///     max_percent: 10.0,
    /// };
    ///
    /// let suggestion = error.suggestion();
    /// assert!(suggestion.unwrap().contains("max-increase"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::SnapshotNotFound { role, .. } => Some(format!(
                "Generate the {} stats file first (e.g. webpack-bundle-analyzer --mode json)",
                role
            )),
            Self::InvalidSnapshot { .. } => Some(
                "Snapshots must be a JSON array of {\"label\", \"parsedSize\", \"gzipSize\"} objects"
                    .to_string(),
            ),
            Self::InvalidHashPattern { .. } => Some(
                "Use a valid regex with a named group, e.g. ^.*-(?P<hash>[a-f0-9]{8,})\\.\\w+$"
                    .to_string(),
            ),
            Self::InvalidBudget { .. } => Some(
                "Check [budget] in .bundle-delta.toml: warn-increase-percent must not exceed max-increase-percent"
                    .to_string(),
            ),
            Self::GrowthBudgetExceeded { .. } => Some(
                "Review the Bigger and Added sections of the report, or raise --max-increase"
                    .to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_delta::error::BundleDeltaError;
    ///
    /// let error = BundleDeltaError::InvalidBudget {
    ///     reason: "warn > max".to_string(),
    /// };
    /// assert_eq!(error.exit_code(), 64);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SnapshotNotFound { .. } => 66,     // EX_NOINPUT
            Self::InvalidSnapshot { .. } => 65,      // EX_DATAERR
            Self::InvalidHashPattern { .. } => 64,   // EX_USAGE
            Self::InvalidBudget { .. } => 64,        // EX_USAGE
            Self::GrowthBudgetExceeded { .. } => 1,  // CI should fail
            Self::Io { .. } => 74,                   // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = error
            .downcast_ref::<BundleDeltaError>()
            .and_then(BundleDeltaError::suggestion)
        {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        error
            .downcast_ref::<BundleDeltaError>()
            .map_or(1, BundleDeltaError::exit_code)
    }
}
