#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bundle-delta library
//!
//! This library compares two bundle snapshots (lists of emitted assets with
//! their parsed and gzip sizes) and produces a report of what changed. It can
//! be used programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Comparing two builds where the hashed bundle grew:
//!
//! ```
//! use bundle_delta::compare::compare;
//! use bundle_delta::snapshot::AssetRecord;
//!
//! let base = vec![AssetRecord::new("app-abc12345.js", 1000, 400)];
//! let current = vec![AssetRecord::new("app-xyz98765.js", 1200, 450)];
//!
//! let result = compare(&base, &current);
//! assert_eq!(result.bigger.len(), 1);
//! assert_eq!(result.bigger[0].key, "app-[hash].js");
//! assert_eq!(result.bigger[0].parsed_delta, 200);
//! assert!(result.added.is_empty() && result.removed.is_empty());
//! ```
//!
//! # Advanced Example: Report and Growth Budget
//!
//! Rendering the markdown report and checking total growth:
//!
//! ```
//! use bundle_delta::cicd::{budget::BudgetStatus, BudgetChecker};
//! use bundle_delta::compare::compare;
//! use bundle_delta::config::GrowthBudget;
//! use bundle_delta::report::MarkdownReport;
//! use bundle_delta::snapshot::{AssetRecord, SizeTotals};
//!
//! let base = vec![AssetRecord::new("vendor.js", 10_000, 3_000)];
//! let current = vec![
//!     AssetRecord::new("vendor.js", 10_000, 3_000),
//!     AssetRecord::new("chart.js", 2_000, 700),
//! ];
//!
//! let result = compare(&base, &current);
//! let markdown = MarkdownReport::new("web", &base, &current, &result).render();
//! assert!(markdown.contains("### Added (1)"));
//!
//! let budget = GrowthBudget {
//!     warn_increase_percent: Some(5.0),
//!     max_increase_percent: Some(15.0),
//! };
//! let check = BudgetChecker::new(budget).check(&SizeTotals::of(&base), &SizeTotals::of(&current));
//! assert_eq!(check.status, BudgetStatus::OverBudget);
//! ```

/// CI/CD integration tooling
pub mod cicd;
/// Command handlers for CLI operations
pub mod cmd;
/// Asset name normalization and the snapshot comparison engine
pub mod compare;
/// Configuration file loading and growth budgets
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Markdown report rendering
pub mod report;
/// Snapshot records, loading and totals
pub mod snapshot;
