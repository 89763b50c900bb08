//! CI/CD integration module
//!
//! Provides:
//! - Growth budget enforcement with configurable thresholds
//! - JSON output for CI/CD tool integration
//! - Console summaries and exit codes for automated workflows

pub mod budget;
pub mod display;
pub mod output;

pub use budget::BudgetChecker;
pub use output::JsonOutput;
