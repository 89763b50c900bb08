//! Report rendering
//!
//! Turns a [`ComparisonResult`](crate::compare::ComparisonResult) plus the two
//! raw snapshots into a markdown document suitable for a pull request comment
//! or a CI job summary.

mod markdown;

pub use markdown::{report_marker, MarkdownReport};
