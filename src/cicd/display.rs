//! Console display for comparison results

use crate::compare::ComparisonResult;
use crate::fmt::{
    format_delta, format_percent, format_size, size_delta, CHART, SPARKLES, WARNING,
};
use crate::snapshot::SizeTotals;
use console::style;

/// Print a short summary of a comparison to the console
pub fn print_summary(
    title: &str,
    base: &SizeTotals,
    current: &SizeTotals,
    result: &ComparisonResult,
) {
    println!("\n{} {}", CHART, style(title).bold());

    let delta = size_delta(base.parsed, current.parsed);
    let change = format!(
        "{} ({})",
        format_delta(delta),
        format_percent(base.parsed, current.parsed)
    );
    let change = if delta > 0 {
        style(change).red()
    } else if delta < 0 {
        style(change).green()
    } else {
        style(change).dim()
    };

    println!("   Base:    {}", format_size(base.parsed));
    println!("   Current: {} {}", format_size(current.parsed), change);
    println!(
        "   Gzip:    {} -> {}",
        format_size(base.gzip),
        format_size(current.gzip)
    );

    if result.is_empty() {
        println!("   {}", style("No asset size changes").dim());
        return;
    }

    println!(
        "   {} bigger, {} smaller, {} added, {} removed",
        result.bigger.len(),
        result.smaller.len(),
        result.added.len(),
        result.removed.len()
    );

    if let Some(top) = result.bigger.first() {
        println!(
            "   {} Largest growth: {} ({})",
            WARNING,
            top.next.name,
            style(format_delta(top.parsed_delta)).red()
        );
    }
    if let Some(top) = result.smaller.first() {
        println!(
            "   {} Largest reduction: {} ({})",
            SPARKLES,
            top.next.name,
            style(format_delta(top.parsed_delta)).green()
        );
    }
}
