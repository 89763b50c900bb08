//! JSON output formatting for CI/CD integration

use crate::cicd::budget::{BudgetResult, BudgetStatus};
use crate::compare::ComparisonResult;
use crate::snapshot::SizeTotals;
use serde::Serialize;

/// JSON output structure for CI/CD tools
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Report title
    pub title: &'a str,
    /// Snapshot totals
    pub totals: TotalsInfo,
    /// Classified asset differences
    pub result: &'a ComparisonResult,
    /// Budget check result (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetInfo>,
}

/// Totals of both snapshots
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TotalsInfo {
    /// Base snapshot totals
    pub base: SizeTotals,
    /// Current snapshot totals
    pub current: SizeTotals,
}

/// Budget check results for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct BudgetInfo {
    /// Budget status: "within_budget", "warning", "over_budget"
    pub status: BudgetStatus,
    /// Whether budget check passed (true if not over_budget)
    pub passed: bool,
    /// Parsed size growth in percent
    pub percent_change: Option<f64>,
    /// Human-readable message
    pub message: String,
}

impl BudgetInfo {
    /// Convert from BudgetResult
    pub fn from_result(result: &BudgetResult) -> Self {
        Self {
            status: result.status,
            passed: result.passed(),
            percent_change: result.percent_change,
            message: result.message.clone(),
        }
    }
}

impl<'a> JsonOutput<'a> {
    /// Create a new JSON output
    pub fn new(
        title: &'a str,
        base: SizeTotals,
        current: SizeTotals,
        result: &'a ComparisonResult,
    ) -> Self {
        Self {
            title,
            totals: TotalsInfo { base, current },
            result,
            budget: None,
        }
    }

    /// Add budget check result
    pub fn with_budget(mut self, result: &BudgetResult) -> Self {
        self.budget = Some(BudgetInfo::from_result(result));
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))
    }

    /// Print JSON to stdout
    pub fn print(&self) {
        match self.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error formatting JSON: {}", e),
        }
    }
}
