//! Growth budget enforcement for CI/CD
//!
//! Limits apply to the percentage growth of the total parsed size:
//! - Warning: Threshold for warnings (exit 0 with warning)
//! - Max: Hard limit (exit 1 if exceeded)

use crate::config::GrowthBudget;
use crate::fmt::{self, CHECKMARK, CROSSMARK, WARNING};
use crate::snapshot::SizeTotals;
use console::style;
use serde::Serialize;

/// Status of growth budget check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Growth at or below every threshold
    WithinBudget,
    /// Growth above the warning threshold but within max
    Warning,
    /// Growth above the max threshold
    OverBudget,
}

/// Result of budget check with detailed information
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetResult {
    /// Budget status
    pub status: BudgetStatus,
    /// Parsed size growth in percent, `None` when the base total was zero
    pub percent_change: Option<f64>,
    /// Warning threshold if set
    pub warn_increase_percent: Option<f64>,
    /// Maximum allowed growth if set
    pub max_increase_percent: Option<f64>,
    /// Human-readable message
    pub message: String,
}

impl BudgetResult {
    /// Get exit code for CI/CD (0 = pass, 1 = fail)
    pub fn exit_code(&self) -> i32 {
        match self.status {
            BudgetStatus::WithinBudget | BudgetStatus::Warning => 0,
            BudgetStatus::OverBudget => 1,
        }
    }

    /// Whether the run should pass
    pub fn passed(&self) -> bool {
        self.status != BudgetStatus::OverBudget
    }

    /// Print colored status message
    pub fn print(&self) {
        let change = self
            .percent_change
            .map(|pct| format!("{:+.2}%", pct))
            .unwrap_or_else(|| "n/a".to_string());

        let (icon, change) = match self.status {
            BudgetStatus::WithinBudget => (CHECKMARK, style(change).green()),
            BudgetStatus::Warning => (WARNING, style(change).yellow()),
            BudgetStatus::OverBudget => (CROSSMARK, style(change).red()),
        };

        println!("\n{} Growth Budget Check: {}", icon, change);
        println!("   {}", self.message);

        if let Some(warn) = self.warn_increase_percent {
            let warn_str = format!("Warning: {}%", warn);
            if self.status == BudgetStatus::Warning {
                println!("   {}", style(warn_str).yellow());
            } else {
                println!("   {}", style(warn_str).dim());
            }
        }

        if let Some(max) = self.max_increase_percent {
            if self.status == BudgetStatus::OverBudget {
                println!("   {}", style(format!("Max: {}% (EXCEEDED)", max)).red());
            } else {
                println!("   {}", style(format!("Max: {}%", max)).dim());
            }
        }
    }
}

/// Growth budget checker
pub struct BudgetChecker {
    budget: GrowthBudget,
}

impl BudgetChecker {
    /// Create a new budget checker
    pub fn new(budget: GrowthBudget) -> Self {
        Self { budget }
    }

    /// Determine budget status from the growth percentage
    ///
    /// Priority order: max > warn
    fn determine_status(&self, percent: f64) -> BudgetStatus {
        if let Some(max) = self.budget.max_increase_percent {
            if percent > max {
                return BudgetStatus::OverBudget;
            }
        }

        if let Some(warn) = self.budget.warn_increase_percent {
            if percent > warn {
                return BudgetStatus::Warning;
            }
        }

        BudgetStatus::WithinBudget
    }

    /// Check the growth from `base` to `current` against the budget
    ///
    /// A zero base total has no meaningful growth percentage and always passes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_delta::cicd::{BudgetChecker, budget::BudgetStatus};
    /// use bundle_delta::config::GrowthBudget;
    /// use bundle_delta::snapshot::SizeTotals;
    ///
    /// let budget = GrowthBudget {
    ///     warn_increase_percent: Some(5.0),
    ///     max_increase_percent: Some(10.0),
    /// };
    /// let base = SizeTotals { parsed: 1000, gzip: 400 };
    /// let current = SizeTotals { parsed: 1070, gzip: 420 };
    ///
    /// let result = BudgetChecker::new(budget).check(&base, &current);
    /// assert_eq!(result.status, BudgetStatus::Warning);
    /// ```
    pub fn check(&self, base: &SizeTotals, current: &SizeTotals) -> BudgetResult {
        let percent_change = fmt::percent_change(base.parsed, current.parsed);

        let (status, message) = match percent_change {
            None => (
                BudgetStatus::WithinBudget,
                "No base size to compare against".to_string(),
            ),
            Some(pct) => {
                let status = self.determine_status(pct);
                let message = match status {
                    BudgetStatus::WithinBudget if pct < 0.0 => {
                        format!("Bundle shrank by {:.2}%", -pct)
                    }
                    BudgetStatus::WithinBudget => format!("Growth of {:.2}% is within budget", pct),
                    BudgetStatus::Warning => format!(
                        "Warning: grew by {:.2}%, above the {}% threshold",
                        pct,
                        self.budget.warn_increase_percent.unwrap_or_default()
                    ),
                    BudgetStatus::OverBudget => format!(
                        "FAILED: grew by {:.2}%, above the {}% maximum",
                        pct,
                        self.budget.max_increase_percent.unwrap_or_default()
                    ),
                };
                (status, message)
            }
        };

        BudgetResult {
            status,
            percent_change,
            warn_increase_percent: self.budget.warn_increase_percent,
            max_increase_percent: self.budget.max_increase_percent,
            message,
        }
    }
}
