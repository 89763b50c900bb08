//! Compare command implementation
//!
//! Handles the `bundle-delta compare` command which compares two bundle
//! snapshots and renders the size report for CI.

use anyhow::{Context, Result};
use console::style;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::cicd::budget::{BudgetResult, BudgetStatus};
use crate::cicd::display::print_summary;
use crate::cicd::{BudgetChecker, JsonOutput};
use crate::compare::{compare_with, ComparisonResult};
use crate::config::{ConfigFile, ConfigLoader, GrowthBudget};
use crate::error::BundleDeltaError;
use crate::fmt::MEMO;
use crate::infra::{FileSystem, RealFileSystem};
use crate::report::MarkdownReport;
use crate::snapshot::{SizeTotals, SnapshotLoader, SnapshotRole};

/// Options for the compare command, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Base (reference) snapshot
    pub base: PathBuf,
    /// Current (candidate) snapshot
    pub current: PathBuf,
    /// Report title, overrides the config file
    pub title: Option<String>,
    /// Markdown output file, overrides the config file
    pub output: Option<PathBuf>,
    /// Print machine-readable JSON instead of the console summary
    pub json: bool,
    /// Explicit config file instead of `.bundle-delta.toml`
    pub config: Option<PathBuf>,
    /// Maximum growth in percent, overrides the config file
    pub max_increase: Option<f64>,
}

/// Everything the compare command produced before any output is written
#[derive(Debug)]
pub struct CompareReport {
    /// Report title
    pub title: String,
    /// Where the markdown should be written, if anywhere
    pub output: Option<PathBuf>,
    /// Base snapshot totals
    pub base_totals: SizeTotals,
    /// Current snapshot totals
    pub current_totals: SizeTotals,
    /// Classified differences
    pub result: ComparisonResult,
    /// Rendered markdown report
    pub markdown: String,
    /// Growth budget outcome when a budget is configured
    pub budget: Option<BudgetResult>,
}

/// Compare two bundle snapshots and report the differences
///
/// # Examples
///
/// ```no_run
/// use bundle_delta::cmd::compare::{cmd_compare, CompareOptions};
///
/// cmd_compare(&CompareOptions {
///     base: "stats/base.json".into(),
///     current: "stats/current.json".into(),
///     output: Some("bundle-report.md".into()),
///     ..CompareOptions::default()
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - Either snapshot is missing or malformed
/// - The config file or hash pattern is invalid
/// - The report cannot be written
/// - Total parsed size grew beyond the maximum allowed increase
pub fn cmd_compare(options: &CompareOptions) -> Result<()> {
    let fs = RealFileSystem;
    let report = build_report(options, Path::new("."), &fs)?;

    if let Some(ref output) = report.output {
        write_report(&fs, output, &report.markdown)?;
        if !options.json {
            print_summary(
                &report.title,
                &report.base_totals,
                &report.current_totals,
                &report.result,
            );
            println!(
                "\n{} Report written to {}",
                MEMO,
                style(output.display()).cyan()
            );
            if let Some(ref budget) = report.budget {
                budget.print();
            }
        }
    } else if !options.json {
        print!("{}", report.markdown);
    }

    if options.json {
        let mut json = JsonOutput::new(
            &report.title,
            report.base_totals,
            report.current_totals,
            &report.result,
        );
        if let Some(ref budget) = report.budget {
            json = json.with_budget(budget);
        }
        json.print();
    }

    enforce_budget(report.budget.as_ref())
}

/// Load config and snapshots, run the comparison and render the report
///
/// `project_root` is where `.bundle-delta.toml` is looked up when no explicit
/// config file is given.
pub fn build_report<FS: FileSystem>(
    options: &CompareOptions,
    project_root: &Path,
    fs: &FS,
) -> Result<CompareReport> {
    let config = match options.config {
        Some(ref path) => ConfigLoader::load_file_with_fs(path, fs)?,
        None => ConfigLoader::load_with_fs(project_root, fs)?,
    };
    let normalizer = config.normalizer()?;

    let base = SnapshotLoader::load_with_fs(&options.base, SnapshotRole::Base, fs)?;
    let current = SnapshotLoader::load_with_fs(&options.current, SnapshotRole::Current, fs)?;

    let result = compare_with(&base, &current, &normalizer);
    info!(
        "{} bigger, {} smaller, {} added, {} removed",
        result.bigger.len(),
        result.smaller.len(),
        result.added.len(),
        result.removed.len()
    );

    let title = options.title.clone().unwrap_or_else(|| config.title.clone());
    let markdown = MarkdownReport::new(&title, &base, &current, &result).render();

    let base_totals = SizeTotals::of(&base);
    let current_totals = SizeTotals::of(&current);
    let budget = resolve_budget(&config, options.max_increase)?
        .map(|budget| BudgetChecker::new(budget).check(&base_totals, &current_totals));

    Ok(CompareReport {
        title,
        output: options.output.clone().or(config.output),
        base_totals,
        current_totals,
        result,
        markdown,
        budget,
    })
}

/// Merge the configured budget with the `--max-increase` override
fn resolve_budget(config: &ConfigFile, max_increase: Option<f64>) -> Result<Option<GrowthBudget>> {
    let mut budget = config.budget.unwrap_or_default();
    if max_increase.is_some() {
        budget.max_increase_percent = max_increase;
    }

    if budget.is_empty() {
        return Ok(None);
    }

    budget.validate()?;
    debug!("Using growth budget: {:?}", budget);
    Ok(Some(budget))
}

fn write_report<FS: FileSystem>(fs: &FS, output: &Path, markdown: &str) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs.write(output, markdown).map_err(|source| BundleDeltaError::Io {
        context: format!("writing report to {}", output.display()),
        source,
    })?;
    info!("Wrote report to {}", output.display());
    Ok(())
}

fn enforce_budget(budget: Option<&BudgetResult>) -> Result<()> {
    match budget {
        Some(result) if result.status == BudgetStatus::OverBudget => {
            Err(BundleDeltaError::GrowthBudgetExceeded {
                percent: result.percent_change.unwrap_or_default(),
                max_percent: result.max_increase_percent.unwrap_or_default(),
            }
            .into())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use crate::error::ErrorFormatter;
    use std::fs;
    use tempfile::TempDir;

    fn write_snapshot(dir: &Path, name: &str, json: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, json).unwrap();
        path
    }

    fn setup(base: &str, current: &str) -> (TempDir, CompareOptions) {
        let temp_dir = TempDir::new().unwrap();
        let options = CompareOptions {
            base: write_snapshot(temp_dir.path(), "base.json", base),
            current: write_snapshot(temp_dir.path(), "current.json", current),
            ..CompareOptions::default()
        };
        (temp_dir, options)
    }

    const BASE: &str = r#"[{"filename": "app-abc12345.js", "parsedSize": 1000, "gzipSize": 400}]"#;
    const GROWN: &str = r#"[{"filename": "app-xyz98765.js", "parsedSize": 1200, "gzipSize": 450}]"#;

    #[test]
    fn test_build_report_pairs_renamed_assets() {
        let (temp_dir, options) = setup(BASE, GROWN);

        let report = build_report(&options, temp_dir.path(), &RealFileSystem).unwrap();

        assert_eq!(report.title, "Bundle size");
        assert_eq!(report.result.bigger.len(), 1);
        assert_eq!(report.result.bigger[0].parsed_delta, 200);
        assert!(report.markdown.contains("<!-- bundle-delta: Bundle size -->"));
        assert!(report.budget.is_none());
        assert!(report.output.is_none());
    }

    #[test]
    fn test_build_report_uses_config_file_values() {
        let (temp_dir, options) = setup(BASE, GROWN);
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "title = \"storefront\"\noutput = \"out/report.md\"\n\n[budget]\nwarn-increase-percent = 10.0\n",
        )
        .unwrap();

        let report = build_report(&options, temp_dir.path(), &RealFileSystem).unwrap();

        assert_eq!(report.title, "storefront");
        assert_eq!(report.output, Some(PathBuf::from("out/report.md")));
        let budget = report.budget.unwrap();
        assert_eq!(budget.status, BudgetStatus::Warning);
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let (temp_dir, mut options) = setup(BASE, GROWN);
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "title = \"storefront\"\n\n[budget]\nmax-increase-percent = 50.0\n",
        )
        .unwrap();
        options.title = Some("admin".to_string());
        options.max_increase = Some(5.0);

        let report = build_report(&options, temp_dir.path(), &RealFileSystem).unwrap();

        assert_eq!(report.title, "admin");
        assert_eq!(report.budget.unwrap().status, BudgetStatus::OverBudget);
    }

    #[test]
    fn test_explicit_config_path_must_exist() {
        let (temp_dir, mut options) = setup(BASE, GROWN);
        options.config = Some(temp_dir.path().join("missing.toml"));

        let result = build_report(&options, temp_dir.path(), &RealFileSystem);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_hash_pattern_from_config() {
        let (temp_dir, options) = setup(
            r#"[{"filename": "main.1a2b3c4d.js", "parsedSize": 100, "gzipSize": 40}]"#,
            r#"[{"filename": "main.9f8e7d6c.js", "parsedSize": 150, "gzipSize": 50}]"#,
        );
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "hash-pattern = '^.*\\.(?P<hash>[0-9a-f]{8})\\.js$'\n",
        )
        .unwrap();

        let report = build_report(&options, temp_dir.path(), &RealFileSystem).unwrap();

        assert_eq!(report.result.bigger.len(), 1);
        assert_eq!(report.result.bigger[0].key, "main.[hash].js");
    }

    #[test]
    fn test_invalid_hash_pattern_exits_with_usage_code() {
        let (temp_dir, options) = setup(BASE, GROWN);
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "hash-pattern = '^app\\.js$'\n").unwrap();

        let err = build_report(&options, temp_dir.path(), &RealFileSystem).unwrap_err();
        assert_eq!(ErrorFormatter::exit_code(&err), 64);
    }

    #[test]
    fn test_missing_base_snapshot_is_reported() {
        let (temp_dir, mut options) = setup(BASE, GROWN);
        options.base = temp_dir.path().join("nonexistent.json");

        let err = build_report(&options, temp_dir.path(), &RealFileSystem).unwrap_err();
        assert!(err.to_string().contains("base snapshot not found"));
        assert_eq!(ErrorFormatter::exit_code(&err), 66);
    }

    #[test]
    fn test_max_increase_override_is_validated() {
        let (temp_dir, mut options) = setup(BASE, GROWN);
        options.max_increase = Some(-3.0);

        let err = build_report(&options, temp_dir.path(), &RealFileSystem).unwrap_err();
        assert_eq!(ErrorFormatter::exit_code(&err), 64);
    }

    #[test]
    fn test_cmd_compare_writes_report_then_fails_budget() {
        let (temp_dir, mut options) = setup(BASE, GROWN);
        let output = temp_dir.path().join("nested/dir/report.md");
        options.output = Some(output.clone());
        options.max_increase = Some(10.0);

        let err = cmd_compare(&options).unwrap_err();

        assert_eq!(ErrorFormatter::exit_code(&err), 1);
        assert!(err.to_string().contains("20.00%"));
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("### Bigger (1)"));
    }

    #[test]
    fn test_cmd_compare_within_budget_succeeds() {
        let (temp_dir, mut options) = setup(BASE, GROWN);
        options.output = Some(temp_dir.path().join("report.md"));
        options.max_increase = Some(25.0);

        assert!(cmd_compare(&options).is_ok());
    }

    #[test]
    fn test_enforce_budget_only_fails_over_budget() {
        assert!(enforce_budget(None).is_ok());

        let checker = BudgetChecker::new(GrowthBudget {
            warn_increase_percent: Some(1.0),
            max_increase_percent: Some(2.0),
        });
        let base = SizeTotals { parsed: 100, gzip: 0 };
        let warning = checker.check(&base, &SizeTotals { parsed: 101, gzip: 0 });
        let over = checker.check(&base, &SizeTotals { parsed: 200, gzip: 0 });

        assert!(enforce_budget(Some(&warning)).is_ok());
        assert!(enforce_budget(Some(&over)).is_err());
    }
}
