//! Markdown rendering of a comparison

use crate::compare::{AssetChange, ComparisonResult};
use crate::fmt::{format_delta, format_percent, format_size, size_delta};
use crate::snapshot::{AssetRecord, SizeTotals};
use std::fmt::Write;

/// Hidden marker identifying the report for `title`
///
/// CI steps search for this line to replace an earlier report for the same
/// title instead of posting a second one. Line breaks and `-->` in the title
/// are neutralized so the marker stays a single HTML comment.
///
/// # Examples
///
/// ```
/// use bundle_delta::report::report_marker;
///
/// assert_eq!(report_marker("web"), "<!-- bundle-delta: web -->");
/// assert_eq!(report_marker("a-->b\nc"), "<!-- bundle-delta: a->b c -->");
/// ```
pub fn report_marker(title: &str) -> String {
    format!("<!-- bundle-delta: {} -->", clean_title(title))
}

/// Title reduced to one line without a comment terminator
fn clean_title(title: &str) -> String {
    let mut clean = title.replace(['\r', '\n'], " ");
    while clean.contains("-->") {
        clean = clean.replace("-->", "->");
    }
    clean
}

/// Asset name as an inline code span that cannot break a table row
fn cell_name(name: &str) -> String {
    format!("`{}`", name.replace(['\r', '\n'], " ").replace('|', "\\|"))
}

/// Markdown report over a comparison and the two snapshots it came from
pub struct MarkdownReport<'a> {
    title: &'a str,
    base: &'a [AssetRecord],
    current: &'a [AssetRecord],
    result: &'a ComparisonResult,
}

impl<'a> MarkdownReport<'a> {
    /// Create a report renderer
    pub fn new(
        title: &'a str,
        base: &'a [AssetRecord],
        current: &'a [AssetRecord],
        result: &'a ComparisonResult,
    ) -> Self {
        Self {
            title,
            base,
            current,
            result,
        }
    }

    /// Render the complete report document
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&report_marker(self.title));
        out.push('\n');
        let _ = writeln!(out, "## Bundle size report: {}\n", clean_title(self.title));

        self.render_summary(&mut out);

        if self.result.is_empty() {
            out.push_str("\nNo asset size changes.\n");
            return out;
        }

        if !self.result.bigger.is_empty() {
            render_changes(&mut out, "Bigger", &self.result.bigger);
        }
        if !self.result.smaller.is_empty() {
            render_changes(&mut out, "Smaller", &self.result.smaller);
        }
        if !self.result.added.is_empty() {
            section_header(&mut out, "Added", self.result.added.len());
            for added in &self.result.added {
                let next = &added.next;
                let _ = writeln!(
                    out,
                    "| {} | - | {} | {} | new | {} |",
                    cell_name(&next.name),
                    format_size(next.parsed_size),
                    format_delta(size_delta(0, next.parsed_size)),
                    format_delta(size_delta(0, next.gzip_size))
                );
            }
        }
        if !self.result.removed.is_empty() {
            section_header(&mut out, "Removed", self.result.removed.len());
            for removed in &self.result.removed {
                let previous = &removed.previous;
                let _ = writeln!(
                    out,
                    "| {} | {} | - | {} | -100.00% | {} |",
                    cell_name(&previous.name),
                    format_size(previous.parsed_size),
                    format_delta(size_delta(previous.parsed_size, 0)),
                    format_delta(size_delta(previous.gzip_size, 0))
                );
            }
        }

        out
    }

    fn render_summary(&self, out: &mut String) {
        let base = SizeTotals::of(self.base);
        let current = SizeTotals::of(self.current);

        out.push_str("| | Base | Current | Change | % |\n");
        out.push_str("|---|---:|---:|---:|---:|\n");
        let _ = writeln!(
            out,
            "| Assets | {} | {} | {} | |",
            self.base.len(),
            self.current.len(),
            format_count_delta(self.current.len() as i64 - self.base.len() as i64)
        );
        summary_row(out, "Parsed size", base.parsed, current.parsed);
        summary_row(out, "Gzip size", base.gzip, current.gzip);
    }
}

fn summary_row(out: &mut String, label: &str, base: u64, current: u64) {
    let _ = writeln!(
        out,
        "| {} | {} | {} | {} | {} |",
        label,
        format_size(base),
        format_size(current),
        format_delta(size_delta(base, current)),
        format_percent(base, current)
    );
}

fn format_count_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}

fn section_header(out: &mut String, heading: &str, count: usize) {
    let _ = writeln!(out, "\n### {} ({})\n", heading, count);
    out.push_str("| Asset | Base | Current | Change | % | Gzip change |\n");
    out.push_str("|---|---:|---:|---:|---:|---:|\n");
}

fn render_changes(out: &mut String, heading: &str, changes: &[AssetChange]) {
    section_header(out, heading, changes.len());
    for change in changes {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} |",
            display_name(change),
            format_size(change.previous.parsed_size),
            format_size(change.next.parsed_size),
            format_delta(change.parsed_delta),
            format_percent(change.previous.parsed_size, change.next.parsed_size),
            format_delta(change.gzip_delta)
        );
    }
}

fn display_name(change: &AssetChange) -> String {
    if change.previous.name == change.next.name {
        cell_name(&change.next.name)
    } else {
        format!(
            "{} → {}",
            cell_name(&change.previous.name),
            cell_name(&change.next.name)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;

    fn render(title: &str, base: &[AssetRecord], current: &[AssetRecord]) -> String {
        let result = compare(base, current);
        MarkdownReport::new(title, base, current, &result).render()
    }

    #[test]
    fn test_report_starts_with_marker_and_heading() {
        let report = render("web", &[], &[]);
        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("<!-- bundle-delta: web -->"));
        assert_eq!(lines.next(), Some("## Bundle size report: web"));
    }

    #[test]
    fn test_unchanged_snapshots_say_so() {
        let snapshot = vec![AssetRecord::new("same.js", 300, 100)];
        let report = render("web", &snapshot, &snapshot);
        assert!(report.contains("No asset size changes."));
        assert!(!report.contains("### "));
        assert!(report.contains("| Parsed size | 300 B | 300 B | 0 B | 0.00% |"));
    }

    #[test]
    fn test_grown_asset_row_shows_both_names_and_percent() {
        let base = vec![AssetRecord::new("app-abc12345.js", 1000, 400)];
        let current = vec![AssetRecord::new("app-xyz98765.js", 1200, 450)];

        let report = render("web", &base, &current);

        assert!(report.contains("### Bigger (1)"));
        assert!(report.contains(
            "| `app-abc12345.js` → `app-xyz98765.js` | 1000 B | 1.17 KB | +200 B | +20.00% | +50 B |"
        ));
        assert!(report.contains("| Assets | 1 | 1 | 0 | |"));
    }

    #[test]
    fn test_same_name_is_shown_once() {
        let base = vec![AssetRecord::new("main.js", 4096, 1024)];
        let current = vec![AssetRecord::new("main.js", 2048, 1000)];

        let report = render("web", &base, &current);

        assert!(report.contains("### Smaller (1)"));
        assert!(report.contains("| `main.js` | 4 KB | 2 KB | -2 KB | -50.00% | -24 B |"));
    }

    #[test]
    fn test_added_and_removed_rows_use_sentinels() {
        let base = vec![AssetRecord::new("old.js", 500, 200)];
        let current = vec![AssetRecord::new("new.js", 500, 200)];

        let report = render("web", &base, &current);

        assert!(report.contains("### Added (1)"));
        assert!(report.contains("| `new.js` | - | 500 B | +500 B | new | +200 B |"));
        assert!(report.contains("### Removed (1)"));
        assert!(report.contains("| `old.js` | 500 B | - | -500 B | -100.00% | -200 B |"));
    }

    #[test]
    fn test_summary_uses_new_sentinel_for_empty_base() {
        let current = vec![AssetRecord::new("new.js", 1_048_576, 1024)];
        let report = render("web", &[], &current);
        assert!(report.contains("| Parsed size | 0 B | 1 MB | +1 MB | new |"));
        assert!(report.contains("| Assets | 0 | 1 | +1 | |"));
    }

    #[test]
    fn test_pipes_in_names_do_not_split_rows() {
        let base = vec![AssetRecord::new("a|b.js", 100, 10)];
        let current = vec![
            AssetRecord::new("a|b.js", 200, 10),
            AssetRecord::new("new|line\n.js", 50, 5),
        ];

        let report = render("web", &base, &current);

        assert!(report.contains("| `a\\|b.js` | 100 B | 200 B | +100 B | +100.00% | 0 B |"));
        assert!(report.contains("| `new\\|line .js` | - | 50 B | +50 B | new | +5 B |"));
    }

    #[test]
    fn test_title_cannot_close_marker_or_add_lines() {
        let report = render("evil -->\n## injected", &[], &[]);
        let mut lines = report.lines();

        assert_eq!(lines.next(), Some("<!-- bundle-delta: evil -> ## injected -->"));
        assert_eq!(lines.next(), Some("## Bundle size report: evil -> ## injected"));
        assert_eq!(report.matches("-->").count(), 1);
    }

    #[test]
    fn test_sizes_above_i64_max_render_unsigned() {
        let base = vec![AssetRecord::new("huge.js", u64::MAX, 0)];
        let current = vec![AssetRecord::new("huge.js", 0, 0)];

        let report = render("web", &base, &current);

        assert!(report.contains("### Smaller (1)"));
        assert!(report.contains("| `huge.js` | 17179869184 GB | 0 B | -8589934592 GB | -100.00% | 0 B |"));
        assert!(report.contains("| Parsed size | 17179869184 GB | 0 B | -8589934592 GB | -100.00% |"));
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let base = vec![
            AssetRecord::new("grow.js", 100, 10),
            AssetRecord::new("shrink.js", 100, 10),
            AssetRecord::new("gone.js", 100, 10),
        ];
        let current = vec![
            AssetRecord::new("grow.js", 200, 10),
            AssetRecord::new("shrink.js", 50, 10),
            AssetRecord::new("fresh.js", 100, 10),
        ];

        let report = render("web", &base, &current);
        let positions: Vec<usize> = ["### Bigger", "### Smaller", "### Added", "### Removed"]
            .iter()
            .map(|h| report.find(h).expect("section should be present"))
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
