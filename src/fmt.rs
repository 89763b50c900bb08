//! Shared formatting utilities for size display and console output
//!
//! The byte, delta and percentage helpers define the exact text that ends up
//! in reports, so every renderer goes through them.

use console::Emoji;

/// Chart emoji for report headings
pub const CHART: Emoji = Emoji("📊", "~");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Sparkles emoji for size improvements
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Memo emoji for written reports
pub const MEMO: Emoji = Emoji("📝", ">");

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a (possibly negative) byte count as a human-readable size
///
/// Magnitudes under 1024 print as whole bytes; larger values scale through
/// KB, MB and GB with two decimals, dropping a trailing `.00`.
///
/// # Examples
///
/// ```
/// use bundle_delta::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// assert_eq!(format_bytes(1_048_576), "1 MB");
/// assert_eq!(format_bytes(-2048), "-2 KB");
/// ```
pub fn format_bytes(bytes: i64) -> String {
    format_magnitude(bytes < 0, bytes.unsigned_abs())
}

/// Format an unsigned byte count, covering the full `u64` range
///
/// # Examples
///
/// ```
/// use bundle_delta::fmt::format_size;
///
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(u64::MAX), "17179869184 GB");
/// ```
pub fn format_size(bytes: u64) -> String {
    format_magnitude(false, bytes)
}

fn format_magnitude(negative: bool, magnitude: u64) -> String {
    let sign = if negative { "-" } else { "" };
    if magnitude < 1024 {
        return format!("{}{} B", sign, magnitude);
    }

    let mut value = magnitude as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let number = format!("{:.2}", value);
    let number = number.strip_suffix(".00").unwrap_or(&number);
    format!("{}{} {}", sign, number, UNITS[unit])
}

/// Format a byte delta with an explicit `+` for growth
///
/// # Examples
///
/// ```
/// use bundle_delta::fmt::format_delta;
///
/// assert_eq!(format_delta(0), "0 B");
/// assert_eq!(format_delta(200), "+200 B");
/// assert_eq!(format_delta(-2048), "-2 KB");
/// ```
pub fn format_delta(delta: i64) -> String {
    match delta {
        0 => "0 B".to_string(),
        d if d > 0 => format!("+{}", format_bytes(d)),
        d => format_bytes(d),
    }
}

/// Format the percentage change from `base` to `next`
///
/// A zero base has no ratio: it reads `0.00%` when the size stays zero and
/// `new` otherwise. A fully removed asset reads `-100.00%`.
///
/// # Examples
///
/// ```
/// use bundle_delta::fmt::format_percent;
///
/// assert_eq!(format_percent(1000, 1200), "+20.00%");
/// assert_eq!(format_percent(1000, 900), "-10.00%");
/// assert_eq!(format_percent(0, 500), "new");
/// assert_eq!(format_percent(0, 0), "0.00%");
/// assert_eq!(format_percent(500, 0), "-100.00%");
/// ```
pub fn format_percent(base: u64, next: u64) -> String {
    match percent_change(base, next) {
        None if next == 0 => "0.00%".to_string(),
        None => "new".to_string(),
        Some(pct) => {
            if pct > 0.0 {
                format!("+{:.2}%", pct)
            } else {
                format!("{:.2}%", pct)
            }
        }
    }
}

/// Signed byte change from `previous` to `next`, saturating at the `i64` range
///
/// # Examples
///
/// ```
/// use bundle_delta::fmt::size_delta;
///
/// assert_eq!(size_delta(1000, 1200), 200);
/// assert_eq!(size_delta(u64::MAX, 0), i64::MIN);
/// ```
pub fn size_delta(previous: u64, next: u64) -> i64 {
    let delta = i128::from(next) - i128::from(previous);
    i64::try_from(delta).unwrap_or(if delta < 0 { i64::MIN } else { i64::MAX })
}

/// Percentage change from `base` to `next`, `None` when `base` is zero
pub fn percent_change(base: u64, next: u64) -> Option<f64> {
    if base == 0 {
        return None;
    }
    Some((next as f64 - base as f64) / base as f64 * 100.0)
}
