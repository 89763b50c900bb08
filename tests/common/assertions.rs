//! Test assertion helpers
//!
//! Provides utilities for checking rendered reports without pinning the
//! whole document.

/// Assert that `needles` appear in `haystack` in the given order
#[allow(dead_code)]
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!(
                "Expected {:?} after byte {} in:\n{}",
                needle, from, haystack
            ),
        }
    }
}

/// Assert that a markdown report has its marker and heading for `title`
#[allow(dead_code)]
pub fn assert_report_header(report: &str, title: &str) {
    let mut lines = report.lines();
    assert_eq!(
        lines.next(),
        Some(format!("<!-- bundle-delta: {} -->", title).as_str()),
        "Report should start with its marker"
    );
    assert_eq!(
        lines.next(),
        Some(format!("## Bundle size report: {}", title).as_str()),
        "Report heading missing"
    );
}
