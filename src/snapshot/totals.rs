//! Snapshot-wide size totals

use super::record::AssetRecord;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Summed sizes across every record of a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeTotals {
    /// Sum of parsed sizes in bytes
    pub parsed: u64,
    /// Sum of gzip sizes in bytes
    pub gzip: u64,
}

impl SizeTotals {
    /// Sum the parsed and gzip sizes of `records` independently
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_delta::snapshot::{AssetRecord, SizeTotals};
    ///
    /// let records = vec![
    ///     AssetRecord::new("a.js", 100, 40),
    ///     AssetRecord::new("b.js", 50, 20),
    /// ];
    /// let totals = SizeTotals::of(&records);
    /// assert_eq!(totals.parsed, 150);
    /// assert_eq!(totals.gzip, 60);
    /// assert_eq!(SizeTotals::of(&[]), SizeTotals::default());
    /// ```
    ///
    /// Sums saturate at `u64::MAX` rather than overflowing.
    pub fn of(records: &[AssetRecord]) -> Self {
        records.iter().fold(Self::default(), |acc, record| Self {
            parsed: acc.parsed.saturating_add(record.parsed_size),
            gzip: acc.gzip.saturating_add(record.gzip_size),
        })
    }
}

impl Add for SizeTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            parsed: self.parsed.saturating_add(rhs.parsed),
            gzip: self.gzip.saturating_add(rhs.gzip),
        }
    }
}

/// Shorthand for [`SizeTotals::of`]
pub fn totals(records: &[AssetRecord]) -> SizeTotals {
    SizeTotals::of(records)
}
