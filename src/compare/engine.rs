//! Snapshot comparison engine
//!
//! Assets are grouped by canonical key. Within a group, base and current
//! records are each sorted by parsed size and paired by rank; whatever is left
//! over on the current side was added, on the base side removed. Rank pairing
//! has no notion of content identity: two unrelated assets that normalize to
//! the same key are paired all the same.

use super::normalizer::{AssetNormalizer, HashNormalizer};
use super::types::{AddedAsset, AssetChange, ComparisonResult, RemovedAsset};
use crate::snapshot::AssetRecord;
use log::debug;
use std::collections::HashMap;

/// Base and current records sharing one canonical key
#[derive(Debug, Default)]
struct AssetGroup<'a> {
    key: String,
    base: Vec<&'a AssetRecord>,
    current: Vec<&'a AssetRecord>,
}

/// Groups in order of first appearance, base records first
fn group_assets<'a, N: AssetNormalizer + ?Sized>(
    base: &'a [AssetRecord],
    current: &'a [AssetRecord],
    normalizer: &N,
) -> Vec<AssetGroup<'a>> {
    let mut groups: Vec<AssetGroup<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let mut slot = |key: String, groups: &mut Vec<AssetGroup<'a>>| -> usize {
        *index.entry(key.clone()).or_insert_with(|| {
            groups.push(AssetGroup {
                key,
                ..Default::default()
            });
            groups.len() - 1
        })
    };

    for record in base {
        let i = slot(normalizer.normalize(&record.name), &mut groups);
        groups[i].base.push(record);
    }
    for record in current {
        let i = slot(normalizer.normalize(&record.name), &mut groups);
        groups[i].current.push(record);
    }

    groups
}

/// Compare two snapshots using the default hash normalizer
///
/// # Examples
///
/// ```
/// use bundle_delta::compare::compare;
/// use bundle_delta::snapshot::AssetRecord;
///
/// let base = vec![AssetRecord::new("app-abc12345.js", 1000, 400)];
/// let current = vec![AssetRecord::new("app-xyz98765.js", 1200, 450)];
///
/// let result = compare(&base, &current);
/// assert_eq!(result.bigger.len(), 1);
/// assert_eq!(result.bigger[0].key, "app-[hash].js");
/// assert_eq!(result.bigger[0].parsed_delta, 200);
/// ```
pub fn compare(base: &[AssetRecord], current: &[AssetRecord]) -> ComparisonResult {
    compare_with(base, current, &HashNormalizer::default())
}

/// Compare two snapshots, grouping names with `normalizer`
pub fn compare_with<N: AssetNormalizer + ?Sized>(
    base: &[AssetRecord],
    current: &[AssetRecord],
    normalizer: &N,
) -> ComparisonResult {
    let groups = group_assets(base, current, normalizer);
    debug!(
        "Comparing {} base / {} current assets in {} groups",
        base.len(),
        current.len(),
        groups.len()
    );

    let mut result = ComparisonResult::default();

    for mut group in groups {
        // sort_by_key is stable: equal sizes keep insertion order
        group.base.sort_by_key(|r| r.parsed_size);
        group.current.sort_by_key(|r| r.parsed_size);

        let paired = group.base.len().min(group.current.len());

        for (previous, next) in group.base.iter().zip(group.current.iter()) {
            let change = AssetChange::new(group.key.clone(), (*previous).clone(), (*next).clone());
            match change.parsed_delta {
                d if d > 0 => result.bigger.push(change),
                d if d < 0 => result.smaller.push(change),
                _ => {}
            }
        }

        result
            .added
            .extend(group.current[paired..].iter().map(|next| AddedAsset {
                key: group.key.clone(),
                next: (*next).clone(),
            }));
        result
            .removed
            .extend(group.base[paired..].iter().map(|previous| RemovedAsset {
                key: group.key.clone(),
                previous: (*previous).clone(),
            }));
    }

    result.bigger.sort_by(|a, b| b.parsed_delta.cmp(&a.parsed_delta));
    result.smaller.sort_by_key(|c| c.parsed_delta);
    result
        .added
        .sort_by(|a, b| b.next.parsed_size.cmp(&a.next.parsed_size));
    result
        .removed
        .sort_by(|a, b| b.previous.parsed_size.cmp(&a.previous.parsed_size));

    debug!(
        "bigger={} smaller={} added={} removed={}",
        result.bigger.len(),
        result.smaller.len(),
        result.added.len(),
        result.removed.len()
    );

    result
}
