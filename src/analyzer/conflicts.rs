//! Conflict analysis across dependency declarations
//!
//! For each top-level dependency, every nested declarer's requirement for
//! the same package is checked against the top-level range. Declarers with
//! no intersecting range are collected into a conflict record, together
//! with a recommended version when the probe cube contains one satisfying
//! all involved ranges.
//!
//! Pure over its inputs: fetching the nested declarations (from
//! node_modules or anywhere else) is the caller's concern.

use super::CompatChecker;
use crate::domain::{ConflictRecord, ConflictingDeclarer, Dependencies};
use crate::version::Range;
use std::collections::HashSet;

/// Finds version conflicts between the top-level dependency ranges and the
/// ranges declared by nested dependencies.
///
/// Packages are processed in top-level declaration order, and conflicting
/// declarers are listed in nested-declaration order, so the result is
/// deterministic for identical inputs.
pub fn find_conflicts(
    checker: &CompatChecker,
    top_level: &Dependencies,
    nested: &[(String, Dependencies)],
) -> Vec<ConflictRecord> {
    let mut conflicts = Vec::new();
    let mut processed: HashSet<&str> = HashSet::new();

    for (package, required_range) in top_level.iter() {
        if !processed.insert(package) {
            continue;
        }

        let conflicting: Vec<ConflictingDeclarer> = nested
            .iter()
            .filter_map(|(declarer, deps)| {
                let their_range = deps.get(package)?;
                if checker.ranges_compatible(required_range, their_range) {
                    None
                } else {
                    Some(ConflictingDeclarer::new(declarer, their_range))
                }
            })
            .collect();

        if conflicting.is_empty() {
            continue;
        }

        let mut record = ConflictRecord::new(package, required_range, conflicting);

        // Look for a single version satisfying the top-level range and
        // every conflicting declarer's range. Any unparseable range in the
        // set means no candidate can satisfy "all", so skip the probe.
        let all_ranges: Option<Vec<Range>> = std::iter::once(required_range)
            .chain(record.conflicting.iter().map(|c| c.range.as_str()))
            .map(Range::parse)
            .collect();

        if let Some(ranges) = all_ranges {
            if let Some(version) = checker.max_satisfying_all(&ranges) {
                record = record.with_recommendation(version);
            }
        }

        conflicts.push(record);
    }

    conflicts
}
