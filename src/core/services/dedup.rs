//! Duplicate submission detection
//!
//! Repeat submissions (double-taps, bot floods) share title, description,
//! category and reporter. The first occurrence wins; later ids are reported
//! so an admin maintenance task can act on them.

use std::collections::HashSet;

use super::super::models::IssueRecord;

/// Ids of records whose (title, description, category, reporter) key was
/// already seen earlier in `records`
#[must_use]
pub fn duplicate_ids(records: &[IssueRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for record in records {
        let key = (
            record.title.as_str(),
            record.description.as_str(),
            record.category,
            record.reporter.user_id,
        );
        if !seen.insert(key) {
            duplicates.push(record.id.clone());
        }
    }

    duplicates
}
