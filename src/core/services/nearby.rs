//! Nearby issue query
//!
//! Bounding-box proximity filter used by the citizen map view: issues whose
//! coordinates fall inside a padded box around the caller, newest first,
//! capped at a small page.

use super::super::models::{Coordinates, IssueRecord};

/// Maximum number of nearby issues returned
const NEARBY_LIMIT: usize = 5;

/// Issues near a point, newest first, at most five
///
/// Records without coordinates never match.
#[must_use]
pub fn nearby(records: &[IssueRecord], center: Coordinates, radius_km: f64) -> Vec<IssueRecord> {
    let mut hits: Vec<&IssueRecord> = records
        .iter()
        .filter(|r| r.location.coordinates.is_some_and(|c| c.within_box(center, radius_km)))
        .collect();

    hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    hits.into_iter().take(NEARBY_LIMIT).cloned().collect()
}
