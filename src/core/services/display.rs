//! Display projection
//!
//! Pure, read-only view of a record for presentation adapters (dashboards,
//! tables). Nothing in the engine depends on this module.

use super::super::models::{IssueRecord, Status, Veracity};

/// Severity tiers driving badge colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    /// severity < 0.4
    Low,
    /// 0.4 <= severity < 0.7
    Medium,
    /// severity >= 0.7
    High,
}

impl SeverityTier {
    fn from_severity(severity: f64) -> Self {
        if severity >= 0.7 {
            Self::High
        } else if severity >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// CSS color class for this tier
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Low => "severity-low",
            Self::Medium => "severity-medium",
            Self::High => "severity-high",
        }
    }
}

/// Severity badge: score out of 10 plus a color tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityBadge {
    /// Severity scaled to /10, one decimal (e.g. "7.0/10")
    pub score: String,
    /// Color tier
    pub tier: SeverityTier,
}

/// Read-only projection of a record for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayView {
    /// Status label shown to users
    pub status_label: &'static str,
    /// CSS class for the status chip
    pub status_class: &'static str,
    /// Severity badge; absent when the record was never assessed
    pub severity: Option<SeverityBadge>,
    /// Veracity label; "Unknown" when unassessed
    pub veracity_label: &'static str,
    /// Whether the suspicious row highlight applies
    pub suspicious: bool,
}

/// Compute the display view of a record
///
/// Deterministic and side-effect-free; same record in, same view out.
#[must_use]
pub fn view(record: &IssueRecord) -> DisplayView {
    let (status_label, status_class) = status_text(record);

    let severity = record.ai_assessment.map(|a| SeverityBadge {
        score: format!("{:.1}/10", a.severity * 10.0),
        tier: SeverityTier::from_severity(a.severity),
    });

    let veracity_label =
        record.ai_assessment.map_or(Veracity::Unknown, |a| a.veracity).label();

    DisplayView {
        status_label,
        status_class,
        severity,
        veracity_label,
        suspicious: record.is_suspicious(),
    }
}

// Final states first, then work in progress, then the approval flag as a
// fallback for records whose status field still reads Pending.
fn status_text(record: &IssueRecord) -> (&'static str, &'static str) {
    match record.status {
        // Resolved shares the green "approved" chip
        Status::Resolved => ("Resolved", "status-approved"),
        Status::Rejected => ("Rejected", "status-rejected"),
        Status::InProgress => ("In Progress", "status-inprogress"),
        Status::Pending if record.approved_by_admin => ("Approved & Assigned", "status-approved"),
        Status::Pending => ("Pending", "status-pending"),
    }
}
