//! Issue record and submission draft
//!
//! `IssueRecord` is the entity the lifecycle machine operates on. It is
//! created once from a citizen's `IssueDraft` and afterwards mutated only by
//! lifecycle transitions; the core never deletes a record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActorRole, AiAssessment, Category, DepartmentRef, Location, Status};

/// Weak reference to the submitting user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterRef {
    /// User id; resolution to profile data is an external concern
    pub user_id: u64,
}

/// One entry in an issue's update history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEntry {
    /// When the transition was applied
    pub at: DateTime<Utc>,
    /// Status before the transition
    pub from: Status,
    /// Status after the transition
    pub to: Status,
    /// Role of the actor that triggered it
    pub actor: ActorRole,
    /// Comment or progress note attached to the transition
    pub note: Option<String>,
}

/// Citizen-supplied fields of a new issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueDraft {
    /// Short summary of the problem
    pub title: String,
    /// Free-text description (optional)
    #[serde(default)]
    pub description: String,
    /// Category from the closed set
    pub category: Category,
    /// Where the problem is; address, coordinates, or both
    pub location: Location,
    /// Submitting user
    pub reporter: ReporterRef,
}

/// A tracked issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Unique identifier, immutable after creation
    pub id: String,

    /// Short summary of the problem
    pub title: String,

    /// Free-text description
    pub description: String,

    /// Category from the closed set
    pub category: Category,

    /// Where the problem is
    pub location: Location,

    /// Submitting user (weak reference)
    pub reporter: ReporterRef,

    /// Current lifecycle status
    pub status: Status,

    /// Set once by the admin approval; never reverts to false
    pub approved_by_admin: bool,

    /// Present iff status is `InProgress` or `Resolved`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_department: Option<DepartmentRef>,

    /// Comment attached by the admin decision (or the AI quick-reject)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_comment: Option<String>,

    /// AI screening result; absent when the screener was unavailable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_assessment: Option<AiAssessment>,

    /// Immutable creation timestamp
    pub created_at: DateTime<Utc>,

    /// Ordered transition history, oldest first
    #[serde(default)]
    pub history: Vec<UpdateEntry>,
}

impl IssueRecord {
    /// Create a fresh Pending record from a draft
    ///
    /// The draft should already have passed submission validation; this
    /// constructor does not re-check it.
    #[must_use]
    pub fn from_draft(draft: IssueDraft, assessment: Option<AiAssessment>, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_id(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            location: draft.location,
            reporter: draft.reporter,
            status: Status::Pending,
            approved_by_admin: false,
            assigned_department: None,
            admin_comment: None,
            ai_assessment: assessment,
            created_at: now,
            history: Vec::new(),
        }
    }

    /// Whether the AI screener flagged this record as suspicious
    #[must_use]
    pub fn is_suspicious(&self) -> bool {
        self.ai_assessment.is_some_and(|a| a.suspicious)
    }
}

fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static SEQ: AtomicU64 = AtomicU64::new(0);
    let ts = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
    let n = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("i{ts:x}-{n}")
}
