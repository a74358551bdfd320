//! Transition events
//!
//! The full vocabulary of state changes. Transports must map 1:1 onto these
//! variants without adding implicit transitions.

use serde::{Deserialize, Serialize};

use super::Status;

/// A requested state change, with its payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TransitionEvent {
    /// Admin approves a pending issue and assigns it to a department
    AdminApprove {
        /// Department identifier to assign (resolved against the catalog)
        department: String,
        /// Optional admin comment
        comment: Option<String>,
    },
    /// Admin rejects a pending issue
    AdminReject {
        /// Optional admin comment explaining the rejection
        comment: Option<String>,
    },
    /// The AI screener rejects an issue it flagged as suspicious
    AiQuickReject,
    /// The assigned department updates progress
    DepartmentUpdate {
        /// New status; only `InProgress` or `Resolved` are accepted
        status: Status,
        /// Optional progress note, appended to the history
        note: Option<String>,
    },
}

impl TransitionEvent {
    /// Short name of the event, used in error messages and logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AdminApprove { .. } => "admin_approve",
            Self::AdminReject { .. } => "admin_reject",
            Self::AiQuickReject => "ai_quick_reject",
            Self::DepartmentUpdate { .. } => "department_update",
        }
    }
}
