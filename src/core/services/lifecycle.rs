//! Lifecycle state machine
//!
//! Pure transition logic over [`IssueRecord`]. Callers are expected to have
//! passed the role gate already; this module enforces only state guards and
//! side effects, and never performs I/O.
//!
//! Canonical rules:
//!
//! - `Resolved` and `Rejected` are terminal; nothing leaves them.
//! - An admin decision is one-shot: once `approved_by_admin` is true, any
//!   further admin decision fails with `AlreadyDecided`.
//! - Approval and department assignment commit together; a record is never
//!   `InProgress` without an assigned department.
//!
//! Every function here is total: it returns a fresh record or an error, and
//! the input record is never mutated.

use chrono::{DateTime, Utc};

use super::super::error::EngineError;
use super::super::models::{
    Actor, DepartmentRef, IssueRecord, Status, TransitionEvent, UpdateEntry,
};

/// Comment written by an AI quick-reject
pub const AI_REJECT_COMMENT: &str = "AI flagged as suspicious";

/// Apply a transition event to a record
///
/// `department` must carry the resolved department reference for
/// `AdminApprove` events; it is ignored for all others. The role gate must
/// have admitted `actor` before this is called.
pub fn apply(
    record: &IssueRecord,
    event: &TransitionEvent,
    actor: &Actor,
    department: Option<&DepartmentRef>,
    now: DateTime<Utc>,
) -> Result<IssueRecord, EngineError> {
    // Terminal guard comes before everything else: a finalized record
    // accepts nothing, whoever asks.
    if record.status.is_terminal() {
        return Err(EngineError::invalid(record.status, event.name()));
    }

    match event {
        TransitionEvent::AdminApprove { comment, .. } => {
            approve(record, actor, department, comment.as_deref(), now)
        }
        TransitionEvent::AdminReject { comment } => reject(record, actor, comment.as_deref(), now),
        TransitionEvent::AiQuickReject => ai_quick_reject(record, actor, now),
        TransitionEvent::DepartmentUpdate { status, note } => {
            department_update(record, actor, *status, note.as_deref(), now)
        }
    }
}

fn approve(
    record: &IssueRecord,
    actor: &Actor,
    department: Option<&DepartmentRef>,
    comment: Option<&str>,
    now: DateTime<Utc>,
) -> Result<IssueRecord, EngineError> {
    if record.approved_by_admin {
        return Err(EngineError::AlreadyDecided);
    }
    if record.status != Status::Pending {
        return Err(EngineError::invalid(record.status, "admin_approve"));
    }
    let Some(department) = department else {
        return Err(EngineError::Validation("approval requires a resolved department".to_string()));
    };

    let mut updated = record.clone();
    updated.status = Status::InProgress;
    updated.approved_by_admin = true;
    updated.assigned_department = Some(department.clone());
    updated.admin_comment = comment.map(str::to_string);
    push_history(&mut updated, record.status, Status::InProgress, actor, comment, now);
    Ok(updated)
}

fn reject(
    record: &IssueRecord,
    actor: &Actor,
    comment: Option<&str>,
    now: DateTime<Utc>,
) -> Result<IssueRecord, EngineError> {
    if record.approved_by_admin {
        // Never silently overwrite an approval.
        return Err(EngineError::AlreadyDecided);
    }
    if record.status != Status::Pending {
        return Err(EngineError::invalid(record.status, "admin_reject"));
    }

    let mut updated = record.clone();
    updated.status = Status::Rejected;
    updated.admin_comment = comment.map(str::to_string);
    push_history(&mut updated, record.status, Status::Rejected, actor, comment, now);
    Ok(updated)
}

fn ai_quick_reject(
    record: &IssueRecord,
    actor: &Actor,
    now: DateTime<Utc>,
) -> Result<IssueRecord, EngineError> {
    if record.status != Status::Pending || !record.is_suspicious() {
        return Err(EngineError::invalid(record.status, "ai_quick_reject"));
    }

    let mut updated = record.clone();
    updated.status = Status::Rejected;
    updated.admin_comment = Some(AI_REJECT_COMMENT.to_string());
    push_history(&mut updated, record.status, Status::Rejected, actor, Some(AI_REJECT_COMMENT), now);
    Ok(updated)
}

fn department_update(
    record: &IssueRecord,
    actor: &Actor,
    new_status: Status,
    note: Option<&str>,
    now: DateTime<Utc>,
) -> Result<IssueRecord, EngineError> {
    if record.status != Status::InProgress {
        return Err(EngineError::invalid(record.status, "department_update"));
    }
    if !matches!(new_status, Status::InProgress | Status::Resolved) {
        return Err(EngineError::Validation(format!(
            "department may only set In Progress or Resolved, not {new_status}"
        )));
    }

    let mut updated = record.clone();
    updated.status = new_status;
    push_history(&mut updated, record.status, new_status, actor, note, now);
    Ok(updated)
}

fn push_history(
    record: &mut IssueRecord,
    from: Status,
    to: Status,
    actor: &Actor,
    note: Option<&str>,
    at: DateTime<Utc>,
) {
    record.history.push(UpdateEntry {
        at,
        from,
        to,
        actor: actor.role(),
        note: note.map(str::to_string),
    });
}
