//! Role capability gate
//!
//! One table deciding which actor may request which event. Checked before
//! any state guard runs: a caller outside the table gets `Forbidden` even on
//! a record where the event would be invalid anyway.
//!
//! Capabilities:
//!
//! - `citizen` - creates records only; no transitions.
//! - `admin` - `AdminApprove` / `AdminReject`.
//! - `department` - `DepartmentUpdate`, and only on issues assigned to that
//!   department (strict id equality).
//! - `ai` - `AiQuickReject` only.

use super::super::error::EngineError;
use super::super::models::{Actor, IssueRecord, TransitionEvent};

/// Check whether `actor` may request `event` on `record`
pub fn check(
    actor: &Actor,
    event: &TransitionEvent,
    record: &IssueRecord,
) -> Result<(), EngineError> {
    match (actor, event) {
        (
            Actor::Admin { .. },
            TransitionEvent::AdminApprove { .. } | TransitionEvent::AdminReject { .. },
        ) => Ok(()),

        (Actor::Department { department_id }, TransitionEvent::DepartmentUpdate { .. }) => {
            match &record.assigned_department {
                Some(dept) if dept.id == *department_id => Ok(()),
                _ => Err(EngineError::Forbidden(format!(
                    "issue {} is not assigned to department {department_id}",
                    record.id
                ))),
            }
        }

        (Actor::Ai, TransitionEvent::AiQuickReject) => Ok(()),

        (actor, event) => Err(EngineError::Forbidden(format!(
            "role {} may not request {}",
            actor.role(),
            event.name()
        ))),
    }
}
