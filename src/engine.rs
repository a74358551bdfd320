//! Issue service
//!
//! The single entry point tying the ports together: submission, transition
//! processing, assessment attachment and the read paths. Each operation is
//! atomic from the caller's point of view - guards are evaluated first, the
//! store commit happens last, and a failure anywhere leaves the stored
//! record untouched.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};

use crate::core::error::EngineError;
use crate::core::models::{
    Actor, AiAssessment, Coordinates, IssueDraft, IssueRecord, TransitionEvent,
};
use crate::core::ports::{
    AssessmentProvider, DepartmentCatalog, IdentityProvider, IssueStore, SaveOutcome,
};
use crate::core::services::{assignment, dedup, display, lifecycle, nearby, role_gate};

/// Orchestrating service over the injected collaborators
pub struct IssueService {
    store: Arc<dyn IssueStore>,
    catalog: Arc<dyn DepartmentCatalog>,
    assessor: Arc<dyn AssessmentProvider>,
    identity: Arc<dyn IdentityProvider>,
}

impl std::fmt::Debug for IssueService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueService").finish_non_exhaustive()
    }
}

impl IssueService {
    /// Create a service over the given collaborators
    #[must_use]
    pub fn new(
        store: Arc<dyn IssueStore>,
        catalog: Arc<dyn DepartmentCatalog>,
        assessor: Arc<dyn AssessmentProvider>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self { store, catalog, assessor, identity }
    }

    /// Submit a new issue
    ///
    /// Validates required fields, runs the AI screener (a screener failure
    /// is tolerated: the record is created unassessed) and persists a
    /// Pending record.
    pub fn submit(&self, draft: IssueDraft) -> Result<IssueRecord, EngineError> {
        validate_draft(&draft)?;

        let assessment = match self.assessor.assess(&draft) {
            Ok(a) => Some(a),
            Err(e) => {
                warn!("assessment provider failed, submitting unassessed: {e}");
                None
            }
        };

        let record = IssueRecord::from_draft(draft, assessment, Utc::now());
        self.store.insert(record.clone())?;
        info!("issue {} submitted ({})", record.id, record.category);
        Ok(record)
    }

    /// Apply a transition event to a stored record
    ///
    /// Order of evaluation: load, role gate, department resolution (approve
    /// only), state machine, versioned save. A concurrent writer surfaces as
    /// [`EngineError::StaleState`]; nothing is retried here.
    pub fn apply_transition(
        &self,
        issue_id: &str,
        event: &TransitionEvent,
        actor: &Actor,
    ) -> Result<IssueRecord, EngineError> {
        let versioned = self
            .store
            .load(issue_id)?
            .ok_or_else(|| EngineError::NotFound(issue_id.to_string()))?;

        if let Err(e) = role_gate::check(actor, event, &versioned.record) {
            debug!("role gate rejected {} on issue {issue_id}: {e}", event.name());
            return Err(e);
        }

        // Terminal and one-shot guards precede catalog resolution: an
        // approval on a finalized or already-decided record must report the
        // state error, not a department error.
        if versioned.record.status.is_terminal() {
            return Err(EngineError::invalid(versioned.record.status, event.name()));
        }
        if versioned.record.approved_by_admin
            && matches!(
                event,
                TransitionEvent::AdminApprove { .. } | TransitionEvent::AdminReject { .. }
            )
        {
            return Err(EngineError::AlreadyDecided);
        }

        // Resolve the department before touching any state, so an approval
        // with a bad department fails with the record fully intact.
        let department = match event {
            TransitionEvent::AdminApprove { department, .. } => {
                Some(assignment::resolve(self.catalog.as_ref(), department)?)
            }
            _ => None,
        };

        let updated =
            lifecycle::apply(&versioned.record, event, actor, department.as_ref(), Utc::now())?;

        match self.store.save(updated.clone(), versioned.version)? {
            SaveOutcome::Committed(_) => {
                info!(
                    "issue {issue_id}: {} -> {} via {}",
                    versioned.record.status,
                    updated.status,
                    event.name()
                );
                Ok(updated)
            }
            SaveOutcome::Conflict => Err(EngineError::StaleState),
        }
    }

    /// Attach or refresh the AI assessment of a stored record
    ///
    /// Supports deferred scoring when the screener was unavailable at
    /// submission time. Terminal records reject the update - nothing can
    /// consume an assessment there.
    pub fn record_assessment(
        &self,
        issue_id: &str,
        assessment: AiAssessment,
    ) -> Result<IssueRecord, EngineError> {
        let versioned = self
            .store
            .load(issue_id)?
            .ok_or_else(|| EngineError::NotFound(issue_id.to_string()))?;

        if versioned.record.status.is_terminal() {
            return Err(EngineError::Validation(format!(
                "issue {issue_id} is {}; assessment no longer applies",
                versioned.record.status
            )));
        }

        let mut updated = versioned.record;
        updated.ai_assessment = Some(assessment);

        match self.store.save(updated.clone(), versioned.version)? {
            SaveOutcome::Committed(_) => Ok(updated),
            SaveOutcome::Conflict => Err(EngineError::StaleState),
        }
    }

    /// Resolve a caller credential to an actor
    pub fn authenticate(&self, credential: &str) -> Result<Actor, EngineError> {
        self.identity
            .resolve(credential)?
            .ok_or_else(|| EngineError::Forbidden("unknown or expired credential".to_string()))
    }

    /// Load a record by id
    pub fn get(&self, issue_id: &str) -> Result<IssueRecord, EngineError> {
        Ok(self
            .store
            .load(issue_id)?
            .ok_or_else(|| EngineError::NotFound(issue_id.to_string()))?
            .record)
    }

    /// List all records, oldest first
    pub fn list(&self) -> Result<Vec<IssueRecord>, EngineError> {
        Ok(self.store.list()?)
    }

    /// Records assigned to one department (the department dashboard feed)
    pub fn assigned_to(&self, department_id: &str) -> Result<Vec<IssueRecord>, EngineError> {
        Ok(self
            .store
            .list()?
            .into_iter()
            .filter(|r| {
                r.approved_by_admin
                    && r.assigned_department.as_ref().is_some_and(|d| d.id == department_id)
            })
            .collect())
    }

    /// Ids of repeat submissions (admin maintenance view)
    pub fn duplicates(&self) -> Result<Vec<String>, EngineError> {
        Ok(dedup::duplicate_ids(&self.store.list()?))
    }

    /// Issues near a point, newest first (citizen map feed)
    pub fn nearby(
        &self,
        center: Coordinates,
        radius_km: f64,
    ) -> Result<Vec<IssueRecord>, EngineError> {
        Ok(nearby::nearby(&self.store.list()?, center, radius_km))
    }

    /// Pure display projection of a record
    #[must_use]
    pub fn display_view(record: &IssueRecord) -> display::DisplayView {
        display::view(record)
    }
}

fn validate_draft(draft: &IssueDraft) -> Result<(), EngineError> {
    if draft.title.trim().is_empty() {
        return Err(EngineError::Validation("title is required".to_string()));
    }
    if !draft.location.is_present() {
        return Err(EngineError::Validation(
            "location requires an address or coordinates".to_string(),
        ));
    }
    Ok(())
}
