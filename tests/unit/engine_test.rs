//! Tests for the issue service with mocked collaborators

use std::sync::Arc;

use civicore::adapters::{MemoryStore, StaticCatalog, TokenIdentity};
use civicore::core::models::{
    Actor, AiAssessment, Category, IssueDraft, Location, ReporterRef, Status, TransitionEvent,
    Veracity,
};
use civicore::{EngineError, IssueService};

use crate::common::fixtures::{admin, pothole_draft};
use crate::common::mocks::{ConflictingStore, FailingAssessor, FixedAssessor};

fn service_with(
    store: Arc<dyn civicore::core::ports::IssueStore>,
    assessor: Arc<dyn civicore::core::ports::AssessmentProvider>,
) -> IssueService {
    let catalog = StaticCatalog::new()
        .with_department("public-works", "Public Works")
        .with_inactive("telegraph", "Telegraph Office");
    let identity = TokenIdentity::new()
        .with_token("admin-token-1", Actor::Admin { username: "root".to_string() });
    IssueService::new(store, Arc::new(catalog), assessor, Arc::new(identity))
}

fn service() -> IssueService {
    service_with(Arc::new(MemoryStore::new()), Arc::new(FixedAssessor::neutral()))
}

mod submit {
    use super::*;

    #[test]
    fn creates_a_pending_assessed_record() {
        let svc = service();
        let record = svc.submit(pothole_draft()).unwrap();
        assert_eq!(record.status, Status::Pending);
        assert!(!record.approved_by_admin);
        assert!(record.ai_assessment.is_some());
        // And it is retrievable
        assert_eq!(svc.get(&record.id).unwrap(), record);
    }

    #[test]
    fn screener_failure_does_not_block_submission() {
        let svc = service_with(Arc::new(MemoryStore::new()), Arc::new(FailingAssessor));
        let record = svc.submit(pothole_draft()).unwrap();
        assert_eq!(record.status, Status::Pending);
        assert!(record.ai_assessment.is_none());
    }

    #[test]
    fn blank_title_fails_validation() {
        let svc = service();
        let mut draft = pothole_draft();
        draft.title = "  ".to_string();
        assert!(matches!(svc.submit(draft), Err(EngineError::Validation(_))));
    }

    #[test]
    fn missing_location_fails_validation() {
        let svc = service();
        let draft = IssueDraft {
            title: "Pothole".to_string(),
            description: String::new(),
            category: Category::Road,
            location: Location::default(),
            reporter: ReporterRef { user_id: 1 },
        };
        assert!(matches!(svc.submit(draft), Err(EngineError::Validation(_))));
    }
}

mod transitions {
    use super::*;

    #[test]
    fn unknown_issue_id_is_not_found() {
        let svc = service();
        let event = TransitionEvent::AdminReject { comment: None };
        assert!(matches!(
            svc.apply_transition("i0-missing", &event, &admin()),
            Err(EngineError::NotFound(_))
        ));
    }

    #[test]
    fn approve_with_unknown_department_leaves_record_untouched() {
        let svc = service();
        let record = svc.submit(pothole_draft()).unwrap();

        let event =
            TransitionEvent::AdminApprove { department: "mystery".to_string(), comment: None };
        let err = svc.apply_transition(&record.id, &event, &admin()).unwrap_err();
        assert!(matches!(err, EngineError::UnknownDepartment(_)));

        let stored = svc.get(&record.id).unwrap();
        assert_eq!(stored.status, Status::Pending);
        assert!(!stored.approved_by_admin);
        assert!(stored.assigned_department.is_none());
    }

    #[test]
    fn approve_with_inactive_department_fails_typed() {
        let svc = service();
        let record = svc.submit(pothole_draft()).unwrap();
        let event =
            TransitionEvent::AdminApprove { department: "telegraph".to_string(), comment: None };
        assert!(matches!(
            svc.apply_transition(&record.id, &event, &admin()),
            Err(EngineError::InactiveDepartment(_))
        ));
    }

    #[test]
    fn terminal_record_wins_over_unresolvable_department() {
        let svc = service();
        let record = svc.submit(pothole_draft()).unwrap();
        let reject = TransitionEvent::AdminReject { comment: None };
        svc.apply_transition(&record.id, &reject, &admin()).unwrap();

        // The record is Rejected; the bogus department must not change the
        // error kind
        let event =
            TransitionEvent::AdminApprove { department: "mystery".to_string(), comment: None };
        let err = svc.apply_transition(&record.id, &event, &admin()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTransition { .. }));
    }

    #[test]
    fn already_decided_wins_over_unresolvable_department() {
        let svc = service();
        let record = svc.submit(pothole_draft()).unwrap();
        let approve = TransitionEvent::AdminApprove {
            department: "public-works".to_string(),
            comment: None,
        };
        svc.apply_transition(&record.id, &approve, &admin()).unwrap();

        let again =
            TransitionEvent::AdminApprove { department: "mystery".to_string(), comment: None };
        let err = svc.apply_transition(&record.id, &again, &admin()).unwrap_err();
        assert!(matches!(err, EngineError::AlreadyDecided));
    }

    #[test]
    fn concurrent_writer_surfaces_stale_state() {
        let store = Arc::new(ConflictingStore::new());
        let svc = service_with(store, Arc::new(FixedAssessor::neutral()));
        let record = svc.submit(pothole_draft()).unwrap();

        let event =
            TransitionEvent::AdminApprove { department: "public-works".to_string(), comment: None };
        assert!(matches!(
            svc.apply_transition(&record.id, &event, &admin()),
            Err(EngineError::StaleState)
        ));
    }
}

mod assessment {
    use super::*;

    #[test]
    fn deferred_assessment_attaches_to_pending_record() {
        let svc = service_with(Arc::new(MemoryStore::new()), Arc::new(FailingAssessor));
        let record = svc.submit(pothole_draft()).unwrap();
        assert!(record.ai_assessment.is_none());

        let assessment = AiAssessment::new(0.8, Veracity::Legit, false);
        let updated = svc.record_assessment(&record.id, assessment).unwrap();
        assert_eq!(updated.ai_assessment, Some(assessment));
    }

    #[test]
    fn terminal_record_rejects_assessment() {
        let svc = service();
        let record = svc.submit(pothole_draft()).unwrap();
        let reject = TransitionEvent::AdminReject { comment: None };
        svc.apply_transition(&record.id, &reject, &admin()).unwrap();

        let assessment = AiAssessment::new(0.8, Veracity::Legit, false);
        assert!(matches!(
            svc.record_assessment(&record.id, assessment),
            Err(EngineError::Validation(_))
        ));
    }
}

mod queries {
    use super::*;
    use civicore::core::models::Coordinates;

    #[test]
    fn duplicates_flags_repeat_submissions() {
        let svc = service();
        let first = svc.submit(pothole_draft()).unwrap();
        let second = svc.submit(pothole_draft()).unwrap();

        let dupes = svc.duplicates().unwrap();
        assert_eq!(dupes, vec![second.id.clone()]);
        assert!(!dupes.contains(&first.id));
    }

    #[test]
    fn nearby_returns_only_coordinate_matches() {
        let svc = service();
        let mut near = pothole_draft();
        near.location = Location::from_coordinates(12.9705, 77.5905);
        let mut far = pothole_draft();
        far.description = "Another pothole far across town on the ring road".to_string();
        far.location = Location::from_coordinates(13.2000, 77.5900);

        let near_record = svc.submit(near).unwrap();
        svc.submit(far).unwrap();

        let hits = svc.nearby(Coordinates::new(12.9700, 77.5900), 0.5).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, near_record.id);
    }
}

mod identity {
    use super::*;

    #[test]
    fn known_credential_resolves_to_actor() {
        let svc = service();
        let actor = svc.authenticate("admin-token-1").unwrap();
        assert_eq!(actor, Actor::Admin { username: "root".to_string() });
    }

    #[test]
    fn unknown_credential_is_forbidden() {
        let svc = service();
        assert!(matches!(svc.authenticate("bogus"), Err(EngineError::Forbidden(_))));
    }
}
