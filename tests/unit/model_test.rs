//! Tests for domain model wire formats and parsing

use civicore::core::models::{Category, IssueRecord, Status, Veracity};
use chrono::Utc;

use crate::common::fixtures::pothole_draft;

mod status {
    use super::*;

    #[test]
    fn serializes_with_original_wire_strings() {
        assert_eq!(serde_json::to_string(&Status::Pending).unwrap(), "\"Pending\"");
        assert_eq!(serde_json::to_string(&Status::InProgress).unwrap(), "\"In Progress\"");
        assert_eq!(serde_json::to_string(&Status::Resolved).unwrap(), "\"Resolved\"");
        assert_eq!(serde_json::to_string(&Status::Rejected).unwrap(), "\"Rejected\"");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("pending".parse::<Status>().unwrap(), Status::Pending);
        assert_eq!("In Progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("RESOLVED".parse::<Status>().unwrap(), Status::Resolved);
        assert!("done".parse::<Status>().is_err());
    }

    #[test]
    fn only_resolved_and_rejected_are_terminal() {
        assert!(!Status::Pending.is_terminal());
        assert!(!Status::InProgress.is_terminal());
        assert!(Status::Resolved.is_terminal());
        assert!(Status::Rejected.is_terminal());
    }
}

mod category {
    use super::*;

    #[test]
    fn parses_the_closed_set() {
        for (input, expected) in [
            ("Road", Category::Road),
            ("water", Category::Water),
            ("ELECTRICITY", Category::Electricity),
            ("Sanitation", Category::Sanitation),
            ("law", Category::Law),
        ] {
            assert_eq!(input.parse::<Category>().unwrap(), expected);
        }
    }

    #[test]
    fn rejects_unknown_categories() {
        assert!("Potholes".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }
}

mod veracity {
    use super::*;

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Veracity::LowQuality).unwrap(), "\"low_quality\"");
        assert_eq!(serde_json::to_string(&Veracity::Legit).unwrap(), "\"legit\"");
    }

    #[test]
    fn defaults_to_unknown() {
        assert_eq!(Veracity::default(), Veracity::Unknown);
    }
}

mod record {
    use super::*;

    #[test]
    fn json_round_trip_preserves_the_record() {
        let record = IssueRecord::from_draft(pothole_draft(), None, Utc::now());
        let json = serde_json::to_string(&record).unwrap();
        let back: IssueRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let record = IssueRecord::from_draft(pothole_draft(), None, Utc::now());
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("assigned_department"));
        assert!(!json.contains("admin_comment"));
        assert!(!json.contains("ai_assessment"));
    }
}
