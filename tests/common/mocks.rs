//! Mock implementations of port traits for testing
//!
//! Configurable behavior without real adapters: a scripted assessor, a
//! failing assessor, and a store that always reports a write conflict.

use civicore::core::models::{AiAssessment, IssueDraft, IssueRecord, Veracity};
use civicore::core::ports::{AssessmentProvider, IssueStore, SaveOutcome, Versioned};

use std::sync::Mutex;

/// Assessor returning one fixed assessment
#[derive(Debug)]
pub struct FixedAssessor(pub AiAssessment);

impl FixedAssessor {
    /// A non-suspicious, unknown-veracity assessment
    pub fn neutral() -> Self {
        Self(AiAssessment::new(0.5, Veracity::Unknown, false))
    }

    /// A suspicious spam assessment
    pub fn suspicious() -> Self {
        Self(AiAssessment::new(0.5, Veracity::Spam, true))
    }
}

impl AssessmentProvider for FixedAssessor {
    fn assess(&self, _draft: &IssueDraft) -> anyhow::Result<AiAssessment> {
        Ok(self.0)
    }
}

/// Assessor that always errors (screener down)
#[derive(Debug)]
pub struct FailingAssessor;

impl AssessmentProvider for FailingAssessor {
    fn assess(&self, _draft: &IssueDraft) -> anyhow::Result<AiAssessment> {
        anyhow::bail!("model file missing")
    }
}

/// Store whose saves always conflict, simulating a concurrent writer
#[derive(Debug, Default)]
pub struct ConflictingStore {
    records: Mutex<Vec<(IssueRecord, u64)>>,
}

impl ConflictingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IssueStore for ConflictingStore {
    fn insert(&self, record: IssueRecord) -> anyhow::Result<u64> {
        self.records.lock().unwrap().push((record, 1));
        Ok(1)
    }

    fn load(&self, id: &str) -> anyhow::Result<Option<Versioned>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|(r, _)| r.id == id)
            .map(|(r, v)| Versioned { record: r.clone(), version: *v }))
    }

    fn save(&self, _record: IssueRecord, _expected_version: u64) -> anyhow::Result<SaveOutcome> {
        Ok(SaveOutcome::Conflict)
    }

    fn list(&self) -> anyhow::Result<Vec<IssueRecord>> {
        Ok(self.records.lock().unwrap().iter().map(|(r, _)| r.clone()).collect())
    }
}
