//! AI assessment provider port
//!
//! Invoked once at submission time. A failing provider must never block
//! submission; the engine tolerates errors and creates the record without an
//! assessment.

use super::super::models::{AiAssessment, IssueDraft};

/// External AI scorer for new submissions
pub trait AssessmentProvider: Send + Sync {
    /// Score a draft: severity, veracity verdict, suspicion flag
    fn assess(&self, draft: &IssueDraft) -> anyhow::Result<AiAssessment>;
}
