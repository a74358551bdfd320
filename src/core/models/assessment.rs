//! AI pre-screening assessment
//!
//! Produced by an external scorer at submission time. The lifecycle engine
//! only reads these fields, it never computes them.

use serde::{Deserialize, Serialize};

/// AI verdict on how trustworthy a report looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Veracity {
    /// Looks like a genuine report
    Legit,
    /// Looks like spam or a bot submission
    Spam,
    /// Readable but too thin or inconsistent to trust
    LowQuality,
    /// Scorer could not decide (or was unavailable)
    #[default]
    Unknown,
}

impl Veracity {
    /// Fixed display label for this verdict
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Legit => "Legit",
            Self::Spam => "Spam",
            Self::LowQuality => "Low Quality",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Veracity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Assessment attached to an issue by the AI screener
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiAssessment {
    /// Estimated severity in [0, 1]
    pub severity: f64,
    /// Verdict on the report's trustworthiness
    pub veracity: Veracity,
    /// Whether the screener flagged the report for admin attention
    pub suspicious: bool,
}

impl AiAssessment {
    /// Create an assessment, clamping severity into [0, 1]
    #[must_use]
    pub fn new(severity: f64, veracity: Veracity, suspicious: bool) -> Self {
        Self { severity: severity.clamp(0.0, 1.0), veracity, suspicious }
    }
}
