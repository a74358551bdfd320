//! Issue lifecycle status
//!
//! The four states of the lifecycle machine. `Resolved` and `Rejected` are
//! terminal: no transition is accepted out of them.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    /// Submitted, awaiting an admin decision
    #[default]
    Pending,
    /// Approved and assigned to a department
    #[serde(rename = "In Progress")]
    InProgress,
    /// Fixed by the assigned department (terminal)
    Resolved,
    /// Rejected by an admin or the AI screener (terminal)
    Rejected,
}

impl Status {
    /// Whether this status accepts no further transitions
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected)
    }

    /// The wire/display string for this status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("Invalid status: {s}. Use: Pending, In Progress, Resolved, Rejected")),
        }
    }
}
