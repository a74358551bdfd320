//! Actors and roles
//!
//! Who is asking for a transition. `Actor` carries identity (which
//! department, which user); `ActorRole` is the bare role recorded in the
//! update history.

use serde::{Deserialize, Serialize};

/// Bare role of an actor, as recorded in history entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    /// Submitting citizen
    Citizen,
    /// Administrator
    Admin,
    /// Department staff
    Department,
    /// The AI screener pseudo-actor
    Ai,
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Citizen => "citizen",
            Self::Admin => "admin",
            Self::Department => "department",
            Self::Ai => "ai",
        };
        f.write_str(s)
    }
}

/// An authenticated caller requesting an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Actor {
    /// Citizen identified by user id; may only create records
    Citizen {
        /// Submitting user's id
        user_id: u64,
    },
    /// Administrator identified by username
    Admin {
        /// Admin username
        username: String,
    },
    /// Department staff acting for one department
    Department {
        /// Department identifier, compared against `assigned_department`
        department_id: String,
    },
    /// The AI screener
    Ai,
}

impl Actor {
    /// The bare role of this actor
    #[must_use]
    pub const fn role(&self) -> ActorRole {
        match self {
            Self::Citizen { .. } => ActorRole::Citizen,
            Self::Admin { .. } => ActorRole::Admin,
            Self::Department { .. } => ActorRole::Department,
            Self::Ai => ActorRole::Ai,
        }
    }
}
