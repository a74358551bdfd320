//! Engine error types
//!
//! Every operation on the engine is total: it either returns the updated
//! record or one of these errors, with the stored record untouched.

use thiserror::Error;

use super::models::Status;

/// Errors surfaced by the lifecycle engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Missing or invalid required field on a submission or event payload
    #[error("validation failed: {0}")]
    Validation(String),

    /// Actor role or identity not permitted for the requested event
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Event not defined for the record's current state
    #[error("invalid transition: {event} not accepted while {status}")]
    InvalidTransition {
        /// Current status of the record
        status: Status,
        /// Name of the rejected event
        event: &'static str,
    },

    /// Admin decision on a record that has already been approved
    #[error("issue already decided; approval is one-shot")]
    AlreadyDecided,

    /// Department identifier not present in the catalog
    #[error("unknown department: {0}")]
    UnknownDepartment(String),

    /// Department exists but is not active
    #[error("inactive department: {0}")]
    InactiveDepartment(String),

    /// Record changed since it was read; caller may retry
    #[error("record was modified concurrently")]
    StaleState,

    /// No record with the given id
    #[error("issue not found: {0}")]
    NotFound(String),

    /// Failure inside an external collaborator (store, catalog, identity)
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl EngineError {
    /// Build an `InvalidTransition` for the given state and event name
    #[must_use]
    pub const fn invalid(status: Status, event: &'static str) -> Self {
        Self::InvalidTransition { status, event }
    }
}
