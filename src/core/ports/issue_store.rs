//! Issue store port
//!
//! Persistence seam for issue records. Implementations must honor the
//! compare-and-swap contract: a `save` with a stale version commits nothing.

use super::super::models::IssueRecord;

/// A record together with the store version it was read at
#[derive(Debug, Clone)]
pub struct Versioned {
    /// The record as stored
    pub record: IssueRecord,
    /// Opaque version counter for optimistic concurrency
    pub version: u64,
}

/// Outcome of a versioned save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record was written; new version returned
    Committed(u64),
    /// The expected version no longer matches; nothing was written
    Conflict,
}

/// Persistence for issue records
pub trait IssueStore: Send + Sync {
    /// Insert a new record, returning its initial version
    fn insert(&self, record: IssueRecord) -> anyhow::Result<u64>;

    /// Load a record by id, or `None` if absent
    fn load(&self, id: &str) -> anyhow::Result<Option<Versioned>>;

    /// Write `record` if its stored version still equals `expected_version`
    fn save(&self, record: IssueRecord, expected_version: u64) -> anyhow::Result<SaveOutcome>;

    /// List all records, oldest first
    fn list(&self) -> anyhow::Result<Vec<IssueRecord>>;
}
