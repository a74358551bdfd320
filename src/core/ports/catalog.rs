//! Department catalog port
//!
//! Validates department identifiers before an approval commits. Lookups are
//! expected to be fast and synchronous; a slow backing service should be
//! bounded by the adapter, not the engine.

use super::super::models::DepartmentRef;

/// Result of a catalog lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentLookup {
    /// Department exists and accepts assignments
    Active(DepartmentRef),
    /// Department exists but is disabled
    Inactive,
    /// No department with this identifier
    NotFound,
}

/// Catalog of departments that can own issues
pub trait DepartmentCatalog: Send + Sync {
    /// Look up a department by identifier
    fn resolve(&self, department_id: &str) -> anyhow::Result<DepartmentLookup>;
}
