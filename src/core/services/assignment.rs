//! Assignment resolver
//!
//! Turns an admin-supplied department identifier into a validated
//! [`DepartmentRef`] before any state mutation happens. Approval without a
//! resolvable department must fail with the record untouched.

use super::super::error::EngineError;
use super::super::models::DepartmentRef;
use super::super::ports::{DepartmentCatalog, DepartmentLookup};

/// Resolve a department identifier against the catalog
///
/// Blank identifiers fail validation without hitting the catalog at all.
pub fn resolve(
    catalog: &dyn DepartmentCatalog,
    department_id: &str,
) -> Result<DepartmentRef, EngineError> {
    let id = department_id.trim();
    if id.is_empty() {
        return Err(EngineError::Validation("approval requires a department".to_string()));
    }

    match catalog.resolve(id)? {
        DepartmentLookup::Active(dept) => Ok(dept),
        DepartmentLookup::Inactive => Err(EngineError::InactiveDepartment(id.to_string())),
        DepartmentLookup::NotFound => Err(EngineError::UnknownDepartment(id.to_string())),
    }
}
