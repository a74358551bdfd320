//! Department reference
//!
//! Opaque reference handed out by the department catalog once an identifier
//! has been validated as existing and active.

use serde::{Deserialize, Serialize};

/// A validated reference to a department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRef {
    /// Stable department identifier (catalog key)
    pub id: String,
    /// Human-readable department name
    pub name: String,
}

impl DepartmentRef {
    /// Create a department reference
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

impl std::fmt::Display for DepartmentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
