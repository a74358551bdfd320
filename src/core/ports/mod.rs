//! Port traits (interfaces) for external collaborators
//!
//! The lifecycle engine depends only on these traits, never on concrete
//! implementations. Reference implementations live in the `adapters` module;
//! tests substitute mocks.

mod assessment;
mod catalog;
mod identity;
mod issue_store;

pub use assessment::AssessmentProvider;
pub use catalog::{DepartmentCatalog, DepartmentLookup};
pub use identity::IdentityProvider;
pub use issue_store::{IssueStore, SaveOutcome, Versioned};
