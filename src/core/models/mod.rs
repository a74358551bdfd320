//! Domain models for civicore
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`IssueRecord`] - a tracked issue and its transition history
//! - [`Status`] - the four lifecycle states
//! - [`AiAssessment`] - AI screening result attached to a record
//! - [`Actor`] - an authenticated caller and its role
//! - [`TransitionEvent`] - the vocabulary of state changes

mod actor;
mod assessment;
mod category;
mod department;
mod event;
mod issue;
mod location;
mod status;

pub use actor::{Actor, ActorRole};
pub use assessment::{AiAssessment, Veracity};
pub use category::Category;
pub use department::DepartmentRef;
pub use event::TransitionEvent;
pub use issue::{IssueDraft, IssueRecord, ReporterRef, UpdateEntry};
pub use location::{Coordinates, Location};
pub use status::Status;
