//! Business logic services
//!
//! Pure decision logic over the domain models. No service here performs I/O;
//! collaborators are passed in through the port traits.
//!
//! - [`lifecycle`] - the canonical issue state machine
//! - [`role_gate`] - actor capability table, checked before state guards
//! - [`assignment`] - department identifier resolution
//! - [`display`] - read-only display projection
//! - [`dedup`] - duplicate submission detection
//! - [`nearby`] - bounding-box proximity query

pub mod assignment;
pub mod dedup;
pub mod display;
pub mod lifecycle;
pub mod nearby;
pub mod role_gate;

pub use display::{DisplayView, SeverityBadge, SeverityTier};
pub use lifecycle::AI_REJECT_COMMENT;
