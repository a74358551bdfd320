//! civicore - issue lifecycle engine for a civic issue reporting platform
//!
//! Citizens submit location-tagged issues, an AI screener annotates them,
//! administrators approve or reject and assign a department, and the assigned
//! department drives the issue to resolution. This crate is the decision core
//! of that flow: the lifecycle state machine, the role capability table, the
//! department assignment resolver, and the pure display projection.
//!
//! Transport, authentication mechanics, persistence engines and UI are all
//! external collaborators consumed through the traits in [`core::ports`].

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod core;
pub mod engine;

pub use crate::core::error::EngineError;
pub use crate::engine::IssueService;
