//! Core domain logic for civicore
//!
//! Pure business logic with no I/O dependencies. All external interactions
//! go through the port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`IssueRecord`, `Status`, `Actor`, ...)
//! - `services/` - Lifecycle machine, role gate, resolver, projections
//! - `ports/` - Trait seams for store, catalog, AI scorer, identity
//! - `error` - The one typed error enum every operation returns

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
