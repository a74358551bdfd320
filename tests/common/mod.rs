//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Test data builders
//! - `mocks.rs` - Mock implementations of port traits

pub mod fixtures;
pub mod mocks;
