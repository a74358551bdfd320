//! Integration tests for civicore
//!
//! Full lifecycle flows through the issue service with real adapters:
//! submit -> screen -> admin decision -> department resolution.

// Common test utilities
#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;
