//! Adapters: concrete implementations of the port traits
//!
//! - [`memory`] - in-process store, catalog and identity tables
//! - [`file`] - JSON snapshot store
//! - [`heuristics`] - rule-based assessment provider

pub mod file;
pub mod heuristics;
pub mod memory;

pub use file::JsonFileStore;
pub use heuristics::HeuristicAssessor;
pub use memory::{MemoryStore, StaticCatalog, TokenIdentity};
