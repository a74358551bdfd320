//! In-memory adapters
//!
//! Reference implementations of the ports backed by process memory. The
//! store serializes writers with a mutex and keeps a version counter per
//! record, which makes it the canonical compare-and-swap store for tests
//! and single-process deployments.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Context;

use crate::core::models::{Actor, DepartmentRef, IssueRecord};
use crate::core::ports::{
    DepartmentCatalog, DepartmentLookup, IdentityProvider, IssueStore, SaveOutcome, Versioned,
};

/// In-memory issue store with per-record versioning
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, (IssueRecord, u64)>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IssueStore for MemoryStore {
    fn insert(&self, record: IssueRecord) -> anyhow::Result<u64> {
        let mut records = self.records.lock().map_err(|_| poisoned())?;
        anyhow::ensure!(
            !records.contains_key(&record.id),
            "duplicate issue id {}",
            record.id
        );
        records.insert(record.id.clone(), (record, 1));
        Ok(1)
    }

    fn load(&self, id: &str) -> anyhow::Result<Option<Versioned>> {
        let records = self.records.lock().map_err(|_| poisoned())?;
        Ok(records
            .get(id)
            .map(|(record, version)| Versioned { record: record.clone(), version: *version }))
    }

    fn save(&self, record: IssueRecord, expected_version: u64) -> anyhow::Result<SaveOutcome> {
        let mut records = self.records.lock().map_err(|_| poisoned())?;
        let entry = records
            .get_mut(&record.id)
            .with_context(|| format!("issue {} not present in store", record.id))?;
        if entry.1 != expected_version {
            return Ok(SaveOutcome::Conflict);
        }
        let next = expected_version + 1;
        *entry = (record, next);
        Ok(SaveOutcome::Committed(next))
    }

    fn list(&self) -> anyhow::Result<Vec<IssueRecord>> {
        let records = self.records.lock().map_err(|_| poisoned())?;
        let mut all: Vec<IssueRecord> = records.values().map(|(r, _)| r.clone()).collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }
}

fn poisoned() -> anyhow::Error {
    anyhow::anyhow!("issue store lock poisoned")
}

/// Fixed department table with an active flag
#[derive(Debug, Default)]
pub struct StaticCatalog {
    departments: HashMap<String, (DepartmentRef, bool)>,
}

impl StaticCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active department
    #[must_use]
    pub fn with_department(mut self, id: &str, name: &str) -> Self {
        self.departments.insert(id.to_string(), (DepartmentRef::new(id, name), true));
        self
    }

    /// Add a department that exists but no longer accepts assignments
    #[must_use]
    pub fn with_inactive(mut self, id: &str, name: &str) -> Self {
        self.departments.insert(id.to_string(), (DepartmentRef::new(id, name), false));
        self
    }
}

impl DepartmentCatalog for StaticCatalog {
    fn resolve(&self, department_id: &str) -> anyhow::Result<DepartmentLookup> {
        Ok(match self.departments.get(department_id) {
            Some((dept, true)) => DepartmentLookup::Active(dept.clone()),
            Some((_, false)) => DepartmentLookup::Inactive,
            None => DepartmentLookup::NotFound,
        })
    }
}

/// Token-to-actor identity table
#[derive(Debug, Default)]
pub struct TokenIdentity {
    tokens: HashMap<String, Actor>,
}

impl TokenIdentity {
    /// Create an empty identity table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a credential for an actor
    #[must_use]
    pub fn with_token(mut self, token: &str, actor: Actor) -> Self {
        self.tokens.insert(token.to_string(), actor);
        self
    }
}

impl IdentityProvider for TokenIdentity {
    fn resolve(&self, credential: &str) -> anyhow::Result<Option<Actor>> {
        Ok(self.tokens.get(credential).cloned())
    }
}
