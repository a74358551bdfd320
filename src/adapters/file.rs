//! JSON file store
//!
//! Whole-file snapshot persistence for small deployments and fixtures. The
//! entire record map is serialized on every save; the mutex keeps the
//! read-modify-write cycle atomic within the process.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::core::models::IssueRecord;
use crate::core::ports::{IssueStore, SaveOutcome, Versioned};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    records: HashMap<String, (IssueRecord, u64)>,
}

/// File-backed issue store (JSON snapshot)
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store over the given snapshot path
    ///
    /// The file is created on first save; a missing file reads as empty.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    fn read_snapshot(&self) -> anyhow::Result<Snapshot> {
        if !self.path.exists() {
            return Ok(Snapshot::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_snapshot(&self, snapshot: &Snapshot) -> anyhow::Result<()> {
        if let Some(parent) = Path::new(&self.path).parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl IssueStore for JsonFileStore {
    fn insert(&self, record: IssueRecord) -> anyhow::Result<u64> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        let mut snapshot = self.read_snapshot()?;
        anyhow::ensure!(
            !snapshot.records.contains_key(&record.id),
            "duplicate issue id {}",
            record.id
        );
        snapshot.records.insert(record.id.clone(), (record, 1));
        self.write_snapshot(&snapshot)?;
        Ok(1)
    }

    fn load(&self, id: &str) -> anyhow::Result<Option<Versioned>> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        let snapshot = self.read_snapshot()?;
        Ok(snapshot
            .records
            .get(id)
            .map(|(record, version)| Versioned { record: record.clone(), version: *version }))
    }

    fn save(&self, record: IssueRecord, expected_version: u64) -> anyhow::Result<SaveOutcome> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        let mut snapshot = self.read_snapshot()?;
        let Some(entry) = snapshot.records.get_mut(&record.id) else {
            anyhow::bail!("issue {} not present in store", record.id);
        };
        if entry.1 != expected_version {
            return Ok(SaveOutcome::Conflict);
        }
        let next = expected_version + 1;
        *entry = (record, next);
        self.write_snapshot(&snapshot)?;
        Ok(SaveOutcome::Committed(next))
    }

    fn list(&self) -> anyhow::Result<Vec<IssueRecord>> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        let snapshot = self.read_snapshot()?;
        let mut all: Vec<IssueRecord> =
            snapshot.records.into_values().map(|(r, _)| r).collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }
}

fn poisoned() -> anyhow::Error {
    anyhow::anyhow!("file store lock poisoned")
}
