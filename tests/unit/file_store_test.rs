//! Tests for the JSON file store

use civicore::adapters::JsonFileStore;
use civicore::core::models::{IssueRecord, Status};
use civicore::core::ports::{IssueStore, SaveOutcome};
use chrono::Utc;
use tempfile::TempDir;

use crate::common::fixtures::pothole_draft;

fn record() -> IssueRecord {
    IssueRecord::from_draft(pothole_draft(), None, Utc::now())
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("issues.json"));
    assert!(store.list().unwrap().is_empty());
    assert!(store.load("i0-0").unwrap().is_none());
}

#[test]
fn insert_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("issues.json");
    let r = record();

    JsonFileStore::new(&path).insert(r.clone()).unwrap();

    let reopened = JsonFileStore::new(&path);
    let loaded = reopened.load(&r.id).unwrap().unwrap();
    assert_eq!(loaded.record, r);
    assert_eq!(loaded.version, 1);
}

#[test]
fn stale_save_conflicts_and_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("issues.json"));
    let r = record();
    store.insert(r.clone()).unwrap();

    let mut first = store.load(&r.id).unwrap().unwrap();
    let second = store.load(&r.id).unwrap().unwrap();

    first.record.status = Status::Rejected;
    assert_eq!(store.save(first.record, first.version).unwrap(), SaveOutcome::Committed(2));
    assert_eq!(store.save(second.record, second.version).unwrap(), SaveOutcome::Conflict);

    assert_eq!(store.load(&r.id).unwrap().unwrap().record.status, Status::Rejected);
}

#[test]
fn saving_an_unknown_record_errors() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("issues.json"));
    assert!(store.save(record(), 1).is_err());
}

#[test]
fn list_returns_oldest_first() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("issues.json"));

    let older = IssueRecord::from_draft(pothole_draft(), None, Utc::now() - chrono::Duration::hours(1));
    let newer = record();
    store.insert(newer.clone()).unwrap();
    store.insert(older.clone()).unwrap();

    let all = store.list().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, older.id);
    assert_eq!(all[1].id, newer.id);
}
