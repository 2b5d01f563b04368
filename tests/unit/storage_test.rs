//! Unit tests for the LocalStore key-value layer.
//!
//! Exercises open/get/set/remove against in-memory and file-backed stores,
//! plus the schema migration bookkeeping.

use tabintent::storage::{migrations, LocalStore};

#[test]
fn test_get_missing_key_returns_none() {
    let store = LocalStore::open_in_memory().unwrap();
    assert_eq!(store.get("nope").unwrap(), None);
}

#[test]
fn test_set_then_get() {
    let store = LocalStore::open_in_memory().unwrap();
    store.set("k", "[1,2,3]").unwrap();
    assert_eq!(store.get("k").unwrap(), Some("[1,2,3]".to_string()));
}

#[test]
fn test_set_overwrites_existing_value() {
    let store = LocalStore::open_in_memory().unwrap();
    store.set("k", "old").unwrap();
    store.set("k", "new").unwrap();
    assert_eq!(store.get("k").unwrap(), Some("new".to_string()));
}

#[test]
fn test_remove_deletes_key() {
    let store = LocalStore::open_in_memory().unwrap();
    store.set("k", "v").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
    assert!(!store.contains("k").unwrap());
}

#[test]
fn test_remove_absent_key_is_noop() {
    let store = LocalStore::open_in_memory().unwrap();
    store.remove("never-existed").unwrap();
}

#[test]
fn test_contains() {
    let store = LocalStore::open_in_memory().unwrap();
    assert!(!store.contains("k").unwrap());
    store.set("k", "v").unwrap();
    assert!(store.contains("k").unwrap());
}

#[test]
fn test_values_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    {
        let store = LocalStore::open(&path).unwrap();
        store.set("k", "persisted").unwrap();
    }

    let store = LocalStore::open(&path).unwrap();
    assert_eq!(store.get("k").unwrap(), Some("persisted".to_string()));
}

#[test]
fn test_migrations_record_schema_version() {
    let store = LocalStore::open_in_memory().unwrap();
    assert_eq!(
        migrations::get_schema_version(store.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn test_migrations_are_idempotent() {
    let store = LocalStore::open_in_memory().unwrap();
    migrations::run_all(store.connection()).unwrap();
    migrations::run_all(store.connection()).unwrap();
    assert_eq!(
        migrations::get_schema_version(store.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}
