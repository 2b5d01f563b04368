//! SQLite-backed key-value store for TabIntent.
//!
//! Provides the [`LocalStore`] struct that wraps a `rusqlite::Connection`
//! and automatically runs schema migrations on open.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::migrations;
use crate::types::errors::StoreError;

/// Persistent key-value store standing in for the browser's extension-local
/// storage area.
///
/// Keys map to opaque string values (JSON by convention). Mutations are
/// single-key upserts; callers that keep a collection under one key do their
/// own read-modify-write, so concurrent writers race with last-write-wins.
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Opens (or creates) the store at the given file path and runs migrations.
    ///
    /// # Errors
    /// Returns `StoreError` if the connection cannot be established or
    /// migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        migrations::run_all(&store.conn)?;
        Ok(store)
    }

    /// Opens an in-memory store and runs migrations.
    ///
    /// Useful for testing — the store is discarded when the `LocalStore`
    /// is dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        migrations::run_all(&store.conn)?;
        Ok(store)
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Returns the value stored under `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage_entries WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Stores `value` under `key`, replacing any existing value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO storage_entries (key, value, updated_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Self::now()],
        )?;
        Ok(())
    }

    /// Removes `key` from the store. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM storage_entries WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Returns true if `key` is present in the store.
    pub fn contains(&self, key: &str) -> Result<bool, StoreError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM storage_entries WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
