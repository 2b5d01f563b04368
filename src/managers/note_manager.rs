//! Note Manager for TabIntent.
//!
//! Implements `NoteManagerTrait` — CRUD over one logical collection of
//! [`TabNote`] records, serialized as a JSON array under a single storage
//! key. Every mutation is a wholesale read-modify-write of the collection.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::LocalStore;
use crate::types::errors::NoteError;
use crate::types::note::TabNote;

/// Storage key the whole note collection lives under.
pub const NOTES_STORAGE_KEY: &str = "tabintent-notes";

/// Trait defining note collection operations.
pub trait NoteManagerTrait {
    /// Returns the full collection, in stored order. Empty if the key is absent.
    fn get_all(&self) -> Result<Vec<TabNote>, NoteError>;
    /// First record whose `url` equals the argument, exact string match.
    fn get_by_url(&self, url: &str) -> Result<Option<TabNote>, NoteError>;
    /// First record whose `id` equals the argument.
    fn get_by_id(&self, id: &str) -> Result<Option<TabNote>, NoteError>;
    /// Inserts or replaces a note by `id`. Returns the persisted record.
    fn save(&mut self, note: TabNote) -> Result<TabNote, NoteError>;
    /// Removes the record with matching `id`. Nonexistent id is a no-op.
    fn delete(&mut self, id: &str) -> Result<(), NoteError>;
    /// Removes the entire collection key.
    fn clear(&mut self) -> Result<(), NoteError>;
}

/// Note manager backed by the local key-value store.
pub struct NoteManager<'a> {
    store: &'a LocalStore,
}

impl<'a> NoteManager<'a> {
    /// Creates a new `NoteManager` using the provided store.
    pub fn new(store: &'a LocalStore) -> Self {
        Self { store }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Persists the full collection back under the storage key.
    fn write_all(&self, notes: &[TabNote]) -> Result<(), NoteError> {
        let json = serde_json::to_string(notes)
            .map_err(|e| NoteError::SerializationError(e.to_string()))?;
        self.store.set(NOTES_STORAGE_KEY, &json)?;
        Ok(())
    }
}

impl<'a> NoteManagerTrait for NoteManager<'a> {
    fn get_all(&self) -> Result<Vec<TabNote>, NoteError> {
        match self.store.get(NOTES_STORAGE_KEY)? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| NoteError::SerializationError(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn get_by_url(&self, url: &str) -> Result<Option<TabNote>, NoteError> {
        let notes = self.get_all()?;
        Ok(notes.into_iter().find(|n| n.url == url))
    }

    fn get_by_id(&self, id: &str) -> Result<Option<TabNote>, NoteError> {
        let notes = self.get_all()?;
        Ok(notes.into_iter().find(|n| n.id == id))
    }

    /// If a record with the same `id` exists, replace it in place, keeping
    /// the stored `created_at` and refreshing `updated_at`. Otherwise append
    /// with both timestamps set to now. Timestamps supplied by the caller
    /// are ignored.
    fn save(&mut self, note: TabNote) -> Result<TabNote, NoteError> {
        let mut notes = self.get_all()?;
        let now = Self::now();

        let persisted = match notes.iter().position(|n| n.id == note.id) {
            Some(idx) => {
                let updated = TabNote {
                    created_at: notes[idx].created_at,
                    updated_at: now,
                    ..note
                };
                notes[idx] = updated.clone();
                updated
            }
            None => {
                let created = TabNote {
                    created_at: now,
                    updated_at: now,
                    ..note
                };
                notes.push(created.clone());
                created
            }
        };

        self.write_all(&notes)?;
        Ok(persisted)
    }

    fn delete(&mut self, id: &str) -> Result<(), NoteError> {
        let mut notes = self.get_all()?;
        notes.retain(|n| n.id != id);
        self.write_all(&notes)
    }

    fn clear(&mut self) -> Result<(), NoteError> {
        self.store.remove(NOTES_STORAGE_KEY)?;
        Ok(())
    }
}
