use std::fmt;

// === StoreError ===

/// Errors surfaced by the local key-value store.
///
/// The store defines no taxonomy beyond the underlying engine's own
/// failure surface.
#[derive(Debug)]
pub enum StoreError {
    /// The underlying database operation failed.
    DatabaseError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DatabaseError(msg) => write!(f, "Store database error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::DatabaseError(e.to_string())
    }
}

// === NoteError ===

/// Errors related to note collection operations.
#[derive(Debug)]
pub enum NoteError {
    /// Reading or writing the backing store failed.
    StorageError(String),
    /// The persisted collection could not be (de)serialized.
    SerializationError(String),
}

impl fmt::Display for NoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteError::StorageError(msg) => write!(f, "Note storage error: {}", msg),
            NoteError::SerializationError(msg) => {
                write!(f, "Note serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for NoteError {}

impl From<StoreError> for NoteError {
    fn from(e: StoreError) -> Self {
        NoteError::StorageError(e.to_string())
    }
}

// === MessageError ===

/// Errors from the browser messaging / action-popup capabilities.
#[derive(Debug)]
pub enum MessageError {
    /// The target tab no longer exists or has no receiving context.
    TabGone(u64),
    /// The message could not be delivered.
    SendFailed(String),
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageError::TabGone(tab_id) => write!(f, "Tab gone: {}", tab_id),
            MessageError::SendFailed(msg) => write!(f, "Message send failed: {}", msg),
        }
    }
}

impl std::error::Error for MessageError {}

// === SettingsError ===

/// Errors related to settings load/save/update operations.
#[derive(Debug)]
pub enum SettingsError {
    /// File system operation failed.
    IoError(String),
    /// Settings could not be serialized or deserialized.
    SerializationError(String),
    /// The provided settings key path is invalid.
    InvalidKey(String),
    /// The provided value is invalid for the key.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings IO error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(msg) => write!(f, "Invalid settings key: {}", msg),
            SettingsError::InvalidValue(msg) => write!(f, "Invalid settings value: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}
