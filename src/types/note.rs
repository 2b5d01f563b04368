use serde::{Deserialize, Serialize};

/// A user-authored intention note bound to a page URL.
///
/// Timestamps are epoch milliseconds and are owned by the note manager:
/// callers may fill them with anything, the storage layer overwrites them
/// on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabNote {
    pub id: String,
    pub url: String,
    pub title: String,
    pub note: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: i64,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: i64,
}

impl TabNote {
    /// Convenience constructor for a note with zeroed timestamps.
    pub fn new(id: &str, url: &str, title: &str, note: &str) -> Self {
        Self {
            id: id.to_string(),
            url: url.to_string(),
            title: title.to_string(),
            note: note.to_string(),
            created_at: 0,
            updated_at: 0,
        }
    }
}
