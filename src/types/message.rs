use serde::{Deserialize, Serialize};

use crate::types::note::TabNote;

/// Extension-local message exchanged between the background coordinator,
/// the page overlay, and the popup.
///
/// Serializes with a `type` tag matching the wire protocol:
/// `{"type":"SHOW_NOTE_OVERLAY","note":{...}}`, `{"type":"SHOW_INTENT_PROMPT"}`,
/// `{"type":"OPEN_POPUP"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExtensionMessage {
    /// Render the saved note for the current page.
    #[serde(rename = "SHOW_NOTE_OVERLAY")]
    ShowNoteOverlay { note: TabNote },
    /// Render the "set an intention" reminder.
    #[serde(rename = "SHOW_INTENT_PROMPT")]
    ShowIntentPrompt,
    /// Ask the browser to open the extension's action popup (note editor).
    #[serde(rename = "OPEN_POPUP")]
    OpenPopup,
}
