//! RPC method handler for the TabIntent JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls — the
//! command surface the popup/editor front-end drives — to the note manager
//! and settings engine via the `App` struct.

use std::sync::Mutex;

use crate::app::App;
use crate::coordinator::decide;
use crate::managers::note_manager::{NoteManager, NoteManagerTrait};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::note::TabNote;

use serde_json::{json, Value};
use uuid::Uuid;

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Notes ───
        "note.save" => {
            let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
            let note_text = params.get("note").and_then(|v| v.as_str()).ok_or("missing note")?;
            let title = params.get("title").and_then(|v| v.as_str()).unwrap_or("");
            // Caller-supplied id (often the tab id); generated when absent
            let id = match params.get("id").and_then(|v| v.as_str()) {
                Some(id) => id.to_string(),
                None => Uuid::new_v4().to_string(),
            };

            let a = app.lock().map_err(|e| e.to_string())?;
            let store = a.store.lock().map_err(|e| e.to_string())?;
            let mut mgr = NoteManager::new(&store);
            let saved = mgr
                .save(TabNote::new(&id, url, title, note_text))
                .map_err(|e| e.to_string())?;
            serde_json::to_value(saved).map_err(|e| e.to_string())
        }
        "note.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let store = a.store.lock().map_err(|e| e.to_string())?;
            let mgr = NoteManager::new(&store);
            let found = if let Some(id) = params.get("id").and_then(|v| v.as_str()) {
                mgr.get_by_id(id).map_err(|e| e.to_string())?
            } else if let Some(url) = params.get("url").and_then(|v| v.as_str()) {
                mgr.get_by_url(url).map_err(|e| e.to_string())?
            } else {
                return Err("missing id or url".to_string());
            };
            match found {
                Some(note) => serde_json::to_value(note).map_err(|e| e.to_string()),
                None => Ok(Value::Null),
            }
        }
        "note.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let store = a.store.lock().map_err(|e| e.to_string())?;
            let mgr = NoteManager::new(&store);
            let notes = mgr.get_all().map_err(|e| e.to_string())?;
            serde_json::to_value(notes).map_err(|e| e.to_string())
        }
        "note.delete" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let store = a.store.lock().map_err(|e| e.to_string())?;
            let mut mgr = NoteManager::new(&store);
            mgr.delete(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "note.clear" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let store = a.store.lock().map_err(|e| e.to_string())?;
            let mut mgr = NoteManager::new(&store);
            mgr.clear().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Tab check ───
        // Synchronous variant of the coordinator decision: what would the
        // overlay be told to render for this URL right now?
        "tab.check" => {
            let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let settings = a.settings_engine.get_settings();
            if settings
                .coordinator
                .denylist
                .iter()
                .any(|prefix| url.starts_with(prefix.as_str()))
            {
                return Ok(Value::Null);
            }
            let store = a.store.lock().map_err(|e| e.to_string())?;
            let mgr = NoteManager::new(&store);
            let note = mgr.get_by_url(url).map_err(|e| e.to_string())?;
            match decide(note, settings.overlay.reminder_enabled) {
                Some(message) => serde_json::to_value(message).map_err(|e| e.to_string()),
                None => Ok(Value::Null),
            }
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let settings = a.settings_engine.get_settings();
            serde_json::to_value(settings).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine
                .set_value(key, value)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
