//! Background coordinator for TabIntent.
//!
//! Reacts to tab lifecycle events: after a short delay it looks up the note
//! for the tab's URL and tells that tab's overlay what to render. Also
//! forwards the overlay's open-editor request to the browser's action-popup
//! capability.
//!
//! The coordinator is the sole owner of the note-vs-reminder decision; the
//! overlay manager is a pure renderer driven by the messages sent here.
//! Errors at the async boundaries are logged and dropped — a failed lookup
//! is indistinguishable from "no note", and a send to a torn-down tab is
//! simply ignored.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::managers::note_manager::{NoteManager, NoteManagerTrait};
use crate::storage::LocalStore;
use crate::types::errors::MessageError;
use crate::types::message::ExtensionMessage;
use crate::types::note::TabNote;
use crate::types::settings::{CoordinatorSettings, OverlaySettings};
use crate::types::tab::TabEvent;

/// Capability seam for the browser's per-tab message channel
/// (`tabs.sendMessage`).
pub trait TabMessenger: Send + Sync {
    fn send_to_tab(&self, tab_id: u64, message: &ExtensionMessage) -> Result<(), MessageError>;
}

/// Capability seam for the browser's action-popup API.
pub trait ActionApi: Send + Sync {
    fn open_popup(&self, tab_id: u64) -> Result<(), MessageError>;
}

/// Pure decision: what should the overlay render for this lookup result?
///
/// `None` means "send nothing" (reminders disabled and no note found).
pub fn decide(note: Option<TabNote>, reminder_enabled: bool) -> Option<ExtensionMessage> {
    match note {
        Some(note) => Some(ExtensionMessage::ShowNoteOverlay { note }),
        None if reminder_enabled => Some(ExtensionMessage::ShowIntentPrompt),
        None => None,
    }
}

/// Background coordinator driving per-tab overlay rendering.
pub struct BackgroundCoordinator {
    store: Arc<Mutex<LocalStore>>,
    messenger: Arc<dyn TabMessenger>,
    action: Arc<dyn ActionApi>,
    settings: CoordinatorSettings,
    reminder_enabled: bool,
}

impl BackgroundCoordinator {
    pub fn new(
        store: Arc<Mutex<LocalStore>>,
        messenger: Arc<dyn TabMessenger>,
        action: Arc<dyn ActionApi>,
        settings: CoordinatorSettings,
        overlay: &OverlaySettings,
    ) -> Self {
        Self {
            store,
            messenger,
            action,
            settings,
            reminder_enabled: overlay.reminder_enabled,
        }
    }

    /// True when the URL falls under a browser-internal scheme the
    /// coordinator never touches.
    pub fn is_denylisted(&self, url: &str) -> bool {
        self.settings
            .denylist
            .iter()
            .any(|prefix| url.starts_with(prefix.as_str()))
    }

    /// Looks up the note for `url` and decides what the overlay should
    /// render. A storage failure is logged and treated as a miss.
    pub fn check_url(&self, url: &str) -> Option<ExtensionMessage> {
        if self.is_denylisted(url) {
            return None;
        }
        let note = match self.store.lock() {
            Ok(store) => match NoteManager::new(&store).get_by_url(url) {
                Ok(note) => note,
                Err(e) => {
                    eprintln!("[coordinator] note lookup failed for {}: {}", url, e);
                    None
                }
            },
            Err(e) => {
                eprintln!("[coordinator] store lock poisoned: {}", e);
                None
            }
        };
        decide(note, self.reminder_enabled)
    }

    /// Handles one tab lifecycle event end to end: denylist check, fixed
    /// delay, lookup, message dispatch.
    ///
    /// The delay lets the page-side renderer finish initializing. By the
    /// time the check fires the tab may have navigated away; the resulting
    /// send error is logged and dropped.
    pub async fn handle_tab_event(&self, event: TabEvent) {
        if self.is_denylisted(event.url()) {
            return;
        }

        if self.settings.check_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.settings.check_delay_ms)).await;
        }

        if let Some(message) = self.check_url(event.url()) {
            if let Err(e) = self.messenger.send_to_tab(event.tab_id(), &message) {
                eprintln!("[coordinator] send to tab {} failed: {}", event.tab_id(), e);
            }
        }
    }

    /// Spawns `handle_tab_event` onto the runtime, mirroring the
    /// fire-and-forget listener registration in the browser.
    pub fn spawn_tab_event(self: &Arc<Self>, event: TabEvent) -> tokio::task::JoinHandle<()> {
        let coordinator = Arc::clone(self);
        tokio::spawn(async move { coordinator.handle_tab_event(event).await })
    }

    /// Handles a runtime message coming back from a page context.
    /// Only `OPEN_POPUP` is meaningful here; render commands are outbound.
    pub fn handle_runtime_message(&self, tab_id: u64, message: &ExtensionMessage) {
        if let ExtensionMessage::OpenPopup = message {
            if let Err(e) = self.action.open_popup(tab_id) {
                eprintln!("[coordinator] open popup for tab {} failed: {}", tab_id, e);
            }
        }
    }
}
