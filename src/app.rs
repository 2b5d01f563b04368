//! App Core for TabIntent.
//!
//! Central struct holding the shared store handle and settings engine.
//! `NoteManager` is created on demand against the store because it borrows
//! it with a lifetime parameter.

use std::sync::{Arc, Mutex};

use crate::coordinator::{ActionApi, BackgroundCoordinator, TabMessenger};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::LocalStore;

/// Central application struct wiring storage and settings together.
pub struct App {
    pub store: Arc<Mutex<LocalStore>>,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Creates a new App backed by a store at `db_path`, loading settings
    /// from the default platform config path.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let store = Arc::new(Mutex::new(LocalStore::open(db_path)?));

        let mut settings_engine = SettingsEngine::new(None);
        let _ = settings_engine.load();

        Ok(Self {
            store,
            settings_engine,
        })
    }

    /// Creates an App over an in-memory store, for tests and demos.
    pub fn open_in_memory(
        settings_path: Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let store = Arc::new(Mutex::new(LocalStore::open_in_memory()?));

        let mut settings_engine = SettingsEngine::new(settings_path);
        let _ = settings_engine.load();

        Ok(Self {
            store,
            settings_engine,
        })
    }

    /// Builds a background coordinator sharing this app's store, using the
    /// current settings snapshot.
    pub fn coordinator(
        &self,
        messenger: Arc<dyn TabMessenger>,
        action: Arc<dyn ActionApi>,
    ) -> BackgroundCoordinator {
        let settings = self.settings_engine.get_settings();
        BackgroundCoordinator::new(
            Arc::clone(&self.store),
            messenger,
            action,
            settings.coordinator.clone(),
            &settings.overlay,
        )
    }
}
