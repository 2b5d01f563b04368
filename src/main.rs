//! TabIntent — per-tab intention notes with on-page overlay reminders.
//!
//! Entry point: console demo walking every component. The real front-ends
//! (popup editor, page overlay renderer) talk to the `tabintent-rpc` binary.

use std::sync::{Arc, Mutex};

use tabintent::coordinator::{ActionApi, BackgroundCoordinator, TabMessenger};
use tabintent::managers::note_manager::{NoteManager, NoteManagerTrait};
use tabintent::managers::overlay_manager::{OverlayManager, OverlayManagerTrait};
use tabintent::storage::LocalStore;
use tabintent::types::errors::MessageError;
use tabintent::types::message::ExtensionMessage;
use tabintent::types::note::TabNote;
use tabintent::types::settings::{CoordinatorSettings, OverlaySettings};
use tabintent::types::tab::TabEvent;

fn main() {
    println!();
    println!("TabIntent v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    demo_storage();
    demo_notes();
    demo_overlay();
    demo_coordinator();

    println!();
    println!("All components demonstrated.");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────");
}

fn demo_storage() {
    section("Local Store");
    let store = LocalStore::open_in_memory().expect("open store");
    store.set("demo-key", "\"demo-value\"").expect("set");
    println!("  get(demo-key) = {:?}", store.get("demo-key").unwrap());
    store.remove("demo-key").expect("remove");
    println!("  after remove  = {:?}", store.get("demo-key").unwrap());
}

fn demo_notes() {
    section("Note Manager");
    let store = LocalStore::open_in_memory().expect("open store");
    let mut mgr = NoteManager::new(&store);

    let saved = mgr
        .save(TabNote::new("1", "https://example.com", "Example", "Read the docs"))
        .expect("save");
    println!("  saved: {} -> {:?}", saved.url, saved.note);

    let found = mgr.get_by_url("https://example.com").expect("lookup");
    println!("  get_by_url hit: {}", found.is_some());

    mgr.delete("1").expect("delete");
    println!("  after delete: {} notes", mgr.get_all().unwrap().len());
}

fn demo_overlay() {
    section("Overlay Manager");
    let mut overlay = OverlayManager::new(5_000);
    let note = TabNote::new("1", "https://example.com", "Example", "Read the docs");

    overlay.apply(&ExtensionMessage::ShowNoteOverlay { note }, 0);
    println!("  visible after show: {}", overlay.is_visible());

    overlay.tick(5_000);
    println!("  visible after timeout: {}", overlay.is_visible());
}

struct ConsoleMessenger;

impl TabMessenger for ConsoleMessenger {
    fn send_to_tab(&self, tab_id: u64, message: &ExtensionMessage) -> Result<(), MessageError> {
        println!(
            "  -> tab {}: {}",
            tab_id,
            serde_json::to_string(message).unwrap_or_default()
        );
        Ok(())
    }
}

struct ConsoleAction;

impl ActionApi for ConsoleAction {
    fn open_popup(&self, tab_id: u64) -> Result<(), MessageError> {
        println!("  -> open popup for tab {}", tab_id);
        Ok(())
    }
}

fn demo_coordinator() {
    section("Background Coordinator");
    let store = Arc::new(Mutex::new(LocalStore::open_in_memory().expect("open store")));

    {
        let guard = store.lock().unwrap();
        let mut mgr = NoteManager::new(&guard);
        mgr.save(TabNote::new("1", "https://example.com", "Example", "Stay on task"))
            .expect("save");
    }

    let coordinator = BackgroundCoordinator::new(
        store,
        Arc::new(ConsoleMessenger),
        Arc::new(ConsoleAction),
        CoordinatorSettings {
            check_delay_ms: 0,
            denylist: CoordinatorSettings::default_denylist(),
        },
        &OverlaySettings::default(),
    );

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");

    rt.block_on(async {
        coordinator
            .handle_tab_event(TabEvent::Activated {
                tab_id: 7,
                url: "https://example.com".to_string(),
            })
            .await;
        coordinator
            .handle_tab_event(TabEvent::NavigationCompleted {
                tab_id: 8,
                url: "https://no-note.example".to_string(),
            })
            .await;
        // Denylisted URL: no message
        coordinator
            .handle_tab_event(TabEvent::Activated {
                tab_id: 9,
                url: "chrome://settings".to_string(),
            })
            .await;
    });

    coordinator.handle_runtime_message(8, &ExtensionMessage::OpenPopup);
}
