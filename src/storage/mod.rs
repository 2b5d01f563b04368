//! TabIntent storage layer.
//!
//! Models the extension-local storage area as a SQLite-backed key-value
//! store. Values are opaque JSON strings; the note manager serializes its
//! whole collection under a single key.
//!
//! # Usage
//!
//! ```no_run
//! use tabintent::storage::LocalStore;
//!
//! // Open a persistent store
//! let store = LocalStore::open("tabintent.db").expect("failed to open store");
//!
//! // Or use an in-memory store for testing
//! let store = LocalStore::open_in_memory().expect("failed to open in-memory store");
//! ```

pub mod local_store;
pub mod migrations;

pub use local_store::LocalStore;
