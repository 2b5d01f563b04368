//! Property-based tests for note collection operations.
//!
//! These tests verify the collection invariants: saving is idempotent in
//! identity (replace, never duplicate), URL lookup is exact first-match,
//! and delete of an unknown id never changes the collection.

use proptest::prelude::*;

use tabintent::managers::note_manager::{NoteManager, NoteManagerTrait};
use tabintent::storage::LocalStore;
use tabintent::types::note::TabNote;

/// Strategy for generating valid URL strings.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Strategy for short free-text note bodies.
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,40}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Saving N notes with distinct ids yields exactly N records, in any
    // save order.
    #[test]
    fn distinct_ids_accumulate(
        urls in proptest::collection::vec(arb_url(), 1..8),
        text in arb_text(),
    ) {
        let store = LocalStore::open_in_memory().unwrap();
        let mut mgr = NoteManager::new(&store);

        for (i, url) in urls.iter().enumerate() {
            mgr.save(TabNote::new(&format!("id-{}", i), url, "", &text)).unwrap();
        }

        prop_assert_eq!(mgr.get_all().unwrap().len(), urls.len());
    }

    // Saving the same id repeatedly replaces rather than duplicates, and
    // the latest body wins.
    #[test]
    fn repeated_saves_replace(
        url in arb_url(),
        bodies in proptest::collection::vec(arb_text(), 1..6),
    ) {
        let store = LocalStore::open_in_memory().unwrap();
        let mut mgr = NoteManager::new(&store);

        for body in &bodies {
            mgr.save(TabNote::new("1", &url, "", body)).unwrap();
        }

        let all = mgr.get_all().unwrap();
        prop_assert_eq!(all.len(), 1);
        prop_assert_eq!(&all[0].note, bodies.last().unwrap());
    }

    // get_by_url returns the first record (in stored order) whose url
    // matches exactly, even when several records share the url.
    #[test]
    fn lookup_is_first_match(
        url in arb_url(),
        texts in proptest::collection::vec(arb_text(), 1..5),
    ) {
        let store = LocalStore::open_in_memory().unwrap();
        let mut mgr = NoteManager::new(&store);

        for (i, text) in texts.iter().enumerate() {
            mgr.save(TabNote::new(&format!("id-{}", i), &url, "", text)).unwrap();
        }

        let found = mgr.get_by_url(&url).unwrap();
        prop_assert!(found.is_some());
        let found = found.unwrap();
        prop_assert_eq!(found.id, "id-0".to_string());
        prop_assert_eq!(&found.note, &texts[0]);
    }

    // Looking up a url no record has always misses.
    #[test]
    fn lookup_unknown_url_misses(
        urls in proptest::collection::vec(arb_url(), 0..5),
        probe in arb_url(),
    ) {
        let store = LocalStore::open_in_memory().unwrap();
        let mut mgr = NoteManager::new(&store);

        for (i, url) in urls.iter().enumerate() {
            mgr.save(TabNote::new(&format!("id-{}", i), url, "", "x")).unwrap();
        }

        let found = mgr.get_by_url(&probe).unwrap();
        match found {
            Some(note) => prop_assert_eq!(note.url, probe),
            None => prop_assert!(!urls.contains(&probe)),
        }
    }

    // Deleting an id that was never saved leaves the collection unchanged.
    #[test]
    fn delete_unknown_id_is_noop(
        urls in proptest::collection::vec(arb_url(), 0..6),
    ) {
        let store = LocalStore::open_in_memory().unwrap();
        let mut mgr = NoteManager::new(&store);

        for (i, url) in urls.iter().enumerate() {
            mgr.save(TabNote::new(&format!("id-{}", i), url, "", "x")).unwrap();
        }

        let before = mgr.get_all().unwrap();
        mgr.delete("no-such-id").unwrap();
        prop_assert_eq!(mgr.get_all().unwrap(), before);
    }

    // clear() always empties the collection, whatever was in it.
    #[test]
    fn clear_empties_collection(
        urls in proptest::collection::vec(arb_url(), 0..6),
    ) {
        let store = LocalStore::open_in_memory().unwrap();
        let mut mgr = NoteManager::new(&store);

        for (i, url) in urls.iter().enumerate() {
            mgr.save(TabNote::new(&format!("id-{}", i), url, "", "x")).unwrap();
        }

        mgr.clear().unwrap();
        prop_assert!(mgr.get_all().unwrap().is_empty());
    }
}
