//! Unit tests for the RPC method handler.
//!
//! Drives the popup command surface through `handle_method` over an
//! in-memory App, the way the `tabintent-rpc` binary does.

use std::sync::Mutex;

use serde_json::json;

use tabintent::app::App;
use tabintent::rpc_handler::handle_method;

fn setup() -> Mutex<App> {
    let dir = tempfile::tempdir().unwrap();
    let settings_path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    std::mem::forget(dir);
    Mutex::new(App::open_in_memory(Some(settings_path)).expect("Failed to initialize app"))
}

#[test]
fn test_note_save_and_get_by_id() {
    let app = setup();

    let saved = handle_method(
        &app,
        "note.save",
        &json!({"id":"1","url":"https://a.com","title":"A","note":"focus"}),
    )
    .unwrap();
    assert_eq!(saved["id"], "1");
    assert_eq!(saved["note"], "focus");
    assert!(saved["createdAt"].as_i64().unwrap() > 0);

    let fetched = handle_method(&app, "note.get", &json!({"id":"1"})).unwrap();
    assert_eq!(fetched["url"], "https://a.com");
}

#[test]
fn test_note_save_generates_id_when_absent() {
    let app = setup();

    let saved = handle_method(
        &app,
        "note.save",
        &json!({"url":"https://a.com","note":"focus"}),
    )
    .unwrap();
    assert!(!saved["id"].as_str().unwrap().is_empty());
}

#[test]
fn test_note_save_missing_fields() {
    let app = setup();

    assert!(handle_method(&app, "note.save", &json!({"note":"x"})).is_err());
    assert!(handle_method(&app, "note.save", &json!({"url":"https://a.com"})).is_err());
}

#[test]
fn test_note_get_by_url_and_missing() {
    let app = setup();

    handle_method(
        &app,
        "note.save",
        &json!({"id":"1","url":"https://a.com","note":"focus"}),
    )
    .unwrap();

    let by_url = handle_method(&app, "note.get", &json!({"url":"https://a.com"})).unwrap();
    assert_eq!(by_url["id"], "1");

    let missing = handle_method(&app, "note.get", &json!({"url":"https://b.com"})).unwrap();
    assert!(missing.is_null());

    assert!(handle_method(&app, "note.get", &json!({})).is_err());
}

#[test]
fn test_note_list_delete_clear() {
    let app = setup();

    handle_method(&app, "note.save", &json!({"id":"1","url":"https://a.com","note":"a"})).unwrap();
    handle_method(&app, "note.save", &json!({"id":"2","url":"https://b.com","note":"b"})).unwrap();

    let list = handle_method(&app, "note.list", &json!({})).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 2);

    handle_method(&app, "note.delete", &json!({"id":"1"})).unwrap();
    let list = handle_method(&app, "note.list", &json!({})).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);

    handle_method(&app, "note.clear", &json!({})).unwrap();
    let list = handle_method(&app, "note.list", &json!({})).unwrap();
    assert!(list.as_array().unwrap().is_empty());
}

#[test]
fn test_tab_check_note_hit() {
    let app = setup();

    handle_method(
        &app,
        "note.save",
        &json!({"id":"1","url":"https://a.com","note":"focus"}),
    )
    .unwrap();

    let result = handle_method(&app, "tab.check", &json!({"url":"https://a.com"})).unwrap();
    assert_eq!(result["type"], "SHOW_NOTE_OVERLAY");
    assert_eq!(result["note"]["note"], "focus");
}

#[test]
fn test_tab_check_miss_yields_prompt() {
    let app = setup();

    let result = handle_method(&app, "tab.check", &json!({"url":"https://a.com"})).unwrap();
    assert_eq!(result["type"], "SHOW_INTENT_PROMPT");
}

#[test]
fn test_tab_check_denylisted_yields_null() {
    let app = setup();

    let result = handle_method(&app, "tab.check", &json!({"url":"chrome://settings"})).unwrap();
    assert!(result.is_null());
}

#[test]
fn test_settings_get_and_set() {
    let app = setup();

    let settings = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(settings["overlay"]["auto_dismiss_ms"], 5_000);

    handle_method(
        &app,
        "settings.set",
        &json!({"key":"overlay.auto_dismiss_ms","value":8_000}),
    )
    .unwrap();

    let settings = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(settings["overlay"]["auto_dismiss_ms"], 8_000);
}

#[test]
fn test_settings_set_invalid_key_errors() {
    let app = setup();

    let result = handle_method(&app, "settings.set", &json!({"key":"nope.nope","value":1}));
    assert!(result.is_err());
}

#[test]
fn test_unknown_method() {
    let app = setup();

    let result = handle_method(&app, "bookmark.add", &json!({}));
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("unknown method"));
}
