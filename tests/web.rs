//! Browser-side tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use ng_terminal::host;
use ng_terminal::storage::BrowserThemeStore;
use ng_terminal::{Terminal, Theme, ThemeStore};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn theme_preference_survives_in_local_storage() {
    let store = BrowserThemeStore;
    store.save(Theme::Light);
    assert_eq!(store.saved(), Some(Theme::Light));
    assert_eq!(store.initial(), Theme::Light);

    store.save(Theme::Dark);
    assert_eq!(store.saved(), Some(Theme::Dark));
}

#[wasm_bindgen_test]
fn theme_attribute_lands_on_the_root_element() {
    host::set_theme_attribute(Theme::Light).unwrap();
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn pushed_paths_show_up_in_location() {
    let start = host::current_path();
    host::push_path("/projects").unwrap();
    assert_eq!(host::current_path(), "/projects");
    host::push_path(&start).unwrap();
}

#[wasm_bindgen_test]
fn terminal_events_dispatch() {
    host::emit_terminal_event(host::THEME_EVENT, &serde_json::json!({ "theme": "dark" })).unwrap();
}

#[wasm_bindgen_test]
async fn terminal_loads_and_runs_commands() {
    let terminal = Terminal::new(JsValue::UNDEFINED).unwrap();
    assert!(!terminal.ready());

    JsFuture::from(terminal.init()).await.unwrap();
    assert!(terminal.ready());

    terminal.set_input("skills");
    terminal.key_down("Enter", false);
    assert_eq!(host::current_path(), "/skills");
    host::push_path("/").unwrap();
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    let config = serde_wasm_bindgen::to_value(&serde_json::json!({ "history_limit": "lots" })).unwrap();
    assert!(Terminal::new(config).is_err());
}
