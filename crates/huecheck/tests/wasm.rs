//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use huecheck::bindings;
use huecheck::{KeyValueStore, Preferences, Storage, Theme};

#[wasm_bindgen_test]
fn test_check_contrast_export() {
    let json = bindings::check_contrast("#000000", "#ffffff").expect("valid colors");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert_eq!(value["aaaNormal"], true);
}

#[wasm_bindgen_test]
fn test_check_contrast_export_rejects_bad_input() {
    assert!(bindings::check_contrast("#ZZZZZZ", "#ffffff").is_err());
}

#[wasm_bindgen_test]
fn test_local_storage_preferences() {
    let prefs = Preferences::new(Storage::local());
    prefs.set_theme(Theme::Light).expect("storage available");
    assert_eq!(prefs.theme(), Theme::Light);
    prefs.store().remove("theme").expect("storage available");
}
