//! WASM entry points for the browser UI.
//!
//! Results cross the boundary as JSON strings; errors as string `JsValue`s.

use super::report;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Contrast result for a text/background pair as JSON.
#[wasm_bindgen(js_name = checkContrast)]
pub fn check_contrast(text: &str, background: &str) -> Result<String, JsValue> {
    report::contrast_json(text, background).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Suggested accessible pair as JSON.
#[wasm_bindgen]
pub fn suggest(text: &str, background: &str) -> Result<String, JsValue> {
    report::suggestion_json(text, background).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Heuristic explanation as JSON.
#[wasm_bindgen]
pub fn explain(text: &str, background: &str, context: &str) -> Result<String, JsValue> {
    report::explanation_json(text, background, context)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Log to browser console.
#[wasm_bindgen]
pub fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
