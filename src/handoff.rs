//! Chat Hand-off
//!
//! Opens the external messaging service in a new tab.

use wasm_bindgen::JsValue;

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Open `url` in a new browsing context
pub fn open_chat(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let opened = window
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| format!("Failed to open chat: {}", js_error(e)))?;

    match opened {
        Some(_) => Ok(()),
        None => Err("Chat window was blocked by the browser".to_string()),
    }
}
