use wasm_bindgen_futures::JsFuture;
use web_sys::window;

/// Copy text to the system clipboard, best effort.
pub async fn copy_text(text: &str) -> Result<(), String> {
    let clipboard = window()
        .map(|w| w.navigator().clipboard())
        .ok_or_else(|| "no window".to_string())?;
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("clipboard write failed: {:?}", e))
}
