use wasm_bindgen_futures::JsFuture;

/// Write `text` to the system clipboard. Returns `false` when the browser
/// refused (no permission, insecure context).
pub async fn copy_text(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard = window.navigator().clipboard();
    match JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => true,
        Err(e) => {
            tracing::error!("Failed to copy: {e:?}");
            false
        }
    }
}
