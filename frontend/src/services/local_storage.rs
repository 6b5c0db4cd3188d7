//! `window.localStorage` backend for the settings repository.

use prompt_generator::core::storage::{Result, SettingsStore, StoreError};
use wasm_bindgen::JsValue;

/// Browser local storage.
///
/// Holds no handle; the storage object is looked up on every call, which
/// keeps the store `Send + Sync` for use in reactive context.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_message(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl SettingsStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // Quota errors surface here
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::WriteFailed(js_message(&e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::WriteFailed(js_message(&e)))
    }

    fn name(&self) -> &str {
        "localStorage"
    }
}
