//! LocalStorageStore Tests
//!
//! Browser-backed settings persistence.

use prompt_generator::core::models::Settings;
use prompt_generator::core::storage::{
    SettingsRepository, SettingsStore, API_URL_KEY, SETTINGS_KEY,
};
use prompt_generator_frontend::services::local_storage::LocalStorageStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear() {
    let store = LocalStorageStore::new();
    for key in [SETTINGS_KEY, API_URL_KEY, "test-key"] {
        store.remove(key).unwrap();
    }
}

fn settings() -> Settings {
    Settings {
        provider: "anthropic".into(),
        provider_label: "Anthropic".into(),
        api_key: "sk-ant-test".into(),
        model: "claude-sonnet".into(),
        model_name: "Claude Sonnet".into(),
    }
}

#[wasm_bindgen_test]
fn test_store_get_set_remove() {
    clear();
    let store = LocalStorageStore::new();
    assert_eq!(store.get("test-key").unwrap(), None);

    store.set("test-key", "value").unwrap();
    assert_eq!(store.get("test-key").unwrap().as_deref(), Some("value"));

    store.remove("test-key").unwrap();
    assert_eq!(store.get("test-key").unwrap(), None);
    assert_eq!(store.name(), "localStorage");
}

#[wasm_bindgen_test]
fn test_settings_persist_as_camel_case_json() {
    clear();
    let repo = SettingsRepository::new(LocalStorageStore::new());
    assert!(repo.save_settings(&settings()));

    let raw = LocalStorageStore::new().get(SETTINGS_KEY).unwrap().unwrap();
    assert!(raw.contains("\"modelName\":\"Claude Sonnet\""));
    assert_eq!(repo.load_settings(), Some(settings()));
    clear();
}

#[wasm_bindgen_test]
fn test_corrupt_settings_read_as_absent() {
    clear();
    LocalStorageStore::new().set(SETTINGS_KEY, "{broken").unwrap();
    let repo = SettingsRepository::new(LocalStorageStore::new());
    assert!(repo.load_settings().is_none());
    clear();
}
