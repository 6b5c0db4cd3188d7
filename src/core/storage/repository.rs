//! Typed access to persisted settings and admin overrides.
//!
//! Storage failures are logged and swallowed here: a failed write leaves the
//! value unpersisted, a corrupt or unreadable entry reads as absent. Callers
//! get a `bool` from setters when they want to show feedback.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::{SettingsStore, StoreError};
use crate::core::models::Settings;

pub const SETTINGS_KEY: &str = "prompt-generator-settings";
pub const SYSTEM_PROMPT_KEY: &str = "prompt-generator-system-prompt";
pub const API_URL_KEY: &str = "prompt-generator-api-url";
pub const PROVIDER_KEY_PREFIX: &str = "prompt-generator-api-key-";

/// Storage key holding the admin-configured API key for `provider`.
pub fn provider_key_entry(provider: &str) -> String {
    format!("{PROVIDER_KEY_PREFIX}{provider}")
}

/// Change notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    SettingsSaved(Settings),
    SettingsCleared,
    SystemPromptChanged(Option<String>),
    ApiUrlChanged(Option<String>),
    ProviderKeyChanged { provider: String, present: bool },
}

/// Handle returned by [`SettingsRepository::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&SettingsEvent) + Send + Sync>;

/// Settings repository over a [`SettingsStore`] backend.
///
/// Clones share the backend and the subscriber list.
pub struct SettingsRepository<S: SettingsStore> {
    store: Arc<S>,
    listeners: Arc<Mutex<Vec<(SubscriptionId, Listener)>>>,
    next_id: Arc<AtomicU64>,
}

impl<S: SettingsStore> Clone for SettingsRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            listeners: self.listeners.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

impl<S: SettingsStore> fmt::Debug for SettingsRepository<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsRepository")
            .field("store", &self.store.name())
            .finish()
    }
}

impl<S: SettingsStore> SettingsRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    // ========================================================================
    // Active Settings
    // ========================================================================

    /// Persisted settings, or `None` when absent or unreadable.
    pub fn load_settings(&self) -> Option<Settings> {
        let raw = self.read(SETTINGS_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::error!("Failed to load settings: {}", StoreError::from(e));
                None
            }
        }
    }

    /// Persist settings wholesale. Subscribers are notified even when the
    /// write fails, since the in-memory choice still stands for this session.
    pub fn save_settings(&self, settings: &Settings) -> bool {
        let saved = match serde_json::to_string(settings) {
            Ok(json) => self.write(SETTINGS_KEY, &json),
            Err(e) => {
                tracing::error!("Failed to save settings: {}", StoreError::from(e));
                false
            }
        };
        self.notify(&SettingsEvent::SettingsSaved(settings.clone()));
        saved
    }

    pub fn clear_settings(&self) -> bool {
        let removed = self.delete(SETTINGS_KEY);
        self.notify(&SettingsEvent::SettingsCleared);
        removed
    }

    // ========================================================================
    // Admin Overrides
    // ========================================================================

    /// Stored system prompt override, if non-empty.
    pub fn system_prompt_override(&self) -> Option<String> {
        self.read(SYSTEM_PROMPT_KEY).filter(|s| !s.is_empty())
    }

    /// System prompt to send with a generate request: the override, else "".
    pub fn system_prompt_for_request(&self) -> String {
        self.system_prompt_override().unwrap_or_default()
    }

    pub fn set_system_prompt(&self, prompt: &str) -> bool {
        let saved = self.write(SYSTEM_PROMPT_KEY, prompt);
        self.notify(&SettingsEvent::SystemPromptChanged(Some(prompt.to_string())));
        saved
    }

    pub fn clear_system_prompt(&self) -> bool {
        let removed = self.delete(SYSTEM_PROMPT_KEY);
        self.notify(&SettingsEvent::SystemPromptChanged(None));
        removed
    }

    /// Stored backend base URL override, if non-blank.
    pub fn api_url_override(&self) -> Option<String> {
        self.read(API_URL_KEY)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn set_api_url(&self, url: &str) -> bool {
        let url = url.trim();
        let saved = self.write(API_URL_KEY, url);
        self.notify(&SettingsEvent::ApiUrlChanged(Some(url.to_string())));
        saved
    }

    pub fn clear_api_url(&self) -> bool {
        let removed = self.delete(API_URL_KEY);
        self.notify(&SettingsEvent::ApiUrlChanged(None));
        removed
    }

    /// Admin-configured API key for a provider.
    pub fn provider_key(&self, provider: &str) -> Option<String> {
        self.read(&provider_key_entry(provider))
            .filter(|s| !s.trim().is_empty())
    }

    /// Store a provider key; a blank key removes the entry.
    pub fn set_provider_key(&self, provider: &str, key: &str) -> bool {
        let entry = provider_key_entry(provider);
        let key = key.trim();
        let (ok, present) = if key.is_empty() {
            (self.delete(&entry), false)
        } else {
            (self.write(&entry, key), true)
        };
        self.notify(&SettingsEvent::ProviderKeyChanged {
            provider: provider.to_string(),
            present,
        });
        ok
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SettingsEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, Arc::new(listener)));
        }
        id
    }

    /// Returns `false` when the id was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        match self.listeners.lock() {
            Ok(mut listeners) => {
                let before = listeners.len();
                listeners.retain(|(sub, _)| *sub != id);
                listeners.len() != before
            }
            Err(_) => false,
        }
    }

    fn notify(&self, event: &SettingsEvent) {
        // Snapshot first so listeners may (un)subscribe while being called.
        let snapshot: Vec<Listener> = match self.listeners.lock() {
            Ok(listeners) => listeners.iter().map(|(_, l)| l.clone()).collect(),
            Err(_) => return,
        };
        for listener in snapshot {
            listener(event);
        }
    }

    // ========================================================================
    // Raw Access
    // ========================================================================

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key, backend = self.store.name(), "Failed to read: {e}");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> bool {
        match self.store.set(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, backend = self.store.name(), "Failed to write: {e}");
                false
            }
        }
    }

    fn delete(&self, key: &str) -> bool {
        match self.store.remove(key) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, backend = self.store.name(), "Failed to remove: {e}");
                false
            }
        }
    }
}
