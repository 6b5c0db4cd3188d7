//! Settings Storage
//!
//! This module provides the [`SettingsStore`] trait, a flat string
//! key-value backend, and the typed [`SettingsRepository`] built on top of it.
//!
//! - [`MemoryStore`] - In-memory backend for tests and previews
//! - `LocalStorageStore` (front-end crate) - `window.localStorage`
//!
//! Components never touch a backend directly; they receive a repository and
//! go through its typed getters/setters and change subscriptions.

mod error;
mod memory;
mod repository;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use repository::{
    provider_key_entry, SettingsEvent, SettingsRepository, SubscriptionId, API_URL_KEY,
    PROVIDER_KEY_PREFIX, SETTINGS_KEY, SYSTEM_PROMPT_KEY,
};

/// Trait for flat key-value storage backends.
///
/// Browser storage is synchronous, so the trait is too. Implementations must
/// be `Send + Sync` so a repository can live in UI context.
pub trait SettingsStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any existing one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Succeeds when the key was already absent.
    fn remove(&self, key: &str) -> Result<()>;

    /// Name of this backend, for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
