//! Settings State
//!
//! App-wide handle on the settings repository: the active provider
//! settings as a signal, whether the settings modal is open, and a backend
//! client that resolves its base URL from the stored override.

use leptos::prelude::*;
use prompt_generator::config::AppConfig;
use prompt_generator::core::api::ApiClient;
use prompt_generator::core::models::Settings;
use prompt_generator::core::storage::{SettingsEvent, SettingsRepository, SettingsStore};

use super::local_storage::LocalStorageStore;

pub type Repository = SettingsRepository<LocalStorageStore>;

#[derive(Clone, Copy)]
pub struct SettingsState {
    repo: StoredValue<Repository>,
    config: StoredValue<AppConfig>,
    /// Active settings, kept in sync with the repository.
    pub settings: RwSignal<Option<Settings>>,
    pub show_settings: RwSignal<bool>,
}

impl SettingsState {
    /// Load persisted settings; the modal starts open when there are none.
    pub fn new(repo: Repository, config: AppConfig) -> Self {
        let current = repo.load_settings();
        let show_settings = RwSignal::new(current.is_none());
        let settings = RwSignal::new(current);

        let subscription = repo.subscribe(move |event| match event {
            SettingsEvent::SettingsSaved(saved) => {
                settings.try_set(Some(saved.clone()));
            }
            SettingsEvent::SettingsCleared => {
                settings.try_set(None);
            }
            _ => {}
        });

        let handle = repo.clone();
        on_cleanup(move || {
            handle.unsubscribe(subscription);
        });

        Self {
            repo: StoredValue::new(repo),
            config: StoredValue::new(config),
            settings,
            show_settings,
        }
    }

    pub fn repo(&self) -> Repository {
        self.repo.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Persist and activate new settings, then close the modal.
    pub fn save(&self, settings: Settings) {
        if !self.repo.with_value(|repo| repo.save_settings(&settings)) {
            tracing::warn!("Settings are active for this session only");
        }
        self.show_settings.set(false);
    }

    pub fn open_settings(&self) {
        self.show_settings.set(true);
    }

    /// Close the modal. Without settings the form stays locked and
    /// `ConnectionStatus` offers a way back in.
    pub fn close_settings(&self) {
        self.show_settings.set(false);
    }

    /// Effective base URL right now.
    pub fn base_url(&self) -> String {
        let override_url = self.repo.with_value(|repo| repo.api_url_override());
        self.config
            .with_value(|config| config.api.resolve_base_url(override_url.as_deref()))
    }

    /// Backend client reading the stored URL override on every request.
    pub fn client(&self) -> ApiClient {
        client_for(self.repo(), self.config().api)
    }

    pub fn system_prompt_for_request(&self) -> String {
        self.repo.with_value(|repo| repo.system_prompt_for_request())
    }
}

/// Client whose base URL follows `repo`'s override, else `api`'s default.
pub fn client_for<S: SettingsStore + 'static>(
    repo: SettingsRepository<S>,
    api: prompt_generator::config::ApiConfig,
) -> ApiClient {
    ApiClient::with_resolver(move || api.resolve_base_url(repo.api_url_override().as_deref()))
}

pub fn provide_settings_state() -> SettingsState {
    let state = SettingsState::new(
        SettingsRepository::new(LocalStorageStore::new()),
        AppConfig::load(),
    );
    provide_context(state);
    state
}

pub fn use_settings_state() -> SettingsState {
    expect_context::<SettingsState>()
}
