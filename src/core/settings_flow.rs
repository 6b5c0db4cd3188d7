//! Provider Settings Flow
//!
//! State machine behind the settings modal:
//! select provider -> enter key -> test key -> select model -> save.
//!
//! Saving is only possible once the latest test for the current
//! provider/key pair succeeded and one of that provider's models is chosen.
//! Every provider or key change invalidates the previous test, including one
//! still in flight: its [`TestTicket`] stops matching and the late result is
//! dropped.

use crate::core::api;
use crate::core::models::{Model, Provider, Settings, TestApiRequest, TestApiResponse};

/// Identifies one credential test attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestTicket(u64);

impl TestTicket {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsFlow {
    providers: Vec<Provider>,
    loading: bool,
    provider: String,
    api_key: String,
    model: String,
    testing: bool,
    test_result: Option<TestApiResponse>,
    epoch: u64,
    pending: Option<TestTicket>,
}

impl Default for SettingsFlow {
    fn default() -> Self {
        Self::open(None)
    }
}

impl SettingsFlow {
    /// Start a flow, prefilled from the current settings.
    ///
    /// The previous model is not carried over: a re-test always picks it
    /// again from the freshly fetched catalog.
    pub fn open(current: Option<&Settings>) -> Self {
        Self {
            providers: Vec::new(),
            loading: true,
            provider: current.map(|s| s.provider.clone()).unwrap_or_default(),
            api_key: current.map(|s| s.api_key.clone()).unwrap_or_default(),
            model: String::new(),
            testing: false,
            test_result: None,
            epoch: 0,
            pending: None,
        }
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Install the fetched catalog; selects the first provider if none is.
    pub fn set_providers(&mut self, providers: Vec<Provider>) {
        self.loading = false;
        self.providers = providers;
        if self.provider.is_empty() {
            if let Some(first) = self.providers.first().map(|p| p.value.clone()) {
                self.select_provider(&first);
            }
        }
    }

    /// Catalog fetch failed; the modal leaves its loading state with an
    /// empty list.
    pub fn providers_failed(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn current_provider(&self) -> Option<&Provider> {
        self.providers.iter().find(|p| p.value == self.provider)
    }

    pub fn available_models(&self) -> &[Model] {
        self.current_provider()
            .map(|p| p.models.as_slice())
            .unwrap_or(&[])
    }

    /// Models to offer in the dropdown; empty until a test has passed.
    pub fn model_options(&self) -> &[Model] {
        if self.is_api_ready() {
            self.available_models()
        } else {
            &[]
        }
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn select_provider(&mut self, value: &str) {
        if self.provider == value {
            return;
        }
        self.provider = value.to_string();
        self.model.clear();
        self.invalidate_test();
    }

    pub fn set_api_key(&mut self, key: &str) {
        if self.api_key == key {
            return;
        }
        self.api_key = key.to_string();
        self.invalidate_test();
    }

    /// Pick a model of the current provider. Empty clears the choice.
    /// Returns `false` for ids the provider does not offer.
    pub fn select_model(&mut self, id: &str) -> bool {
        if id.is_empty() {
            self.model.clear();
            return true;
        }
        if self.available_models().iter().any(|m| m.id == id) {
            self.model = id.to_string();
            true
        } else {
            false
        }
    }

    fn invalidate_test(&mut self) {
        self.test_result = None;
        self.testing = false;
        self.pending = None;
    }

    // ========================================================================
    // Credential Test
    // ========================================================================

    pub fn is_testing(&self) -> bool {
        self.testing
    }

    pub fn test_result(&self) -> Option<&TestApiResponse> {
        self.test_result.as_ref()
    }

    pub fn can_test(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.testing
    }

    /// Begin a test. Returns the ticket to hand back to [`Self::finish_test`]
    /// and the request to send, or `None` when testing is not allowed.
    pub fn begin_test(&mut self) -> Option<(TestTicket, TestApiRequest)> {
        if !self.can_test() {
            return None;
        }
        self.epoch += 1;
        let ticket = TestTicket::new(self.epoch);
        self.pending = Some(ticket);
        self.testing = true;
        self.test_result = None;

        Some((
            ticket,
            TestApiRequest {
                provider: self.provider.clone(),
                api_key: self.api_key.clone(),
            },
        ))
    }

    /// Apply a test outcome. Returns `false` if the ticket is stale.
    pub fn finish_test(
        &mut self,
        ticket: TestTicket,
        outcome: api::Result<TestApiResponse>,
    ) -> bool {
        if self.pending != Some(ticket) {
            tracing::debug!(?ticket, "Dropping stale API key test result");
            return false;
        }
        self.pending = None;
        self.testing = false;

        let result = api::fold_test_outcome(&self.provider, outcome);

        if result.success {
            if let Some(first) = self.available_models().first().map(|m| m.id.clone()) {
                self.model = first;
            }
        }
        self.test_result = Some(result);
        true
    }

    /// True when the latest test for the current provider/key succeeded.
    pub fn is_api_ready(&self) -> bool {
        self.test_result.as_ref().is_some_and(|r| r.success)
    }

    // ========================================================================
    // Save
    // ========================================================================

    pub fn can_save(&self) -> bool {
        self.is_api_ready()
            && !self.model.is_empty()
            && self.available_models().iter().any(|m| m.id == self.model)
    }

    /// Finalized settings, or `None` while saving is disabled.
    pub fn save(&self) -> Option<Settings> {
        if !self.can_save() {
            return None;
        }
        let provider = self.current_provider();
        let model = provider.and_then(|p| p.find_model(&self.model));

        Some(Settings {
            provider: self.provider.clone(),
            provider_label: provider
                .map(|p| p.label.clone())
                .unwrap_or_else(|| self.provider.clone()),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            model_name: model
                .map(|m| m.name.clone())
                .unwrap_or_else(|| self.model.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::{ApiError, CONNECTION_ERROR};

    fn catalog() -> Vec<Provider> {
        vec![
            Provider {
                value: "openai".into(),
                label: "OpenAI".into(),
                models: vec![Model::new("gpt-4", "GPT-4"), Model::new("gpt-4o", "GPT-4o")],
            },
            Provider {
                value: "anthropic".into(),
                label: "Anthropic".into(),
                models: vec![Model::new("claude-sonnet-4-20250514", "Claude Sonnet 4")],
            },
            Provider {
                value: "xai".into(),
                label: "xAI".into(),
                models: vec![],
            },
        ]
    }

    fn ok() -> api::Result<TestApiResponse> {
        Ok(TestApiResponse {
            success: true,
            message: "ok".into(),
        })
    }

    fn tested_flow() -> SettingsFlow {
        let mut flow = SettingsFlow::open(None);
        flow.set_providers(catalog());
        flow.set_api_key("sk-test");
        let (ticket, _) = flow.begin_test().unwrap();
        assert!(flow.finish_test(ticket, ok()));
        flow
    }

    #[test]
    fn test_open_selects_first_provider() {
        let mut flow = SettingsFlow::open(None);
        assert!(flow.is_loading());
        flow.set_providers(catalog());
        assert!(!flow.is_loading());
        assert_eq!(flow.provider(), "openai");
    }

    #[test]
    fn test_open_prefills_from_settings() {
        let current = Settings {
            provider: "anthropic".into(),
            provider_label: "Anthropic".into(),
            api_key: "sk-ant".into(),
            model: "claude-sonnet-4-20250514".into(),
            model_name: "Claude Sonnet 4".into(),
        };
        let mut flow = SettingsFlow::open(Some(&current));
        flow.set_providers(catalog());
        assert_eq!(flow.provider(), "anthropic");
        assert_eq!(flow.api_key(), "sk-ant");
        assert_eq!(flow.model(), "");
        assert!(!flow.can_save());
    }

    #[test]
    fn test_cannot_test_blank_key() {
        let mut flow = SettingsFlow::open(None);
        flow.set_providers(catalog());
        flow.set_api_key("   ");
        assert!(!flow.can_test());
        assert!(flow.begin_test().is_none());
    }

    #[test]
    fn test_successful_test_selects_first_model() {
        let flow = tested_flow();
        assert!(flow.is_api_ready());
        assert_eq!(flow.model(), "gpt-4");
        assert_eq!(flow.model_options().len(), 2);
        assert!(flow.can_save());
    }

    #[test]
    fn test_success_without_models_cannot_save() {
        let mut flow = SettingsFlow::open(None);
        flow.set_providers(catalog());
        flow.select_provider("xai");
        flow.set_api_key("xai-key");
        let (ticket, _) = flow.begin_test().unwrap();
        flow.finish_test(ticket, ok());
        assert!(flow.is_api_ready());
        assert_eq!(flow.model(), "");
        assert!(!flow.can_save());
        assert!(flow.save().is_none());
    }

    #[test]
    fn test_failed_test_passes_message_through() {
        let mut flow = SettingsFlow::open(None);
        flow.set_providers(catalog());
        flow.set_api_key("bad");
        let (ticket, _) = flow.begin_test().unwrap();
        flow.finish_test(
            ticket,
            Ok(TestApiResponse::failed("Invalid API key: 401 Unauthorized")),
        );
        assert_eq!(
            flow.test_result().unwrap().message,
            "Invalid API key: 401 Unauthorized"
        );
        assert!(!flow.can_save());
    }

    #[test]
    fn test_transport_error_becomes_connection_error() {
        let mut flow = SettingsFlow::open(None);
        flow.set_providers(catalog());
        flow.set_api_key("sk");
        let (ticket, _) = flow.begin_test().unwrap();
        flow.finish_test(ticket, Err(ApiError::api(502, None)));
        let result = flow.test_result().unwrap();
        assert!(!result.success);
        assert_eq!(result.message, CONNECTION_ERROR);
    }

    #[test]
    fn test_provider_change_clears_result_and_model() {
        let mut flow = tested_flow();
        flow.select_provider("anthropic");
        assert!(flow.test_result().is_none());
        assert_eq!(flow.model(), "");
        assert!(!flow.can_save());
        assert!(flow.model_options().is_empty());
    }

    #[test]
    fn test_key_change_invalidates_test() {
        let mut flow = tested_flow();
        flow.set_api_key("sk-test-2");
        assert!(flow.test_result().is_none());
        assert!(!flow.can_save());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut flow = SettingsFlow::open(None);
        flow.set_providers(catalog());
        flow.set_api_key("sk-old");
        let (old_ticket, _) = flow.begin_test().unwrap();
        assert!(!flow.can_test());

        flow.set_api_key("sk-new");
        assert!(flow.can_test());
        assert!(!flow.finish_test(old_ticket, ok()));
        assert!(flow.test_result().is_none());
        assert!(!flow.is_testing());
    }

    #[test]
    fn test_select_model_outside_provider_rejected() {
        let mut flow = tested_flow();
        assert!(!flow.select_model("claude-sonnet-4-20250514"));
        assert!(flow.select_model("gpt-4o"));
        assert_eq!(flow.model(), "gpt-4o");
        assert!(flow.select_model(""));
        assert!(!flow.can_save());
    }

    #[test]
    fn test_save_builds_settings() {
        let mut flow = tested_flow();
        flow.select_model("gpt-4o");
        let settings = flow.save().unwrap();
        assert_eq!(
            settings,
            Settings {
                provider: "openai".into(),
                provider_label: "OpenAI".into(),
                api_key: "sk-test".into(),
                model: "gpt-4o".into(),
                model_name: "GPT-4o".into(),
            }
        );
    }
}
