//! Admin Panel Model
//!
//! Editors for the system prompt template, the backend base URL and the
//! per-provider API keys, plus the API documentation snippets shown on the
//! API tab. Everything is stored through the [`SettingsRepository`]; none of
//! it touches the active [`Settings`](crate::core::models::Settings).

use thiserror::Error;

use crate::config::ApiConfig;
use crate::core::api::{self, client::GENERATE_PATH};
use crate::core::models::{TestApiRequest, TestApiResponse};
use crate::core::settings_flow::TestTicket;
use crate::core::storage::{SettingsRepository, SettingsStore};

pub const BUSINESS_PLACEHOLDER: &str = "{business}";
pub const ROLE_PLACEHOLDER: &str = "{role}";

/// Placeholder tokens and what they expand to.
pub const PLACEHOLDERS: &[(&str, &str)] = &[
    (ROLE_PLACEHOLDER, "employee role"),
    (BUSINESS_PLACEHOLDER, "business description"),
];

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an expert at writing prompts for AI assistants.

Business description: {business}
Employee role: {role}

Your task is to write 5 useful prompts for an employee in this role.

Each prompt must:
1. Be specific and applicable to the described business
2. Address the AI directly (for example \"Help me...\", \"Draft...\", \"Analyze...\")
3. Carry the context of the business and the role
4. Be ready to use without further editing
5. Be long and detailed enough (at least 2-3 sentences)

Answer with the list of prompts only, one per line, without numbering or extra text.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

pub type Result<T> = std::result::Result<T, AdminError>;

// ============================================================================
// Tabs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Prompt,
    Api,
    Keys,
}

impl AdminTab {
    pub fn all() -> [AdminTab; 3] {
        [AdminTab::Prompt, AdminTab::Api, AdminTab::Keys]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Prompt => "📝 Prompt",
            AdminTab::Api => "🔌 API",
            AdminTab::Keys => "🔑 Keys",
        }
    }
}

// ============================================================================
// System Prompt
// ============================================================================

/// Placeholders absent from `template`.
pub fn missing_placeholders(template: &str) -> Vec<&'static str> {
    PLACEHOLDERS
        .iter()
        .map(|(token, _)| *token)
        .filter(|token| !template.contains(token))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptEditor {
    pub draft: String,
}

impl PromptEditor {
    /// Draft from the stored override, else the built-in template.
    pub fn load<S: SettingsStore>(repo: &SettingsRepository<S>) -> Self {
        Self {
            draft: repo
                .system_prompt_override()
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
        }
    }

    pub fn is_default(&self) -> bool {
        self.draft == DEFAULT_SYSTEM_PROMPT
    }

    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        missing_placeholders(&self.draft)
    }

    pub fn save<S: SettingsStore>(&self, repo: &SettingsRepository<S>) -> Result<()> {
        if self.draft.trim().is_empty() {
            return Err(AdminError::EmptyField("System prompt"));
        }
        repo.set_system_prompt(&self.draft);
        Ok(())
    }

    /// Restore the built-in template and drop the stored override.
    pub fn reset<S: SettingsStore>(&mut self, repo: &SettingsRepository<S>) {
        self.draft = DEFAULT_SYSTEM_PROMPT.to_string();
        repo.clear_system_prompt();
    }
}

// ============================================================================
// Backend URL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrlEditor {
    pub draft: String,
}

impl ApiUrlEditor {
    /// Draft showing the URL requests currently go to.
    pub fn load<S: SettingsStore>(repo: &SettingsRepository<S>, config: &ApiConfig) -> Self {
        Self {
            draft: config.resolve_base_url(repo.api_url_override().as_deref()),
        }
    }

    pub fn save<S: SettingsStore>(&self, repo: &SettingsRepository<S>) -> Result<()> {
        if self.draft.trim().is_empty() {
            return Err(AdminError::EmptyField("API URL"));
        }
        repo.set_api_url(&self.draft);
        Ok(())
    }

    /// Base URL as it will be used in the examples, without a trailing slash.
    pub fn display_url(&self) -> String {
        self.draft.trim().trim_end_matches('/').to_string()
    }
}

// ============================================================================
// Provider Keys
// ============================================================================

/// Providers offered on the keys tab.
pub const ADMIN_PROVIDERS: &[(&str, &str)] = &[
    ("openai", "OpenAI"),
    ("anthropic", "Anthropic"),
    ("openrouter", "OpenRouter"),
    ("xai", "xAI"),
    ("zai", "Z.AI"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderKeyEntry {
    pub provider: &'static str,
    pub label: &'static str,
    pub key: String,
    pub testing: bool,
    pub result: Option<TestApiResponse>,
    pending: Option<TestTicket>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderKeys {
    entries: Vec<ProviderKeyEntry>,
    epoch: u64,
}

impl ProviderKeys {
    pub fn load<S: SettingsStore>(repo: &SettingsRepository<S>) -> Self {
        let entries = ADMIN_PROVIDERS
            .iter()
            .map(|&(provider, label)| ProviderKeyEntry {
                provider,
                label,
                key: repo.provider_key(provider).unwrap_or_default(),
                testing: false,
                result: None,
                pending: None,
            })
            .collect();
        Self { entries, epoch: 0 }
    }

    pub fn entries(&self) -> &[ProviderKeyEntry] {
        &self.entries
    }

    pub fn entry(&self, provider: &str) -> Option<&ProviderKeyEntry> {
        self.entries.iter().find(|e| e.provider == provider)
    }

    fn entry_mut(&mut self, provider: &str) -> Result<&mut ProviderKeyEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.provider == provider)
            .ok_or_else(|| AdminError::UnknownProvider(provider.to_string()))
    }

    /// Edit a key draft; clears that provider's previous test.
    pub fn set_key(&mut self, provider: &str, key: &str) -> Result<()> {
        let entry = self.entry_mut(provider)?;
        if entry.key != key {
            entry.key = key.to_string();
            entry.result = None;
            entry.testing = false;
            entry.pending = None;
        }
        Ok(())
    }

    pub fn save<S: SettingsStore>(
        &self,
        provider: &str,
        repo: &SettingsRepository<S>,
    ) -> Result<()> {
        let entry = self
            .entry(provider)
            .ok_or_else(|| AdminError::UnknownProvider(provider.to_string()))?;
        if entry.key.trim().is_empty() {
            return Err(AdminError::EmptyField("API key"));
        }
        repo.set_provider_key(provider, &entry.key);
        Ok(())
    }

    pub fn remove<S: SettingsStore>(
        &mut self,
        provider: &str,
        repo: &SettingsRepository<S>,
    ) -> Result<()> {
        self.set_key(provider, "")?;
        repo.set_provider_key(provider, "");
        Ok(())
    }

    pub fn begin_test(&mut self, provider: &str) -> Result<Option<(TestTicket, TestApiRequest)>> {
        self.epoch += 1;
        let ticket = TestTicket::new(self.epoch);
        let entry = self.entry_mut(provider)?;
        if entry.key.trim().is_empty() || entry.testing {
            return Ok(None);
        }
        entry.testing = true;
        entry.result = None;
        entry.pending = Some(ticket);
        Ok(Some((
            ticket,
            TestApiRequest {
                provider: provider.to_string(),
                api_key: entry.key.trim().to_string(),
            },
        )))
    }

    /// Apply a test outcome; stale tickets are ignored.
    pub fn finish_test(
        &mut self,
        provider: &str,
        ticket: TestTicket,
        outcome: api::Result<TestApiResponse>,
    ) -> bool {
        let Ok(entry) = self.entry_mut(provider) else {
            return false;
        };
        if entry.pending != Some(ticket) {
            return false;
        }
        entry.pending = None;
        entry.testing = false;
        entry.result = Some(api::fold_test_outcome(provider, outcome));
        true
    }
}

// ============================================================================
// API Documentation
// ============================================================================

/// Routes listed on the API tab besides generation.
pub const OTHER_ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/api/providers", "list of providers and models"),
    ("POST", "/api/test-api", "API key check"),
    ("GET", "/api/health", "server status check"),
];

/// Request fields of `POST /api/generate`.
pub const REQUEST_FIELDS: &[(&str, &str)] = &[
    ("business", "business description (required)"),
    ("role", "employee role (required)"),
    ("provider", "provider id: openai, anthropic, openrouter, xai, zai"),
    ("api_key", "provider API key"),
    ("model", "model id (optional)"),
    ("system_prompt", "custom system prompt (optional)"),
];

fn example_body() -> serde_json::Value {
    serde_json::json!({
        "business": "Car repair shop in Moscow, 5 employees",
        "role": "Manager",
        "provider": "openrouter",
        "api_key": "sk-or-v1-xxx",
        "model": "qwen/qwen3-coder:free",
        "system_prompt": ""
    })
}

/// Pretty-printed example request body.
pub fn example_request() -> String {
    serde_json::to_string_pretty(&example_body()).unwrap_or_default()
}

/// Generation endpoint line, e.g. `POST https://host/api/generate`.
pub fn generate_endpoint(base_url: &str) -> String {
    format!("POST {}{GENERATE_PATH}", base_url.trim_end_matches('/'))
}

/// Equivalent cURL invocation against `base_url`.
pub fn example_curl(base_url: &str) -> String {
    let body = serde_json::to_string(&example_body()).unwrap_or_default();
    format!(
        "curl -X POST \"{}{GENERATE_PATH}\" \\\n  -H \"Content-Type: application/json\" \\\n  -d '{body}'",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::{ApiError, CONNECTION_ERROR};
    use crate::core::storage::MemoryStore;

    fn repo() -> SettingsRepository<MemoryStore> {
        SettingsRepository::new(MemoryStore::new())
    }

    #[test]
    fn test_default_prompt_has_placeholders() {
        assert!(missing_placeholders(DEFAULT_SYSTEM_PROMPT).is_empty());
        assert_eq!(missing_placeholders("Prompts for {role}"), vec![BUSINESS_PLACEHOLDER]);
    }

    #[test]
    fn test_prompt_editor_save_and_reset() {
        let repo = repo();
        let mut editor = PromptEditor::load(&repo);
        assert!(editor.is_default());

        editor.draft = "Prompts for {role} in {business}".to_string();
        editor.save(&repo).unwrap();
        assert_eq!(PromptEditor::load(&repo).draft, "Prompts for {role} in {business}");

        editor.reset(&repo);
        assert!(editor.is_default());
        assert!(repo.system_prompt_override().is_none());
    }

    #[test]
    fn test_prompt_editor_rejects_empty() {
        let repo = repo();
        let editor = PromptEditor {
            draft: "  \n ".to_string(),
        };
        assert_eq!(editor.save(&repo), Err(AdminError::EmptyField("System prompt")));
        assert!(repo.system_prompt_override().is_none());
    }

    #[test]
    fn test_api_url_editor() {
        let repo = repo();
        let config = ApiConfig {
            default_base_url: "http://localhost:8000".into(),
        };
        let mut editor = ApiUrlEditor::load(&repo, &config);
        assert_eq!(editor.draft, "http://localhost:8000");

        editor.draft = "https://backend.example.com/".into();
        editor.save(&repo).unwrap();
        assert_eq!(editor.display_url(), "https://backend.example.com");
        assert_eq!(
            ApiUrlEditor::load(&repo, &config).draft,
            "https://backend.example.com"
        );

        editor.draft = " ".into();
        assert!(editor.save(&repo).is_err());
    }

    #[test]
    fn test_provider_keys_roundtrip() {
        let repo = repo();
        let mut keys = ProviderKeys::load(&repo);
        assert_eq!(keys.entries().len(), ADMIN_PROVIDERS.len());

        keys.set_key("zai", "zai-key").unwrap();
        keys.save("zai", &repo).unwrap();
        assert_eq!(ProviderKeys::load(&repo).entry("zai").unwrap().key, "zai-key");
        assert!(repo.load_settings().is_none());

        keys.remove("zai", &repo).unwrap();
        assert!(repo.provider_key("zai").is_none());
    }

    #[test]
    fn test_provider_keys_unknown_provider() {
        let mut keys = ProviderKeys::load(&repo());
        assert_eq!(
            keys.set_key("cohere", "k"),
            Err(AdminError::UnknownProvider("cohere".into()))
        );
    }

    #[test]
    fn test_provider_key_test_flow() {
        let mut keys = ProviderKeys::load(&repo());
        assert!(keys.begin_test("openai").unwrap().is_none());

        keys.set_key("openai", " sk-1 ").unwrap();
        let (ticket, request) = keys.begin_test("openai").unwrap().unwrap();
        assert_eq!(request.api_key, "sk-1");
        assert!(keys.entry("openai").unwrap().testing);

        assert!(keys.finish_test("openai", ticket, Err(ApiError::api(503, None))));
        let entry = keys.entry("openai").unwrap();
        assert!(!entry.testing);
        assert_eq!(entry.result.as_ref().unwrap().message, CONNECTION_ERROR);
    }

    #[test]
    fn test_provider_key_edit_drops_pending_test() {
        let mut keys = ProviderKeys::load(&repo());
        keys.set_key("xai", "old").unwrap();
        let (ticket, _) = keys.begin_test("xai").unwrap().unwrap();
        keys.set_key("xai", "new").unwrap();
        assert!(!keys.finish_test(
            "xai",
            ticket,
            Ok(TestApiResponse {
                success: true,
                message: "ok".into()
            })
        ));
        assert!(keys.entry("xai").unwrap().result.is_none());
    }

    #[test]
    fn test_example_curl() {
        let curl = example_curl("https://api.example.com/");
        assert!(curl.starts_with("curl -X POST \"https://api.example.com/api/generate\""));
        assert!(curl.contains("\"provider\":\"openrouter\""));
        assert_eq!(
            generate_endpoint("http://localhost:8000"),
            "POST http://localhost:8000/api/generate"
        );
    }

    #[test]
    fn test_example_request_is_valid_json() {
        let parsed: serde_json::Value = serde_json::from_str(&example_request()).unwrap();
        assert_eq!(parsed["role"], "Manager");
    }
}
