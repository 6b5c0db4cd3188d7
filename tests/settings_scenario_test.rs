//! End-to-end flows against a scripted backend: configure a provider,
//! persist it, then generate with the stored settings.

use std::cell::RefCell;

use async_trait::async_trait;
use prompt_generator::core::api::{ApiError, PromptBackend, Result};
use prompt_generator::core::generation::{GenerationState, GenerationStatus};
use prompt_generator::core::models::{
    GenerateRequest, GenerateResponse, HealthStatus, Model, Provider, TestApiRequest,
    TestApiResponse,
};
use prompt_generator::core::prompt_form::PromptForm;
use prompt_generator::core::settings_flow::SettingsFlow;
use prompt_generator::core::storage::{MemoryStore, SettingsRepository};

#[derive(Default)]
struct ScriptedBackend {
    valid_key: String,
    generate_error: Option<String>,
    sent: RefCell<Vec<GenerateRequest>>,
}

#[async_trait(?Send)]
impl PromptBackend for ScriptedBackend {
    async fn providers(&self) -> Result<Vec<Provider>> {
        Ok(vec![
            Provider {
                value: "openai".into(),
                label: "OpenAI".into(),
                models: vec![
                    Model::new("gpt-4", "GPT-4"),
                    Model::new("gpt-4o-mini", "GPT-4o mini"),
                ],
            },
            Provider {
                value: "anthropic".into(),
                label: "Anthropic".into(),
                models: vec![Model::new("claude-sonnet", "Claude Sonnet")],
            },
        ])
    }

    async fn test_api_key(&self, request: &TestApiRequest) -> Result<TestApiResponse> {
        Ok(if request.api_key == self.valid_key {
            TestApiResponse {
                success: true,
                message: "API key is valid".into(),
            }
        } else {
            TestApiResponse::failed("Invalid API key")
        })
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        self.sent.borrow_mut().push(request.clone());
        if let Some(detail) = &self.generate_error {
            return Err(ApiError::api(400, Some(detail.clone())));
        }
        Ok(GenerateResponse {
            prompts: vec!["Help me prepare a weekly report".into()],
            role: request.role.clone(),
            business: request.business.clone(),
            provider: request.provider.clone(),
            model: request.model.clone(),
        })
    }

    async fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus { status: "ok".into() })
    }
}

async fn configure(backend: &ScriptedBackend, key: &str) -> SettingsFlow {
    let mut flow = SettingsFlow::open(None);
    flow.set_providers(backend.providers().await.unwrap());
    flow.select_provider("openai");
    flow.set_api_key(key);
    let (ticket, request) = flow.begin_test().unwrap();
    let outcome = backend.test_api_key(&request).await;
    assert!(flow.finish_test(ticket, outcome));
    flow
}

#[tokio::test]
async fn test_configure_openai_and_generate() {
    let backend = ScriptedBackend {
        valid_key: "sk-valid".into(),
        ..Default::default()
    };
    let repo = SettingsRepository::new(MemoryStore::new());

    let flow = configure(&backend, "sk-valid").await;
    assert!(flow.is_api_ready());
    assert_eq!(flow.model(), "gpt-4");

    let settings = flow.save().unwrap();
    assert_eq!(settings.provider_label, "OpenAI");
    assert_eq!(settings.model_name, "GPT-4");
    assert!(repo.save_settings(&settings));

    let stored = repo.load_settings().unwrap();
    let form = PromptForm::new("Автосервис в Москве, 5 сотрудников", "Менеджер");
    assert!(form.can_submit(Some(&stored), false));

    let request = form
        .compose(&stored, repo.system_prompt_for_request())
        .unwrap();
    let mut state = GenerationState::new();
    let token = state.begin();
    let outcome = backend.generate(&request).await;
    state.resolve(token, outcome);

    assert_eq!(state.status(), GenerationStatus::Success);
    let sent = backend.sent.borrow();
    assert_eq!(sent[0].api_key, "sk-valid");
    assert_eq!(sent[0].model, "gpt-4");
    assert_eq!(sent[0].system_prompt.as_deref(), Some(""));
}

#[tokio::test]
async fn test_rejected_key_blocks_save() {
    let backend = ScriptedBackend {
        valid_key: "sk-valid".into(),
        ..Default::default()
    };

    let flow = configure(&backend, "sk-wrong").await;
    assert!(!flow.is_api_ready());
    assert_eq!(flow.test_result().unwrap().message, "Invalid API key");
    assert!(flow.model_options().is_empty());
    assert!(flow.save().is_none());
}

#[tokio::test]
async fn test_switching_provider_requires_retest() {
    let backend = ScriptedBackend {
        valid_key: "sk-valid".into(),
        ..Default::default()
    };

    let mut flow = configure(&backend, "sk-valid").await;
    flow.select_provider("anthropic");
    assert!(!flow.can_save());
    assert!(flow.model().is_empty());
}

#[tokio::test]
async fn test_backend_detail_reaches_user() {
    let backend = ScriptedBackend {
        valid_key: "sk-valid".into(),
        generate_error: Some("invalid key".into()),
        ..Default::default()
    };
    let settings = configure(&backend, "sk-valid").await.save().unwrap();
    let request = PromptForm::new("Flower shop with delivery", "Florist")
        .compose(&settings, "")
        .unwrap();

    let mut state = GenerationState::new();
    let token = state.begin();
    let outcome = backend.generate(&request).await;
    state.resolve(token, outcome);

    assert_eq!(state.status(), GenerationStatus::Failed);
    assert_eq!(state.error(), Some("invalid key"));
}

#[tokio::test]
async fn test_custom_system_prompt_is_sent() {
    let backend = ScriptedBackend {
        valid_key: "sk-valid".into(),
        ..Default::default()
    };
    let repo = SettingsRepository::new(MemoryStore::new());
    repo.set_system_prompt("Five prompts for {role} at {business}");

    let settings = configure(&backend, "sk-valid").await.save().unwrap();
    let request = PromptForm::new("Flower shop with delivery", "Florist")
        .compose(&settings, repo.system_prompt_for_request())
        .unwrap();
    backend.generate(&request).await.unwrap();

    assert_eq!(
        backend.sent.borrow()[0].system_prompt.as_deref(),
        Some("Five prompts for {role} at {business}")
    );
}

#[test]
fn test_single_model_catalog() {
    let mut flow = SettingsFlow::open(None);
    flow.set_providers(vec![Provider {
        value: "openai".into(),
        label: "OpenAI".into(),
        models: vec![Model::new("gpt-4", "GPT-4")],
    }]);
    flow.set_api_key("sk-entered");
    let (ticket, _) = flow.begin_test().unwrap();
    flow.finish_test(
        ticket,
        Ok(TestApiResponse {
            success: true,
            message: "ok".into(),
        }),
    );

    let options: Vec<&str> = flow.model_options().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(options, vec!["GPT-4"]);

    let settings = flow.save().unwrap();
    assert_eq!(
        serde_json::to_value(&settings).unwrap(),
        serde_json::json!({
            "provider": "openai",
            "providerLabel": "OpenAI",
            "apiKey": "sk-entered",
            "model": "gpt-4",
            "modelName": "GPT-4"
        })
    );
}
