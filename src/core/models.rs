//! Backend Contract Types
//!
//! Request/response records mirrored 1:1 to the prompt generation backend,
//! plus the persisted [`Settings`] blob.

use serde::{Deserialize, Serialize};

// ============================================================================
// Provider Catalog
// ============================================================================

/// A selectable model offered by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
}

impl Model {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// An AI provider as listed by `GET /api/providers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub models: Vec<Model>,
}

impl Provider {
    pub fn find_model(&self, id: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.id == id)
    }
}

/// Display glyph for a provider id.
pub fn provider_icon(provider: &str) -> &'static str {
    match provider {
        "openai" => "🤖",
        "anthropic" => "🧠",
        "openrouter" => "🔀",
        "xai" => "⚡",
        "zai" => "🐉",
        _ => "🤖",
    }
}

// ============================================================================
// Persisted Settings
// ============================================================================

/// The finalized provider + credential + model choice.
///
/// Stored as JSON with camelCase keys so blobs written by earlier builds of
/// the app keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub provider: String,
    pub provider_label: String,
    pub api_key: String,
    pub model: String,
    pub model_name: String,
}

// ============================================================================
// Requests / Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestApiRequest {
    pub provider: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestApiResponse {
    pub success: bool,
    pub message: String,
}

impl TestApiResponse {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub business: String,
    pub role: String,
    pub provider: String,
    pub api_key: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub prompts: Vec<String>,
    pub role: String,
    pub business: String,
    pub provider: String,
    pub model: String,
}

/// Liveness payload from `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Error body the backend attaches to non-2xx responses.
///
/// Validation failures carry a structured `detail`, so it stays untyped
/// here and only string details are surfaced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
