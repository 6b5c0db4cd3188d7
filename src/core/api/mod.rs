//! Backend API Module
//!
//! - `client`: reqwest-based [`ApiClient`] for the four backend routes
//! - `error`: [`ApiError`] and the user-facing fallback messages
//!
//! UI code talks to the backend through [`PromptBackend`] so that views can
//! run against a scripted backend in tests.

pub mod client;
pub mod error;

use async_trait::async_trait;

pub use client::ApiClient;
pub use error::{ApiError, Result, CONNECTION_ERROR, GENERATION_ERROR};

use crate::core::models::{
    GenerateRequest, GenerateResponse, HealthStatus, Provider, TestApiRequest, TestApiResponse,
};

/// The prompt backend as seen by the UI.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait PromptBackend {
    /// Provider catalog with nested models.
    async fn providers(&self) -> Result<Vec<Provider>>;

    /// Check a credential for a provider.
    async fn test_api_key(&self, request: &TestApiRequest) -> Result<TestApiResponse>;

    /// Generate prompts for a business role.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse>;

    /// Backend liveness.
    async fn health(&self) -> Result<HealthStatus>;
}

#[async_trait(?Send)]
impl<T: PromptBackend + ?Sized> PromptBackend for std::rc::Rc<T> {
    async fn providers(&self) -> Result<Vec<Provider>> {
        (**self).providers().await
    }

    async fn test_api_key(&self, request: &TestApiRequest) -> Result<TestApiResponse> {
        (**self).test_api_key(request).await
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        (**self).generate(request).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        (**self).health().await
    }
}

/// Fold a credential test outcome into the result shown to the user.
///
/// Any failure to get a response becomes "Connection error"; a backend
/// `message` is passed through unchanged.
pub fn fold_test_outcome(provider: &str, outcome: Result<TestApiResponse>) -> TestApiResponse {
    outcome.unwrap_or_else(|e| {
        tracing::warn!(provider, "API key test failed: {e}");
        TestApiResponse::failed(CONNECTION_ERROR)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_passes_backend_message_through() {
        let response = TestApiResponse {
            success: false,
            message: "Invalid API key".to_string(),
        };
        let folded = fold_test_outcome("openai", Ok(response.clone()));
        assert_eq!(folded, response);
    }

    #[test]
    fn test_fold_errors_to_connection_error() {
        for err in [
            ApiError::api(500, Some("boom".to_string())),
            ApiError::InvalidBaseUrl {
                url: "nope".to_string(),
                reason: "relative URL without a base".to_string(),
            },
        ] {
            let folded = fold_test_outcome("openai", Err(err));
            assert!(!folded.success);
            assert_eq!(folded.message, CONNECTION_ERROR);
        }
    }
}
