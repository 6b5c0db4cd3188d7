//! HTTP client for the prompt backend.
//!
//! The base URL is resolved on every request so that an override saved in
//! the admin panel takes effect without reloading the page.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use super::error::{ApiError, Result};
use super::PromptBackend;
use crate::core::models::{
    ApiErrorBody, GenerateRequest, GenerateResponse, HealthStatus, Provider, TestApiRequest,
    TestApiResponse,
};

pub const PROVIDERS_PATH: &str = "/api/providers";
pub const TEST_API_PATH: &str = "/api/test-api";
pub const GENERATE_PATH: &str = "/api/generate";
pub const HEALTH_PATH: &str = "/api/health";

type BaseUrlResolver = Arc<dyn Fn() -> String + Send + Sync>;

/// Backend client.
///
/// Cheap to clone; clones share the underlying connection pool and resolver.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: BaseUrlResolver,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &(self.base_url)())
            .finish()
    }
}

impl ApiClient {
    /// Client bound to a fixed base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self::with_resolver(move || base_url.clone())
    }

    /// Client that asks `resolver` for the base URL before each request.
    pub fn with_resolver<F>(resolver: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            http: Client::new(),
            base_url: Arc::new(resolver),
        }
    }

    /// Currently effective base URL, without a trailing slash.
    pub fn base_url(&self) -> String {
        (self.base_url)().trim().trim_end_matches('/').to_string()
    }

    /// Absolute URL for a backend route.
    pub fn endpoint(&self, path: &str) -> Result<String> {
        let base = self.base_url();
        let parsed = Url::parse(&base).map_err(|e| ApiError::InvalidBaseUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl {
                url: base,
                reason: "expected an absolute http(s) URL".to_string(),
            });
        }
        Ok(format!("{base}{path}"))
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let mut request = request.build()?;
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let resp = self.http.execute(request).await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();
            let detail = body.detail_text();
            tracing::warn!(status = status.as_u16(), ?detail, "Backend returned an error");
            return Err(ApiError::api(status.as_u16(), detail));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// `GET /api/providers`
    #[instrument(skip(self))]
    pub async fn get_providers(&self) -> Result<Vec<Provider>> {
        let url = self.endpoint(PROVIDERS_PATH)?;
        tracing::debug!(%url, "Fetching provider catalog");
        self.send_json(self.http.get(url)).await
    }

    /// `POST /api/test-api`
    #[instrument(skip(self, request), fields(provider = %request.provider))]
    pub async fn test_api_key(&self, request: &TestApiRequest) -> Result<TestApiResponse> {
        let url = self.endpoint(TEST_API_PATH)?;
        self.send_json(self.http.post(url).json(request)).await
    }

    /// `POST /api/generate`
    #[instrument(skip(self, request), fields(provider = %request.provider, model = %request.model))]
    pub async fn generate_prompts(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let url = self.endpoint(GENERATE_PATH)?;
        self.send_json(self.http.post(url).json(request)).await
    }

    /// `GET /api/health`
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint(HEALTH_PATH)?;
        self.send_json(self.http.get(url)).await
    }
}

#[async_trait(?Send)]
impl PromptBackend for ApiClient {
    async fn providers(&self) -> Result<Vec<Provider>> {
        self.get_providers().await
    }

    async fn test_api_key(&self, request: &TestApiRequest) -> Result<TestApiResponse> {
        ApiClient::test_api_key(self, request).await
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        self.generate_prompts(request).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        ApiClient::health(self).await
    }
}
