use serde::{Deserialize, Serialize};

/// Base URL used when neither an override nor a build-time default exists.
pub const LOCAL_API_URL: &str = "http://localhost:8000";

/// Build-time per-deployment default, e.g.
/// `PROMPT_GENERATOR_API_URL=https://api.example.com trunk build --release`.
const BUILD_API_URL: Option<&str> = option_env!("PROMPT_GENERATOR_API_URL");

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL used when no runtime override is stored.
    pub default_base_url: String,
}

/// UI behaviour configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long transient "copied"/"saved" indicators stay visible.
    pub feedback_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_base_url: build_default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { feedback_ms: 2_000 }
    }
}

fn build_default_base_url() -> String {
    BUILD_API_URL
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(LOCAL_API_URL)
        .to_string()
}

impl AppConfig {
    /// Load configuration for this build.
    ///
    /// The browser has no config file; everything comes from compile-time
    /// environment, with runtime overrides layered on by the settings
    /// repository.
    pub fn load() -> Self {
        let config = Self::default();
        tracing::debug!(
            default_base_url = %config.api.default_base_url,
            "Loaded build configuration"
        );
        config
    }
}

impl ApiConfig {
    /// Resolve the effective base URL.
    ///
    /// Order: non-blank runtime override, then the configured default. The
    /// result never ends in a slash.
    pub fn resolve_base_url(&self, override_url: Option<&str>) -> String {
        let chosen = override_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(self.default_base_url.as_str());
        chosen.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(default: &str) -> ApiConfig {
        ApiConfig {
            default_base_url: default.to_string(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.feedback_ms, 2_000);
        assert!(!config.api.default_base_url.is_empty());
    }

    #[test]
    fn test_override_wins() {
        let api = config_with("http://localhost:8000");
        assert_eq!(
            api.resolve_base_url(Some("https://prod.example.com")),
            "https://prod.example.com"
        );
    }

    #[test]
    fn test_blank_override_falls_back() {
        let api = config_with("https://default.example.com");
        assert_eq!(api.resolve_base_url(Some("   ")), "https://default.example.com");
        assert_eq!(api.resolve_base_url(None), "https://default.example.com");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let api = config_with("https://default.example.com/");
        assert_eq!(api.resolve_base_url(None), "https://default.example.com");
        assert_eq!(
            api.resolve_base_url(Some("https://other.example.com/base//")),
            "https://other.example.com/base"
        );
    }
}
