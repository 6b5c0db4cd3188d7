//! Generation form input rules.

use crate::core::models::{GenerateRequest, Settings};

/// Minimum business description length, in characters after trimming.
pub const MIN_BUSINESS_CHARS: usize = 10;

/// Minimum role length, in characters after trimming.
pub const MIN_ROLE_CHARS: usize = 2;

/// Quick-pick roles offered under the role field.
pub const ROLE_SUGGESTIONS: &[&str] = &[
    "Manager",
    "HR Specialist",
    "Accountant",
    "Director",
    "Deputy Director",
    "Sales Associate",
    "Marketer",
    "Analyst",
];

/// The two free-text fields of the generation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptForm {
    pub business: String,
    pub role: String,
}

fn char_len(s: &str) -> usize {
    s.trim().chars().count()
}

impl PromptForm {
    pub fn new(business: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            business: business.into(),
            role: role.into(),
        }
    }

    pub fn business_ok(&self) -> bool {
        char_len(&self.business) >= MIN_BUSINESS_CHARS
    }

    pub fn role_ok(&self) -> bool {
        char_len(&self.role) >= MIN_ROLE_CHARS
    }

    pub fn is_valid(&self) -> bool {
        self.business_ok() && self.role_ok()
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self, settings: Option<&Settings>, loading: bool) -> bool {
        settings.is_some() && self.is_valid() && !loading
    }

    /// Build the request from trimmed inputs and the active settings.
    ///
    /// `system_prompt` is always sent; pass `""` when no override is stored.
    pub fn compose(
        &self,
        settings: &Settings,
        system_prompt: impl Into<String>,
    ) -> Option<GenerateRequest> {
        if !self.is_valid() {
            return None;
        }
        Some(GenerateRequest {
            business: self.business.trim().to_string(),
            role: self.role.trim().to_string(),
            provider: settings.provider.clone(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            system_prompt: Some(system_prompt.into()),
        })
    }
}
