//! Generation request lifecycle.
//!
//! idle -> loading -> success(data) | error(message)
//!
//! Every call to [`GenerationState::begin`] hands out a [`RequestToken`];
//! only the newest token may resolve the state, so an overtaken request can
//! never overwrite a newer result.

use crate::core::api::{self, GENERATION_ERROR};
use crate::core::models::GenerateResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Coarse view of the state for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationState {
    loading: bool,
    data: Option<GenerateResponse>,
    error: Option<String>,
    latest: u64,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&GenerateResponse> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> GenerationStatus {
        if self.loading {
            GenerationStatus::Loading
        } else if self.data.is_some() {
            GenerationStatus::Success
        } else if self.error.is_some() {
            GenerationStatus::Failed
        } else {
            GenerationStatus::Idle
        }
    }

    /// Enter loading and clear the previous error. Earlier data stays
    /// visible until this request resolves.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        RequestToken(self.latest)
    }

    /// Settle the request identified by `token`.
    ///
    /// Sets exactly one of data/error and leaves loading. Returns `false`
    /// (state untouched) if a newer request has been started since.
    pub fn resolve(&mut self, token: RequestToken, outcome: api::Result<GenerateResponse>) -> bool {
        if token.0 != self.latest {
            tracing::debug!(?token, latest = self.latest, "Discarding superseded generation");
            return false;
        }
        match outcome {
            Ok(response) => {
                tracing::info!(prompts = response.prompts.len(), "Generation succeeded");
                self.data = Some(response);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Generation failed: {e}");
                self.error = Some(e.user_message(GENERATION_ERROR));
                self.data = None;
            }
        }
        self.loading = false;
        true
    }

    /// Clear data and error. A request still in flight keeps its token and
    /// may still land.
    pub fn reset(&mut self) {
        self.data = None;
        self.error = None;
    }
}
