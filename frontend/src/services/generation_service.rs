use leptos::prelude::*;
use leptos::task::spawn_local;
use prompt_generator::core::api::PromptBackend;
use prompt_generator::core::generation::{GenerationState, GenerationStatus};
use prompt_generator::core::models::{GenerateRequest, GenerateResponse};

/// Reactive wrapper over [`GenerationState`].
#[derive(Clone, Copy)]
pub struct GenerationService {
    pub state: RwSignal<GenerationState>,
}

impl Default for GenerationService {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(GenerationState::new()),
        }
    }

    /// Send `request` through `backend`. Only the newest call may settle
    /// the state.
    pub fn generate<B>(&self, backend: B, request: GenerateRequest)
    where
        B: PromptBackend + 'static,
    {
        let Some(token) = self.state.try_update(|s| s.begin()) else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            let outcome = backend.generate(&request).await;
            state.try_update(|s| s.resolve(token, outcome));
        });
    }

    pub fn reset(&self) {
        self.state.update(|s| s.reset());
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn status(&self) -> GenerationStatus {
        self.state.with(|s| s.status())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    pub fn data(&self) -> Option<GenerateResponse> {
        self.state.with(|s| s.data().cloned())
    }
}

pub fn provide_generation_service() -> GenerationService {
    let service = GenerationService::new();
    provide_context(service);
    service
}

pub fn use_generation_service() -> GenerationService {
    expect_context::<GenerationService>()
}
