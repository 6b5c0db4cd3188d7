//! Core Module
//!
//! Platform-neutral state and I/O for the prompt generator. The browser
//! front-end owns the reactive wiring; everything here is plain Rust and
//! runs under `cargo test` on the host.

pub mod admin;
pub mod api;
pub mod generation;
pub mod models;
pub mod prompt_form;
pub mod settings_flow;
pub mod storage;
pub mod transient;

pub use api::{ApiClient, ApiError, PromptBackend};
pub use generation::{GenerationState, GenerationStatus, RequestToken};
pub use models::{GenerateRequest, GenerateResponse, Model, Provider, Settings};
pub use prompt_form::PromptForm;
pub use settings_flow::{SettingsFlow, TestTicket};
pub use storage::{MemoryStore, SettingsRepository, SettingsStore};
pub use transient::TransientFlag;
