pub mod generation_service;
pub mod local_storage;
pub mod settings_service;
