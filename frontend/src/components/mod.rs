pub mod admin;
pub mod design_system;
pub mod layout;
pub mod prompt_form;
pub mod result_display;
pub mod settings_modal;
