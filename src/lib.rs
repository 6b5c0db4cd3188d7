//! Prompt Generator - AI prompt generation for business roles
//!
//! Core library shared by the browser front-end: backend client, settings
//! repository, settings and generation state machines, and the admin model.

pub mod config;
pub mod core;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
