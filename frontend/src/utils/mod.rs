pub mod clipboard;
pub mod flash;
