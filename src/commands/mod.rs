//! Command handlers

pub mod clean;
pub mod context;
pub mod files;

pub use clean::cmd_clean;
pub use files::cmd_files;
