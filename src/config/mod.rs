//! Configuration module for assetprune
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETPRUNE_*)
//! 3. Config file (`assetprune.toml` or `--config`)
//! 4. Built-in defaults (lowest priority)

mod duration;
mod loader;
mod types;

pub use duration::{parse_duration, MaxAge};
pub use loader::{
    apply_env_overrides, load_or_default, load_with_warnings, ConfigWarning, DEFAULT_CONFIG_FILE,
};
pub use types::{CleanConfig, Config, OutputConfig};
