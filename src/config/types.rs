//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_MANIFEST_NAME;
use crate::domain::services::RetentionPolicy;

use super::duration::MaxAge;

/// Where the assets live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory containing the fingerprinted files
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Manifest path; relative paths resolve against `dir`
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            manifest: default_manifest(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public/assets")
}

fn default_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_NAME)
}

/// Retention settings for `clean`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Non-live versions kept per asset
    #[serde(default = "default_keep")]
    pub keep: usize,

    /// Versions younger than this are kept regardless of `keep`
    #[serde(default = "default_max_age")]
    pub max_age: MaxAge,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            keep: default_keep(),
            max_age: default_max_age(),
        }
    }
}

fn default_keep() -> usize {
    2
}

fn default_max_age() -> MaxAge {
    MaxAge::from_secs(60 * 60)
}

impl CleanConfig {
    pub fn policy(&self) -> RetentionPolicy {
        RetentionPolicy::new(self.keep, self.max_age.as_duration())
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub clean: CleanConfig,
}

impl Config {
    /// Manifest location with relative paths resolved against the output dir
    pub fn manifest_path(&self) -> PathBuf {
        if self.output.manifest.is_absolute() {
            self.output.manifest.clone()
        } else {
            self.output.dir.join(&self.output.manifest)
        }
    }
}
