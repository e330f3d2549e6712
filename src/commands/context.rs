//! Shared command setup: config resolution and output directory wiring

use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use assetprune::config::{apply_env_overrides, load_or_default};
use assetprune::domain::ports::ManifestRepository;
use assetprune::{Config, JsonManifestRepository, LocalDirectory, OutputPath, SystemClock};

use crate::cli::TargetArgs;

/// Resolve config from file, environment and CLI flags (in rising priority)
pub fn resolve_config(config_path: Option<&Path>, target: &TargetArgs) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let (config, warnings) =
        load_or_default(config_path, &cwd).context("Failed to load configuration")?;

    for warning in &warnings {
        warn!("{}", warning);
    }

    let mut config = apply_env_overrides(config, |key| std::env::var(key).ok())
        .context("Invalid ASSETPRUNE_* environment variable")?;

    if let Some(dir) = &target.dir {
        config.output.dir = dir.clone();
    }
    if let Some(manifest) = &target.manifest {
        config.output.manifest = manifest.clone();
    }

    Ok(config)
}

/// Open the configured output directory with its manifest
pub fn open_output_path(config: &Config) -> Result<OutputPath<LocalDirectory, SystemClock>> {
    let manifest_path = config.manifest_path();
    let manifest = JsonManifestRepository::new()
        .load(&manifest_path)
        .with_context(|| format!("Failed to load manifest {}", manifest_path.display()))?;

    Ok(OutputPath::new(
        LocalDirectory::new(&config.output.dir),
        manifest,
        SystemClock::new(),
    ))
}
