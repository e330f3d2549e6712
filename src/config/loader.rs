//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{AssetError, AssetResult};

use super::duration::{parse_duration, MaxAge};
use super::types::Config;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "assetprune.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AssetResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssetError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicit config file, or `assetprune.toml` in `cwd` if present,
/// or defaults.
///
/// An explicit path that does not exist is an error; a missing default file
/// is not.
pub fn load_or_default(
    explicit: Option<&Path>,
    cwd: &Path,
) -> AssetResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        return load_with_warnings(path);
    }

    let default_path = cwd.join(DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
        debug!("loading config from {}", default_path.display());
        return load_with_warnings(&default_path);
    }

    Ok((Config::default(), Vec::new()))
}

/// Apply `ASSETPRUNE_*` overrides. `lookup` is usually `std::env::var(..).ok()`.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> AssetResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup("ASSETPRUNE_OUTPUT_DIR") {
        config.output.dir = PathBuf::from(dir);
    }

    if let Some(manifest) = lookup("ASSETPRUNE_MANIFEST") {
        config.output.manifest = PathBuf::from(manifest);
    }

    if let Some(keep) = lookup("ASSETPRUNE_KEEP") {
        config.clean.keep = keep
            .trim()
            .parse()
            .map_err(|_| AssetError::InvalidConfig {
                file: PathBuf::from("ASSETPRUNE_KEEP"),
                message: format!("expected a non-negative integer, got '{}'", keep),
            })?;
    }

    if let Some(max_age) = lookup("ASSETPRUNE_MAX_AGE") {
        config.clean.max_age = MaxAge(parse_duration(&max_age)?);
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["output", "dir", "manifest", "clean", "keep", "max_age"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = if ca == *cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
