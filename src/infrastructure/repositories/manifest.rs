//! JSON Manifest Repository
//!
//! Implements the ManifestRepository port for the JSON manifest the build
//! pipeline writes next to its output. Both value shapes are accepted:
//!
//! ```json
//! { "one.txt": "one-f2e1ec14.txt" }
//! { "one.txt": { "digested_path": "one-f2e1ec14.txt", "integrity": "sha384-..." } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::domain::entities::{Manifest, DEFAULT_MANIFEST_NAME};
use crate::domain::ports::ManifestRepository;
use crate::error::{AssetError, AssetResult};

/// Reads `.manifest.json` style files
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestRepository;

impl JsonManifestRepository {
    pub fn new() -> Self {
        Self
    }

    /// Parse manifest JSON. `manifest_name` is added as a reserved entry.
    pub fn parse(&self, content: &str, manifest_name: &str) -> Result<Manifest, String> {
        let raw: BTreeMap<String, JsonManifestValue> =
            serde_json::from_str(content).map_err(|e| e.to_string())?;

        let mut manifest = Manifest::with_self_entry(manifest_name);
        for (logical, value) in raw {
            manifest.insert(logical, value.into_digested_path());
        }
        Ok(manifest)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonManifestValue {
    Path(String),
    Entry { digested_path: String },
}

impl JsonManifestValue {
    fn into_digested_path(self) -> String {
        match self {
            JsonManifestValue::Path(path) => path,
            JsonManifestValue::Entry { digested_path } => digested_path,
        }
    }
}

impl ManifestRepository for JsonManifestRepository {
    fn load(&self, path: &Path) -> AssetResult<Manifest> {
        let manifest_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_MANIFEST_NAME);

        if !path.exists() {
            debug!("no manifest at {}, treating as empty", path.display());
            return Ok(Manifest::with_self_entry(manifest_name));
        }

        let content = std::fs::read_to_string(path)?;
        self.parse(&content, manifest_name)
            .map_err(|message| AssetError::InvalidManifest {
                file: path.to_path_buf(),
                message,
            })
    }
}
