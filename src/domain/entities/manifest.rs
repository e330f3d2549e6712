//! Manifest entity - logical path to live output filename
//!
//! The manifest is owned and persisted by the build pipeline. This crate only
//! reads it. A reverse set of live filenames is maintained alongside the
//! forward mapping so liveness checks are O(1). Reserved names (the
//! manifest's own file) stay live whatever the entries say.

use std::collections::{BTreeMap, HashSet};

/// Conventional on-disk name of the manifest file
pub const DEFAULT_MANIFEST_NAME: &str = ".manifest.json";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
    live: HashSet<String>,
    reserved: HashSet<String>,
}

impl Manifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manifest that already protects its own file
    pub fn with_self_entry(manifest_name: impl Into<String>) -> Self {
        let name = manifest_name.into();
        let mut manifest = Self::new();
        manifest.insert(name.clone(), name.clone());
        manifest.reserve(name);
        manifest
    }

    /// Keep `filename` live regardless of later `insert` calls
    pub fn reserve(&mut self, filename: impl Into<String>) {
        self.reserved.insert(filename.into());
    }

    /// Map a logical path to its live output filename
    ///
    /// Replacing an entry drops the previous filename from the live set
    /// unless another logical path still points at it.
    pub fn insert(&mut self, logical_path: impl Into<String>, digested_path: impl Into<String>) {
        let digested_path = digested_path.into();
        self.live.insert(digested_path.clone());

        if let Some(previous) = self.entries.insert(logical_path.into(), digested_path) {
            if !self.entries.values().any(|v| *v == previous) {
                self.live.remove(&previous);
            }
        }
    }

    /// Live output filename for a logical path
    pub fn get(&self, logical_path: &str) -> Option<&str> {
        self.entries.get(logical_path).map(String::as_str)
    }

    /// Whether `digested_path` is referenced by any entry or reserved
    pub fn is_live(&self, digested_path: &str) -> bool {
        self.live.contains(digested_path) || self.reserved.contains(digested_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(logical_path, digested_path)` pairs in logical order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Manifest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut manifest = Manifest::new();
        for (logical, digested) in iter {
            manifest.insert(logical, digested);
        }
        manifest
    }
}
