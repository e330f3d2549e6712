//! VersionFamily entity - every observed version of one logical asset

use std::collections::BTreeMap;

use super::AssetRecord;

/// Records sharing a family key, most recently modified first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFamily {
    key: String,
    versions: Vec<AssetRecord>,
}

impl VersionFamily {
    /// Build a family, sorting versions newest first.
    ///
    /// Equal mtimes are ordered by filename so the result is deterministic.
    pub fn new(key: impl Into<String>, mut versions: Vec<AssetRecord>) -> Self {
        versions.sort_by(|a, b| {
            b.mtime()
                .cmp(&a.mtime())
                .then_with(|| a.digested_path().cmp(b.digested_path()))
        });
        Self {
            key: key.into(),
            versions,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Versions ordered newest first
    pub fn versions(&self) -> &[AssetRecord] {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn into_versions(self) -> Vec<AssetRecord> {
        self.versions
    }
}

/// Partition records into families by family key.
///
/// Every record lands in exactly one family; families come back ordered by key.
pub fn group_families<I>(records: I) -> Vec<VersionFamily>
where
    I: IntoIterator<Item = AssetRecord>,
{
    let mut groups: BTreeMap<String, Vec<AssetRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.family_key().to_string())
            .or_default()
            .push(record);
    }

    groups
        .into_iter()
        .map(|(key, versions)| VersionFamily::new(key, versions))
        .collect()
}
