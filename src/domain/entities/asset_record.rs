//! AssetRecord entity - one classified file in the output directory
//!
//! Records are derived, never stored: they are rebuilt from a directory
//! listing on every inventory pass.

use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::domain::value_objects::{ClassifiedName, Fingerprint};

/// A file observed in the output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRecord {
    /// Filename on disk
    digested_path: String,
    /// Logical (pre-fingerprint) name
    logical_path: String,
    /// Digest token, empty when unfingerprinted
    digest: String,
    /// Grouping key for historical versions
    family_key: String,
    /// Which fingerprint syntax the filename carries
    #[serde(rename = "kind", serialize_with = "serialize_kind")]
    fingerprint: Fingerprint,
    /// Last modification time
    #[serde(serialize_with = "serialize_mtime")]
    mtime: SystemTime,
    /// Whether the current manifest references this file
    is_live: bool,
}

impl AssetRecord {
    /// Build a record from a classified filename
    pub fn new(name: ClassifiedName, mtime: SystemTime, is_live: bool) -> Self {
        let digested_path = name.filename().to_string();
        let logical_path = name.logical_path().to_string();
        let digest = name.digest().to_string();
        let family_key = name.family_key().to_string();

        Self {
            digested_path,
            logical_path,
            digest,
            family_key,
            fingerprint: name.into_fingerprint(),
            mtime,
            is_live,
        }
    }

    /// Classify `filename` and build a record in one step
    pub fn from_filename(filename: &str, mtime: SystemTime, is_live: bool) -> Self {
        Self::new(ClassifiedName::classify(filename), mtime, is_live)
    }

    pub fn digested_path(&self) -> &str {
        &self.digested_path
    }

    pub fn logical_path(&self) -> &str {
        &self.logical_path
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn family_key(&self) -> &str {
        &self.family_key
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn is_predigested(&self) -> bool {
        self.fingerprint.is_predigested()
    }

    pub fn mtime(&self) -> SystemTime {
        self.mtime
    }

    pub fn is_live(&self) -> bool {
        self.is_live
    }

    /// Age relative to `now`; future timestamps count as zero
    pub fn age(&self, now: SystemTime) -> std::time::Duration {
        now.duration_since(self.mtime).unwrap_or_default()
    }

    /// Modification time as an RFC 3339 UTC timestamp
    pub fn mtime_rfc3339(&self) -> String {
        format_mtime(self.mtime)
    }
}

fn format_mtime(mtime: SystemTime) -> String {
    DateTime::<Utc>::from(mtime).to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn serialize_mtime<S: Serializer>(mtime: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_mtime(*mtime))
}

fn serialize_kind<S: Serializer>(
    fingerprint: &Fingerprint,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(fingerprint.kind())
}
