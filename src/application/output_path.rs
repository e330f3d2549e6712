//! Output Path
//!
//! Owns an output directory and a manifest snapshot. `files()` classifies
//! everything currently on disk; `clean()` runs the retention sweep.

use std::collections::BTreeMap;
use std::time::Duration;

use log::debug;

use crate::domain::entities::{AssetRecord, Manifest};
use crate::domain::ports::{Clock, OutputDirectory};
use crate::domain::value_objects::ClassifiedName;
use crate::error::AssetResult;

use super::clean::{CleanOptions, CleanResult, CleanUseCase};

/// A directory of fingerprinted assets plus the manifest that pins the live set
pub struct OutputPath<D, C>
where
    D: OutputDirectory,
    C: Clock,
{
    directory: D,
    manifest: Manifest,
    clock: C,
}

impl<D, C> OutputPath<D, C>
where
    D: OutputDirectory,
    C: Clock,
{
    pub fn new(directory: D, manifest: Manifest, clock: C) -> Self {
        Self {
            directory,
            manifest,
            clock,
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Classify every file currently in the directory, keyed by filename.
    ///
    /// Each call rescans the directory. Files that disappear between listing
    /// and stat are skipped.
    pub fn files(&self) -> AssetResult<BTreeMap<String, AssetRecord>> {
        let mut files = BTreeMap::new();

        for name in self.directory.list()? {
            let mtime = match self.directory.modified(&name) {
                Ok(mtime) => mtime,
                Err(e) => {
                    debug!("skipping {}: {}", name, e);
                    continue;
                }
            };
            let is_live = self.manifest.is_live(&name);
            let record = AssetRecord::new(ClassifiedName::classify(&name), mtime, is_live);
            files.insert(name, record);
        }

        Ok(files)
    }

    /// Delete superseded versions, keeping `keep` per family plus anything
    /// younger than `max_age_secs` and everything the manifest references.
    pub fn clean(&self, keep: usize, max_age_secs: u64) -> AssetResult<CleanResult> {
        let options = CleanOptions::new()
            .with_keep(keep)
            .with_max_age(Duration::from_secs(max_age_secs));
        self.clean_with(&options)
    }

    /// Run a sweep with full options (dry run, durations)
    pub fn clean_with(&self, options: &CleanOptions) -> AssetResult<CleanResult> {
        CleanUseCase::new(self).execute(options)
    }
}
