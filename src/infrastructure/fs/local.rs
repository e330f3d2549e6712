//! Local Output Directory
//!
//! Implements the OutputDirectory port for a directory on local disk.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::warn;

use crate::domain::ports::output_directory::{FsError, FsResult, OutputDirectory};
use crate::error::{AssetError, AssetResult};

/// A directory of assets on the local file system
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    root: PathBuf,
}

impl LocalDirectory {
    /// Create a LocalDirectory rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute or relative path of a child
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl OutputDirectory for LocalDirectory {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list(&self) -> AssetResult<Vec<String>> {
        if !self.root.is_dir() {
            return Err(AssetError::DirectoryNotFound {
                path: self.root.clone(),
            });
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            // Follows symlinks: a link to a file counts as a file
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!(
                    "skipping non UTF-8 filename in {}: {:?}",
                    self.root.display(),
                    raw
                ),
            }
        }

        names.sort();
        Ok(names)
    }

    fn modified(&self, name: &str) -> FsResult<SystemTime> {
        let path = self.path_of(name);
        std::fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .map_err(|e| FsError::from_io(e, &path))
    }

    fn remove(&self, name: &str) -> FsResult<()> {
        let path = self.path_of(name);
        std::fs::remove_file(&path).map_err(|e| FsError::from_io(e, &path))
    }
}
