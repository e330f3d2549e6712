//! In-memory Output Directory
//!
//! A fake directory with settable modification times. Lets retention logic
//! be exercised without touching disk or forging real mtimes.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::ports::output_directory::{FsError, FsResult, OutputDirectory};
use crate::error::{AssetError, AssetResult};

#[derive(Debug, Default)]
pub struct MemoryDirectory {
    root: PathBuf,
    exists: bool,
    files: RefCell<BTreeMap<String, SystemTime>>,
    locked: RefCell<HashSet<String>>,
}

impl MemoryDirectory {
    /// An empty, existing directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exists: true,
            ..Self::default()
        }
    }

    /// A directory that does not exist; `list` fails
    pub fn missing(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exists: false,
            ..Self::default()
        }
    }

    /// Add or replace a file with the given mtime
    pub fn add(&self, name: &str, mtime: SystemTime) {
        self.files.borrow_mut().insert(name.to_string(), mtime);
    }

    /// Make `remove(name)` fail with permission denied
    pub fn fail_removal(&self, name: &str) {
        self.locked.borrow_mut().insert(name.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.borrow().contains_key(name)
    }

    /// Current filenames, sorted
    pub fn names(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl OutputDirectory for MemoryDirectory {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list(&self) -> AssetResult<Vec<String>> {
        if !self.exists {
            return Err(AssetError::DirectoryNotFound {
                path: self.root.clone(),
            });
        }
        Ok(self.names())
    }

    fn modified(&self, name: &str) -> FsResult<SystemTime> {
        self.files
            .borrow()
            .get(name)
            .copied()
            .ok_or_else(|| FsError::NotFound(self.root.join(name)))
    }

    fn remove(&self, name: &str) -> FsResult<()> {
        if self.locked.borrow().contains(name) {
            return Err(FsError::PermissionDenied(self.root.join(name)));
        }
        self.files
            .borrow_mut()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(self.root.join(name)))
    }
}
