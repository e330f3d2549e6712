//! OutputDirectory port - abstraction over the asset output directory
//!
//! This trait lets the inventory and retention logic run against the real
//! disk or an in-memory fake. All names are direct children of the root;
//! nothing here recurses.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::AssetResult;

/// Result type for file-level operations
pub type FsResult<T> = Result<T, FsError>;

/// File-level operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Map an I/O error, attaching the path it concerned
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(err, Path::new(""))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract output directory
///
/// Implementations:
/// - `LocalDirectory` - a directory on the local disk
/// - `MemoryDirectory` - in-memory for testing
pub trait OutputDirectory {
    /// Root path, for display and logging
    fn root(&self) -> &Path;

    /// Names of the regular files directly under the root.
    ///
    /// A missing root is `AssetError::DirectoryNotFound`.
    fn list(&self) -> AssetResult<Vec<String>>;

    /// Last modification time of `name`
    fn modified(&self, name: &str) -> FsResult<SystemTime>;

    /// Delete `name`
    fn remove(&self, name: &str) -> FsResult<()>;
}

impl<D: OutputDirectory + ?Sized> OutputDirectory for &D {
    fn root(&self) -> &Path {
        (**self).root()
    }

    fn list(&self) -> AssetResult<Vec<String>> {
        (**self).list()
    }

    fn modified(&self, name: &str) -> FsResult<SystemTime> {
        (**self).modified(name)
    }

    fn remove(&self, name: &str) -> FsResult<()> {
        (**self).remove(name)
    }
}
