//! ManifestRepository port - abstraction for reading the build manifest
//!
//! The manifest is written by the build pipeline; this crate only loads it.

use std::path::Path;

use crate::domain::entities::Manifest;
use crate::error::AssetResult;

pub trait ManifestRepository {
    /// Load the manifest at `path`.
    ///
    /// The returned manifest always protects the manifest file itself.
    fn load(&self, path: &Path) -> AssetResult<Manifest>;
}
