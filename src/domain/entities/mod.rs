//! Domain Entities
//!
//! - `AssetRecord` - A classified file observed in the output directory
//! - `Manifest` - Logical name to live output filename mapping
//! - `VersionFamily` - All observed versions of one logical asset

mod asset_record;
mod family;
mod manifest;

pub use asset_record::AssetRecord;
pub use family::{group_families, VersionFamily};
pub use manifest::{Manifest, DEFAULT_MANIFEST_NAME};
