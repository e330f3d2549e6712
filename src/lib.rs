//! assetprune - output directory manager for fingerprinted static assets
//!
//! A build pipeline writes content-fingerprinted files (`app-9f86d081.js`)
//! into an output directory and records the live ones in a manifest.
//! assetprune classifies what is on disk and reclaims space by deleting
//! superseded versions, never touching anything the manifest references.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CleanOptions, CleanResult, OutputPath};
pub use config::Config;
pub use domain::entities::{AssetRecord, Manifest, VersionFamily};
pub use domain::services::{Decision, RetentionPlan, RetentionPlanner, RetentionPolicy};
pub use domain::value_objects::{classify, ClassifiedName, Fingerprint};
pub use error::{AssetError, AssetResult};
pub use infrastructure::{
    FixedClock, JsonManifestRepository, LocalDirectory, MemoryDirectory, SystemClock,
};
