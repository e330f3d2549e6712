//! Domain Layer
//!
//! Pure logic for classifying fingerprinted filenames and deciding which
//! versions survive a retention sweep.
//!
//! ## Structure
//!
//! - `entities/` - AssetRecord, Manifest, VersionFamily
//! - `value_objects/` - Fingerprint classification
//! - `services/` - Retention planning
//! - `ports/` - Interfaces for the output directory, clock and manifest
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
