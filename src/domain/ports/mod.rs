//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod manifest_repository;
pub mod output_directory;

pub use clock::Clock;
pub use manifest_repository::ManifestRepository;
pub use output_directory::{FsError, FsResult, OutputDirectory};
