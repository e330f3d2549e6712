//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Output directory implementations (Local, Memory)
//! - `repositories/` - Manifest loading
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use clock::{FixedClock, SystemClock};
pub use fs::{LocalDirectory, MemoryDirectory};
pub use repositories::JsonManifestRepository;
