//! Output Directory Implementations
//!
//! Concrete implementations of the OutputDirectory port.

mod local;
mod memory;

pub use local::LocalDirectory;
pub use memory::MemoryDirectory;
