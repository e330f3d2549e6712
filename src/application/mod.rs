//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `OutputPath` - Inventory of an output directory (`files`) and entry point for `clean`
//! - `CleanUseCase` - Retention sweep: inventory, plan, delete

pub mod clean;
mod output_path;

pub use clean::{CleanFailure, CleanOptions, CleanResult, CleanUseCase, RetainedFile};
pub use output_path::OutputPath;
