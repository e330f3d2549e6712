//! Clean Use Case
//!
//! Orchestrates the retention sweep over an output directory.
//!
//! This module handles:
//! - Taking a fresh inventory of the directory
//! - Planning which versions expire (see `domain::services::retention`)
//! - Deleting expired files, continuing past per-file failures

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::{CleanFailure, CleanResult, RetainedFile};
pub use use_case::CleanUseCase;
