//! Common test utilities for assetprune integration tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated output directory plus helpers to write assets
//!   with chosen ages and to run the CLI
//! - Fixtures: the manifest used across tests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
