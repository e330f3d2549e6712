//! Terminal and NDJSON output for the CLI

pub mod json;
pub mod views;
