//! Text views for each command

pub mod clean;
pub mod files;
