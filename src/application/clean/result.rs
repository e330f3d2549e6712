//! Clean result types

use crate::domain::services::Decision;

/// A file that survived the sweep, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetainedFile {
    pub name: String,
    pub decision: Decision,
}

/// A file that should have been deleted but could not be
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanFailure {
    pub name: String,
    pub message: String,
}

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Files that were deleted (or would be deleted in dry run)
    pub deleted: Vec<String>,
    /// Files that were kept
    pub retained: Vec<RetainedFile>,
    /// Deletion failures; the sweep continued past each one
    pub errors: Vec<CleanFailure>,
    /// Whether files were left in place
    pub dry_run: bool,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a deleted file
    pub fn add_deleted(&mut self, name: impl Into<String>) {
        self.deleted.push(name.into());
    }

    /// Add a retained file
    pub fn add_retained(&mut self, name: impl Into<String>, decision: Decision) {
        self.retained.push(RetainedFile {
            name: name.into(),
            decision,
        });
    }

    /// Add a deletion failure
    pub fn add_error(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.errors.push(CleanFailure {
            name: name.into(),
            message: message.into(),
        });
    }

    /// Check if every planned deletion succeeded
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
