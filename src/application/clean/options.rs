//! Clean options

use std::time::Duration;

use crate::domain::services::RetentionPolicy;

/// Options for a retention sweep
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Non-live versions kept per family regardless of age
    pub keep: usize,
    /// Grace window for versions beyond `keep`
    pub max_age: Duration,
    /// Whether this is a dry run (no actual deletion)
    pub dry_run: bool,
}

impl CleanOptions {
    /// Create new clean options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set keep count
    pub fn with_keep(mut self, keep: usize) -> Self {
        self.keep = keep;
        self
    }

    /// Set age window
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn policy(&self) -> RetentionPolicy {
        RetentionPolicy::new(self.keep, self.max_age)
    }
}
