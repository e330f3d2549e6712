//! Clean Use Case
//!
//! Orchestrates the retention sweep.

use log::{debug, info, warn};

use crate::application::OutputPath;
use crate::domain::ports::{Clock, OutputDirectory};
use crate::domain::services::RetentionPlanner;
use crate::error::AssetResult;

use super::options::CleanOptions;
use super::result::CleanResult;

/// Clean use case - removes expired fingerprinted versions
pub struct CleanUseCase<'a, D, C>
where
    D: OutputDirectory,
    C: Clock,
{
    output: &'a OutputPath<D, C>,
}

impl<'a, D, C> CleanUseCase<'a, D, C>
where
    D: OutputDirectory,
    C: Clock,
{
    /// Create a new clean use case
    pub fn new(output: &'a OutputPath<D, C>) -> Self {
        Self { output }
    }

    /// Execute the sweep.
    ///
    /// Fails only if the directory cannot be listed. Individual deletion
    /// failures are recorded in the result and the sweep carries on.
    pub fn execute(&self, options: &CleanOptions) -> AssetResult<CleanResult> {
        let files = self.output.files()?;
        let now = self.output.clock().now();
        let plan = RetentionPlanner::plan(files.into_values(), &options.policy(), now);

        let mut result = CleanResult::new();
        result.dry_run = options.dry_run;

        for family in plan.families() {
            for version in &family.versions {
                let name = version.record.digested_path();

                if !version.decision.is_delete() {
                    debug!("keep {} [{}]", name, version.decision);
                    result.add_retained(name, version.decision);
                    continue;
                }

                if options.dry_run {
                    debug!("would delete {} [{}]", name, version.decision);
                    result.add_deleted(name);
                    continue;
                }

                match self.output.directory().remove(name) {
                    Ok(()) => {
                        debug!("deleted {} [{}]", name, version.decision);
                        result.add_deleted(name);
                    }
                    // Someone else got there first; the goal state holds.
                    Err(e) if e.is_not_found() => {
                        debug!("{} already gone", name);
                        result.add_deleted(name);
                    }
                    Err(e) => {
                        warn!("failed to delete {}: {}", name, e);
                        result.add_error(name, e.to_string());
                    }
                }
            }
        }

        info!(
            "clean {}: {} deleted, {} retained, {} failed (keep={}, max_age={}s)",
            self.output.directory().root().display(),
            result.deleted.len(),
            result.retained.len(),
            result.errors.len(),
            options.keep,
            options.max_age.as_secs()
        );

        Ok(result)
    }
}
