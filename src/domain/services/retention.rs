//! Retention planning service
//!
//! Decides, per version family, which fingerprinted files survive a sweep.
//! No I/O: the caller supplies the records and the current time, and applies
//! the resulting plan.
//!
//! Within a family, versions are ranked newest first and then:
//! 1. files referenced by the manifest are always kept
//! 2. the first `keep` remaining versions are kept regardless of age
//! 3. later versions are kept while younger than `max_age`
//! 4. everything else is deleted

use std::time::{Duration, SystemTime};

use crate::domain::entities::{group_families, AssetRecord, VersionFamily};

/// How many versions to keep and for how long
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetentionPolicy {
    /// Non-live versions kept per family regardless of age
    pub keep: usize,
    /// Grace window for versions beyond `keep`
    pub max_age: Duration,
}

impl RetentionPolicy {
    pub fn new(keep: usize, max_age: Duration) -> Self {
        Self { keep, max_age }
    }

    /// Build from a non-negative number of seconds
    pub fn from_secs(keep: usize, max_age_secs: u64) -> Self {
        Self::new(keep, Duration::from_secs(max_age_secs))
    }
}

/// What happens to a single version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Referenced by the manifest
    KeepLive,
    /// Within the `keep` most recent non-live versions (0-based rank)
    KeepRecent { rank: usize },
    /// Beyond `keep` but younger than `max_age`
    KeepYoung { age: Duration },
    /// Expired
    Delete { age: Duration },
}

impl Decision {
    pub fn is_delete(&self) -> bool {
        matches!(self, Decision::Delete { .. })
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::KeepLive => write!(f, "live"),
            Decision::KeepRecent { rank } => write!(f, "recent #{}", rank + 1),
            Decision::KeepYoung { age } => write!(f, "young ({}s)", age.as_secs()),
            Decision::Delete { age } => write!(f, "expired ({}s)", age.as_secs()),
        }
    }
}

/// A version paired with its decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedVersion {
    pub record: AssetRecord,
    pub decision: Decision,
}

/// Decisions for one family, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyPlan {
    pub key: String,
    pub versions: Vec<PlannedVersion>,
}

impl FamilyPlan {
    /// Apply `policy` to an already grouped family
    pub fn decide(family: VersionFamily, policy: &RetentionPolicy, now: SystemTime) -> Self {
        let key = family.key().to_string();
        let mut rank = 0;

        let versions = family
            .into_versions()
            .into_iter()
            .map(|record| {
                let decision = if record.is_live() {
                    Decision::KeepLive
                } else {
                    let current_rank = rank;
                    rank += 1;
                    let age = record.age(now);
                    if current_rank < policy.keep {
                        Decision::KeepRecent { rank: current_rank }
                    } else if age < policy.max_age {
                        Decision::KeepYoung { age }
                    } else {
                        Decision::Delete { age }
                    }
                };
                PlannedVersion { record, decision }
            })
            .collect();

        Self { key, versions }
    }
}

/// Full retention plan for a directory snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionPlan {
    families: Vec<FamilyPlan>,
}

impl RetentionPlan {
    pub fn families(&self) -> &[FamilyPlan] {
        &self.families
    }

    /// Versions marked for deletion, in family order
    pub fn to_delete(&self) -> impl Iterator<Item = &PlannedVersion> {
        self.all().filter(|v| v.decision.is_delete())
    }

    /// Versions that survive the sweep
    pub fn retained(&self) -> impl Iterator<Item = &PlannedVersion> {
        self.all().filter(|v| !v.decision.is_delete())
    }

    pub fn delete_count(&self) -> usize {
        self.to_delete().count()
    }

    fn all(&self) -> impl Iterator<Item = &PlannedVersion> {
        self.families.iter().flat_map(|f| f.versions.iter())
    }
}

/// Retention planner - groups records and applies a policy to each family
pub struct RetentionPlanner;

impl RetentionPlanner {
    /// Plan a sweep over `records` as of `now`
    pub fn plan<I>(records: I, policy: &RetentionPolicy, now: SystemTime) -> RetentionPlan
    where
        I: IntoIterator<Item = AssetRecord>,
    {
        let families = group_families(records)
            .into_iter()
            .map(|family| FamilyPlan::decide(family, policy, now))
            .collect();

        RetentionPlan { families }
    }
}
