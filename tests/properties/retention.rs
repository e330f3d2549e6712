//! Property tests for the retention planner.

use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use proptest::prelude::*;

use assetprune::{AssetRecord, Decision, RetentionPlanner, RetentionPolicy};

const NOW_SECS: u64 = 10_000_000;

/// (family index, digest seed, age in seconds, live)
fn version() -> impl Strategy<Value = (u8, u32, u64, bool)> {
    (0u8..4, any::<u32>(), 0u64..20_000, prop::bool::weighted(0.2))
}

fn records(specs: &[(u8, u32, u64, bool)]) -> Vec<AssetRecord> {
    let now = UNIX_EPOCH + Duration::from_secs(NOW_SECS);
    let mut seen = HashSet::new();
    specs
        .iter()
        .filter(|(family, seed, _, _)| seen.insert((*family, *seed)))
        .map(|(family, seed, age, live)| {
            let name = format!("asset{family}-{seed:08x}.js");
            AssetRecord::from_filename(&name, now - Duration::from_secs(*age), *live)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Live files are never deleted, whatever the policy.
    #[test]
    fn property_live_files_survive(
        specs in proptest::collection::vec(version(), 0..24),
        keep in 0usize..4,
        max_age in 0u64..20_000,
    ) {
        let now = UNIX_EPOCH + Duration::from_secs(NOW_SECS);
        let plan = RetentionPlanner::plan(
            records(&specs),
            &RetentionPolicy::from_secs(keep, max_age),
            now,
        );

        for planned in plan.to_delete() {
            prop_assert!(!planned.record.is_live());
        }
    }

    /// PROPERTY: Each family keeps at least `keep` non-live versions (when it has them)
    /// and everything deleted is at least `max_age` old.
    #[test]
    fn property_per_family_bounds(
        specs in proptest::collection::vec(version(), 0..24),
        keep in 0usize..4,
        max_age in 0u64..20_000,
    ) {
        let now = UNIX_EPOCH + Duration::from_secs(NOW_SECS);
        let plan = RetentionPlanner::plan(
            records(&specs),
            &RetentionPolicy::from_secs(keep, max_age),
            now,
        );

        for family in plan.families() {
            let stale: Vec<_> = family
                .versions
                .iter()
                .filter(|v| !v.record.is_live())
                .collect();
            let kept = stale.iter().filter(|v| !v.decision.is_delete()).count();
            prop_assert!(kept >= keep.min(stale.len()));

            for v in &family.versions {
                if let Decision::Delete { age } = v.decision {
                    prop_assert!(age >= Duration::from_secs(max_age));
                }
            }
        }
    }

    /// PROPERTY: A deleted version is never newer than a kept-by-count one.
    #[test]
    fn property_deletes_are_oldest(
        specs in proptest::collection::vec(version(), 0..24),
        keep in 0usize..4,
    ) {
        let now = UNIX_EPOCH + Duration::from_secs(NOW_SECS);
        let plan =
            RetentionPlanner::plan(records(&specs), &RetentionPolicy::from_secs(keep, 0), now);

        for family in plan.families() {
            let oldest_recent: Option<SystemTime> = family
                .versions
                .iter()
                .filter(|v| matches!(v.decision, Decision::KeepRecent { .. }))
                .map(|v| v.record.mtime())
                .min();
            if let Some(cutoff) = oldest_recent {
                for v in family.versions.iter().filter(|v| v.decision.is_delete()) {
                    prop_assert!(v.record.mtime() <= cutoff);
                }
            }
        }
    }
}
