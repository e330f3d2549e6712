//! Integration tests for `assetprune clean`.

mod common;

use std::time::Duration;

use common::*;

fn env_with_two_versions() -> (TestEnv, std::path::PathBuf, std::path::PathBuf) {
    let env = TestEnv::with_fixture_output();
    let old = env.output_asset("by_count.txt", "old", Duration::from_secs(7200));
    let current = env.output_asset("by_count.txt", "current", Duration::from_secs(7100));
    (env, old, current)
}

#[test]
fn clean_deletes_expired_versions() {
    let (env, old, current) = env_with_two_versions();

    let result = env.run(&["clean", "--keep", "1", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!old.exists());
    assert!(current.exists());
    assert!(result.stdout.contains("Deleted 1 file(s)"), "{}", result.stdout);
    for (_, digested) in FIXTURE_MANIFEST {
        assert!(env.output_path(digested).exists());
    }
}

#[test]
fn clean_default_policy_keeps_two_versions() {
    let (env, old, current) = env_with_two_versions();

    let result = env.run(&["clean", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(old.exists());
    assert!(current.exists());
}

#[test]
fn clean_dry_run_leaves_files() {
    let (env, old, _) = env_with_two_versions();
    let old_name = old.file_name().unwrap().to_str().unwrap().to_string();

    let result = env.run(&["clean", "--keep", "1", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(old.exists());
    assert!(result.stdout.contains("[dry run]"));
    assert!(result.stdout.contains(&format!("  - {}", old_name)));
    assert!(result.stdout.contains("Would delete 1 file(s)"));
}

#[test]
fn clean_max_age_keeps_young_versions() {
    let (env, old, _) = env_with_two_versions();

    let result = env.run(&["clean", "--keep", "0", "--max-age", "3h", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(old.exists());
}

#[test]
fn clean_rejects_bad_max_age() {
    let (env, old, _) = env_with_two_versions();

    let result = env.run(&["clean", "--max-age", "soon", "--yes"]);

    assert!(!result.success);
    assert!(result.stderr.contains("soon"), "{}", result.stderr);
    assert!(old.exists());
}

#[test]
fn clean_json_reports_each_file() {
    let (env, old, _) = env_with_two_versions();
    let old_name = old.file_name().unwrap().to_str().unwrap().to_string();

    let result = env.run(&["clean", "--keep", "1", "--json"]);
    assert!(result.success, "{}", result.combined_output());

    let events = result.json_lines();
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["command"], "clean");

    let deleted: Vec<_> = events
        .iter()
        .filter(|e| e["event"] == "file_deleted")
        .collect();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0]["name"], old_name.as_str());

    assert!(events
        .iter()
        .any(|e| e["event"] == "file_retained" && e["reason"] == "live"));

    let summary = events.last().unwrap();
    assert_eq!(summary["event"], "clean_complete");
    assert_eq!(summary["deleted"], 1);
    assert_eq!(summary["errors"], 0);
    assert_eq!(summary["success"], true);
}

#[test]
fn clean_json_dry_run_uses_would_delete() {
    let (env, old, _) = env_with_two_versions();

    let result = env.run(&["clean", "--keep", "1", "--json", "--dry-run"]);
    assert!(result.success, "{}", result.combined_output());

    let events = result.json_lines();
    assert!(events.iter().any(|e| e["event"] == "would_delete"));
    assert!(!events.iter().any(|e| e["event"] == "file_deleted"));
    assert_eq!(events.last().unwrap()["dry_run"], true);
    assert!(old.exists());
}

#[test]
fn clean_reads_config_file() {
    let (env, old, current) = env_with_two_versions();
    env.write_project_file("assetprune.toml", "[clean]\nkeep = 1\nmax_age = 0\n");

    let result = env.run(&["clean", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!old.exists());
    assert!(current.exists());
}

#[test]
fn clean_flags_override_config_file() {
    let (env, old, _) = env_with_two_versions();
    env.write_project_file("assetprune.toml", "[clean]\nkeep = 1\nmax_age = 0\n");

    let result = env.run(&["clean", "--keep", "5", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(old.exists());
}

#[test]
fn clean_env_overrides_config_file() {
    let (env, old, _) = env_with_two_versions();
    env.write_project_file("assetprune.toml", "[clean]\nkeep = 5\n");

    let result = env.run_with_env(&["clean", "--yes"], &[("ASSETPRUNE_KEEP", "1")]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!old.exists());
}

#[test]
fn clean_warns_about_unknown_config_keys() {
    let (env, _, _) = env_with_two_versions();
    env.write_project_file("assetprune.toml", "[clean]\nkepe = 1\n");

    let result = env.run(&["clean", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stderr.contains("did you mean 'keep'"),
        "{}",
        result.stderr
    );
}

#[test]
fn clean_explicit_config_path() {
    let (env, old, _) = env_with_two_versions();
    env.write_project_file("conf/prune.toml", "[clean]\nkeep = 1\nmax_age = \"0s\"\n");

    let result = env.run(&["--config", "conf/prune.toml", "clean", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!old.exists());
}

#[test]
fn clean_missing_directory_fails() {
    let env = TestEnv::empty();

    let result = env.run(&["clean", "--dir", "gone", "--yes"]);

    assert!(!result.success);
    assert_ne!(result.exit_code, 0);
    assert!(result.stderr.contains("gone"), "{}", result.stderr);
}

#[test]
fn clean_twice_deletes_nothing_the_second_time() {
    let (env, _, _) = env_with_two_versions();

    let first = env.run(&["clean", "--keep", "1", "--yes"]);
    let second = env.run(&["clean", "--keep", "1", "--yes"]);

    assert!(first.success && second.success);
    assert!(second.stdout.contains("Deleted 0 file(s)"), "{}", second.stdout);
}
