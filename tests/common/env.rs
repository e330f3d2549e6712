//! Test environment builder for isolated output directory testing.
//!
//! Provides `TestEnv` - a temp project directory containing an output
//! directory pre-populated with the fixture manifest and its live files.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};

use sha2::{Digest, Sha256};
use tempfile::TempDir;

use super::fixtures::{fixture_manifest_json, FIXTURE_MANIFEST};

/// Output directory name inside the temp project
pub const OUTPUT_DIR: &str = "public/assets";

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("bad json line {l:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated project with an output directory
pub struct TestEnv {
    pub project_root: TempDir,
}

impl TestEnv {
    /// Empty project with an empty output directory
    pub fn empty() -> Self {
        let project_root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(project_root.path().join(OUTPUT_DIR))
            .expect("Failed to create output dir");
        Self { project_root }
    }

    /// Project whose output directory holds the fixture manifest and its files
    pub fn with_fixture_output() -> Self {
        let env = Self::empty();
        env.write_output_file(".manifest.json", &fixture_manifest_json());
        for (_, digested) in FIXTURE_MANIFEST.iter().skip(1) {
            env.write_output_file(digested, "fixture");
        }
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.project_path(OUTPUT_DIR)
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir().join(name)
    }

    /// Write a file into the output directory with mtime "now"
    pub fn write_output_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.output_path(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write the fingerprinted version of `logical_path` for `content`,
    /// modified `age` ago. Returns the on-disk path.
    pub fn output_asset(&self, logical_path: &str, content: &str, age: Duration) -> PathBuf {
        let path = self.write_output_file(&digested_name(logical_path, content), content);
        set_mtime(&path, SystemTime::now() - age);
        path
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_assetprune"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("ASSETPRUNE_OUTPUT_DIR")
            .env_remove("ASSETPRUNE_MANIFEST")
            .env_remove("ASSETPRUNE_KEEP")
            .env_remove("ASSETPRUNE_MAX_AGE");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute assetprune");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Fingerprinted filename a build would produce for `content`.
///
/// Pre-digested names are returned unchanged. Otherwise the digest goes
/// before the final extension, keeping `.map` attached to it
/// (`by_count.txt.map` becomes `by_count-<digest>.txt.map`).
pub fn digested_name(logical_path: &str, content: &str) -> String {
    if logical_path.contains(".digested.") {
        return logical_path.to_string();
    }

    let digest = format!("{:x}", Sha256::digest(content.as_bytes()));
    let digest = &digest[..8];

    let without_map = logical_path.strip_suffix(".map");
    let base = without_map.unwrap_or(logical_path);
    let (stem, ext) = match base.rfind('.') {
        Some(dot) => base.split_at(dot),
        None => (base, ""),
    };
    let map = if without_map.is_some() { ".map" } else { "" };

    format!("{stem}-{digest}{ext}{map}")
}

/// Forge a file's modification time
pub fn set_mtime(path: &Path, mtime: SystemTime) {
    File::options()
        .write(true)
        .open(path)
        .and_then(|f| f.set_modified(mtime))
        .unwrap_or_else(|e| panic!("Failed to set mtime on {}: {}", path.display(), e));
}
