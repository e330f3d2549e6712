//! `clean` header, preview and summary

use std::fmt::Write;
use std::path::Path;

use assetprune::{CleanResult, RetentionPolicy};

pub fn render_clean_header(root: &Path, policy: &RetentionPolicy, dry_run: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Cleaning {} (keep {}, max age {}s){}",
        root.display(),
        policy.keep,
        policy.max_age.as_secs(),
        if dry_run { " [dry run]" } else { "" }
    );
    out
}

/// Files that a sweep will delete
pub fn render_clean_preview(result: &CleanResult) -> String {
    let mut out = String::new();
    for name in &result.deleted {
        let _ = writeln!(out, "  - {}", name);
    }
    out
}

pub fn render_clean_result(result: &CleanResult) -> String {
    let mut out = String::new();

    for failure in &result.errors {
        let _ = writeln!(out, "  ! {}: {}", failure.name, failure.message);
    }

    let verb = if result.dry_run {
        "Would delete"
    } else {
        "Deleted"
    };
    let _ = writeln!(
        out,
        "{} {} file(s), kept {}{}",
        verb,
        result.deleted.len(),
        result.retained.len(),
        if result.errors.is_empty() {
            String::new()
        } else {
            format!(", {} failed", result.errors.len())
        }
    );
    out
}
