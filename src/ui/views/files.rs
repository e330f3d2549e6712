//! `files` listing

use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

use chrono::{DateTime, Local};

use assetprune::AssetRecord;

/// Render a table of classified files, one per line
pub fn render_files(root: &Path, files: &BTreeMap<String, AssetRecord>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} files)", root.display(), files.len());

    if files.is_empty() {
        return out;
    }

    let name_width = files.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    let logical_width = files
        .values()
        .map(|r| r.logical_path().chars().count())
        .max()
        .unwrap_or(0);

    for record in files.values() {
        let mtime: DateTime<Local> = record.mtime().into();
        let digest = if record.digest().is_empty() {
            "-"
        } else {
            record.digest()
        };
        let _ = writeln!(
            out,
            "{} {:name_width$}  {:logical_width$}  {}  {}",
            if record.is_live() { "*" } else { " " },
            record.digested_path(),
            record.logical_path(),
            mtime.format("%Y-%m-%d %H:%M:%S"),
            digest,
        );
    }

    out
}
