//! Files command handler
//!
//! Lists every file in the output directory with its classification.

use std::path::Path;

use anyhow::{Context, Result};

use assetprune::domain::ports::OutputDirectory;

use crate::cli::TargetArgs;
use crate::ui::json::{emit_event, FileEvent, StartEvent};
use crate::ui::views::files::render_files;

use super::context::{open_output_path, resolve_config};

pub fn cmd_files(config_path: Option<&Path>, target: &TargetArgs, json: bool) -> Result<()> {
    let config = resolve_config(config_path, target)?;
    let output = open_output_path(&config)?;
    let root = output.directory().root().to_path_buf();

    let files = output
        .files()
        .with_context(|| format!("Failed to list {}", root.display()))?;

    if json {
        let dir = root.display().to_string();
        emit_event(&StartEvent::new("files", &dir))?;
        for record in files.values() {
            emit_event(&FileEvent::new(record))?;
        }
    } else {
        print!("{}", render_files(&root, &files));
    }

    Ok(())
}
