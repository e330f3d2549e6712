//! Clean command handler
//!
//! Deletes superseded fingerprinted versions from the output directory.

use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use assetprune::config::parse_duration;
use assetprune::domain::ports::OutputDirectory;
use assetprune::CleanOptions;

use crate::cli::TargetArgs;
use crate::ui::json::{emit_event, write_clean_events, StartEvent};
use crate::ui::views::clean::{render_clean_header, render_clean_preview, render_clean_result};

use super::context::{open_output_path, resolve_config};

/// Execute the clean command
#[allow(clippy::too_many_arguments)]
pub fn cmd_clean(
    config_path: Option<&Path>,
    target: &TargetArgs,
    keep: Option<usize>,
    max_age: Option<&str>,
    dry_run: bool,
    yes: bool,
    json: bool,
) -> Result<()> {
    let mut config = resolve_config(config_path, target)?;
    if let Some(keep) = keep {
        config.clean.keep = keep;
    }
    if let Some(max_age) = max_age {
        config.clean.max_age.0 = parse_duration(max_age)?;
    }

    let policy = config.clean.policy();
    let options = CleanOptions::new()
        .with_keep(policy.keep)
        .with_max_age(policy.max_age)
        .with_dry_run(dry_run);

    let output = open_output_path(&config)?;
    let root = output.directory().root().to_path_buf();

    if json {
        let dir = root.display().to_string();
        emit_event(&StartEvent::new("clean", &dir))?;
    } else {
        print!("{}", render_clean_header(&root, &policy, dry_run));
    }

    // Confirm interactively before deleting, unless told not to ask
    let interactive = !json && !yes && !dry_run && std::io::stdin().is_terminal();
    if interactive {
        let preview = output
            .clean_with(&options.clone().with_dry_run(true))
            .with_context(|| format!("Failed to scan {}", root.display()))?;

        if preview.deleted.is_empty() {
            print!("{}", render_clean_result(&preview));
            return Ok(());
        }

        println!();
        print!("{}", render_clean_preview(&preview));
        println!();

        use dialoguer::Confirm;
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} files?", preview.deleted.len()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = output
        .clean_with(&options)
        .with_context(|| format!("Failed to clean {}", root.display()))?;

    if json {
        let mut out = std::io::stdout().lock();
        write_clean_events(&mut out, &result)?;
    } else {
        if dry_run {
            print!("{}", render_clean_preview(&result));
        }
        print!("{}", render_clean_result(&result));
    }

    if !result.is_success() {
        anyhow::bail!("{} file(s) could not be deleted", result.errors.len());
    }

    Ok(())
}
