//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.
//! Unset options fall back to env vars, then the config file, then defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// assetprune - inventory and clean fingerprinted asset directories
#[derive(Parser, Debug)]
#[command(name = "assetprune")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./assetprune.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that opens an output directory
#[derive(clap::Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Output directory containing fingerprinted assets
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Manifest file (relative paths resolve against --dir)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every file in the output directory with its logical name and digest
    Files {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Delete superseded fingerprinted versions
    Clean {
        #[command(flatten)]
        target: TargetArgs,

        /// Versions kept per asset regardless of age (manifest files always kept)
        #[arg(short, long)]
        keep: Option<usize>,

        /// Keep older versions modified within this window (e.g. 3600, 90m, 2h, 7d)
        #[arg(long)]
        max_age: Option<String>,

        /// Show what would be deleted without deleting
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
