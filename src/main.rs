//! assetprune CLI
//!
//! Usage: assetprune <COMMAND>
//!
//! Commands:
//!   files   List classified files in an output directory
//!   clean   Delete superseded fingerprinted versions

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};

use cli::{Cli, Commands};

fn init_logger(verbose: u8) {
    // RUST_LOG wins; otherwise -v raises the default level
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Files { target } => commands::cmd_files(config_path, &target, cli.json),
        Commands::Clean {
            target,
            keep,
            max_age,
            dry_run,
            yes,
        } => commands::cmd_clean(
            config_path,
            &target,
            keep,
            max_age.as_deref(),
            dry_run,
            yes,
            cli.json,
        ),
    }
}
