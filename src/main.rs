//! figsync - keep documentation in sync with Figma frames.

mod api;
mod cli;
mod config;
mod figma;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SyncConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SyncConfig::load(&cli)?;

    match &cli.command {
        Commands::Sync { args } => cli::sync::run_sync(&config, args),
        Commands::Check { args } => cli::check::run_check(&config, args),
    }
}
