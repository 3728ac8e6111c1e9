//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::api::ImageFormat;
use crate::config::CONFIG_FILE;

/// Keep documentation in sync with Figma frames
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: figsync.toml)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fetch referenced frames and update screenshots and specifications
    #[command(visible_alias = "s")]
    Sync {
        #[command(flatten)]
        args: SyncArgs,
    },

    /// List frame references without contacting the API
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Sync command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SyncArgs {
    /// Files or directories to sync. If omitted, scans the configured directory.
    /// Use `-` to read paths from stdin.
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Fetch and report, but write nothing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Screenshot scale factor (overrides `export.scale`)
    #[arg(short, long)]
    pub scale: Option<f64>,

    /// Screenshot format (overrides `export.format`)
    #[arg(short, long)]
    pub format: Option<ImageFormat>,

    /// Append `changes_detected` and `updated_frames` to `$GITHUB_OUTPUT`
    #[arg(long)]
    pub github_output: bool,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Files or directories to check. If omitted, scans the configured directory.
    /// Use `-` to read paths from stdin.
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,
}
