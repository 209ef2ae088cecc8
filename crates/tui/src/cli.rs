use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "daypulse",
    version,
    about = "A keyboard-first dashboard for daily goals, tasks, and mood.",
    after_help = "Examples:\n  daypulse                       Launch the dashboard (same as `daypulse tui`)\n  daypulse --data-dir ~/dp tui   Keep preferences in a custom directory"
)]
pub struct Cli {
    /// Override the data directory (defaults to platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Launch the terminal dashboard (default command)
    Tui,
}
