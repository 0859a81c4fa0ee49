// autocut-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use crate::config::DEFAULT_TRACK_TITLE;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Autocut: terminal progress reporting and console helpers",
    long_about = "Drives the autocut-core progress reporter and its console utilities."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug messages.
    #[arg(long, global = true, env = "AUTOCUT_DEBUG")]
    pub debug: bool,

    /// Disable coloured log output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shows a progress bar for a task of known size
    Track(TrackArgs),
    /// Converts a hex colour (#rgb or #rrggbb) to blue-green-red values
    Color(ColorArgs),
    /// Describes a number of seconds in the largest fitting unit
    Duration(DurationArgs),
    /// Opens a file with the system's default application
    Open(OpenArgs),
}

#[derive(Args, Debug)]
pub struct TrackArgs {
    /// Total number of units the task will report
    #[arg(short = 'n', long, value_name = "UNITS")]
    pub total: u64,

    /// Label shown in front of the bar
    #[arg(short, long, default_value = DEFAULT_TRACK_TITLE, env = "AUTOCUT_TITLE")]
    pub title: String,

    /// Emit `title~index~total~start~eta` records for a wrapping process
    #[arg(long, env = "AUTOCUT_MACHINE_READABLE")]
    pub machine_readable: bool,

    /// Hide all progress output
    #[arg(short, long, env = "AUTOCUT_QUIET")]
    pub quiet: bool,

    /// Simulate the task, one unit every MS milliseconds, instead of
    /// counting lines on stdin
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Colour such as #fff or #ff8000
    #[arg(value_name = "HEX", allow_hyphen_values = true)]
    pub hex: String,
}

#[derive(Args, Debug)]
pub struct DurationArgs {
    /// Length of time in seconds
    #[arg(value_name = "SECONDS")]
    pub seconds: f64,
}

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// File to open
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}
