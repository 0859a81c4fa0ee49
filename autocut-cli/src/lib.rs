// autocut-cli/src/lib.rs
//
// Library portion of the Autocut CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, ColorArgs, Commands, DurationArgs, OpenArgs, TrackArgs};
pub use commands::{run_color, run_duration, run_open, run_track};
pub use error::{CliErrorContext, CliResult};
