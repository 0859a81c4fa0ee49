//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// `track`: drives a progress bar from stdin lines or a simulated task.
pub mod track;

/// `color`: hex colour to BGR conversion.
pub mod color;

/// `duration`: human-readable rendering of a number of seconds.
pub mod duration;

/// `open`: opens a file with the system default application.
pub mod open;

pub use color::run_color;
pub use duration::run_duration;
pub use open::run_open;
pub use track::run_track;
