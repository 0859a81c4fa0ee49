// autocut-cli/src/config.rs
//
// Defines default configuration constants for the `autocut` binary.

use log::LevelFilter;

/// Title used by `autocut track` when none is given.
pub const DEFAULT_TRACK_TITLE: &str = autocut_core::config::DEFAULT_TITLE;

/// Log level without `--debug`; `RUST_LOG` overrides both.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Log level with `--debug`.
pub const DEBUG_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Exit status for any failed command.
pub const FAILURE_EXIT_CODE: i32 = 1;
