// ============================================================================
// autocut-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialisation for the CLI
//
// Diagnostics go through the `log` facade to stderr, so they never mix with
// the progress line or command results on stdout.
//
// USAGE:
// - default: info and above
// - --debug: debug and above
// - RUST_LOG=<filter>: overrides both

use crate::config::{DEBUG_LOG_LEVEL, DEFAULT_LOG_LEVEL};
use log::{Level, LevelFilter, debug};
use owo_colors::OwoColorize;
use std::io::Write;

/// Initialises the global logger. Safe to call more than once.
pub fn init(debug_enabled: bool, use_color: bool) {
    let level = if debug_enabled {
        DEBUG_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    init_with_level(level, use_color);
}

/// Initialises the global logger at `level`, letting `RUST_LOG` override it.
pub fn init_with_level(level: LevelFilter, use_color: bool) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            let label = level_label(record.level());
            if use_color {
                let label = match record.level() {
                    Level::Error => label.bright_red().to_string(),
                    Level::Warn => label.yellow().to_string(),
                    Level::Info => label.green().to_string(),
                    Level::Debug => label.blue().to_string(),
                    Level::Trace => label.magenta().to_string(),
                };
                writeln!(buf, "{label} {}", record.args())
            } else {
                writeln!(buf, "{label} {}", record.args())
            }
        })
        .try_init();

    if result.is_ok() {
        debug!("Logger initialized with level: {level}");
    }
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN ",
        Level::Info => "INFO ",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Whether stderr output should be coloured.
///
/// `--no-color` and `NO_COLOR` both switch colour off.
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag
        && std::env::var_os("NO_COLOR").is_none()
        && supports_color::on(supports_color::Stream::Stderr).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels_are_aligned() {
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
            assert_eq!(level_label(level).len(), 5);
        }
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!should_use_color(true));
    }
}
