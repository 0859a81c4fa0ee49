//! `autocut color`: hex colour to BGR conversion.

use crate::cli::ColorArgs;
use crate::error::CliResult;
use autocut_core::{MessageLog, parse_hex_color};

/// Prints the colour as `B G R`, or reports an invalid hex code.
pub fn run_color(args: &ColorArgs, log: &MessageLog) -> CliResult<()> {
    match parse_hex_color(&args.hex) {
        Ok(bgr) => {
            log.print(&bgr.to_string());
            Ok(())
        }
        Err(e) => Err(log.error(&e.to_string())),
    }
}
