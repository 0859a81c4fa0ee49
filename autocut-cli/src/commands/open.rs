//! `autocut open`: hands a file to the system's default application.

use crate::cli::OpenArgs;
use crate::error::{CliErrorContext, CliResult};
use autocut_core::{MessageLog, open_with_system_default};

/// Opens the file; failing to find an opener is only a warning.
pub fn run_open(args: &OpenArgs, log: &MessageLog) -> CliResult<()> {
    if !args.path.exists() {
        return Err(log.error(&format!(
            "File does not exist: {}",
            args.path.display()
        )));
    }

    if let Err(e) = open_with_system_default(&args.path).cli_context("Opening output") {
        log.debug(&e.to_string());
        log.warning("Could not open output file.");
    }
    Ok(())
}
