//! `autocut duration`: human-readable time lengths.

use crate::cli::DurationArgs;
use crate::error::CliResult;
use autocut_core::{MessageLog, human_readable_time};

pub fn run_duration(args: &DurationArgs, log: &MessageLog) -> CliResult<()> {
    log.debug(&format!("Formatting {} seconds", args.seconds));
    log.print(&human_readable_time(args.seconds));
    Ok(())
}
