// autocut-cli/src/main.rs
//
// Entry point for the `autocut` binary.
//
// Responsibilities include:
// - Parsing command-line arguments.
// - Setting up env_logger based logging on stderr.
// - Dispatching to the command implementations in `autocut_cli::commands`.
// - Printing unreported errors and managing the process exit code.

use autocut_cli::config::FAILURE_EXIT_CODE;
use autocut_cli::error::is_reported;
use autocut_cli::logging;
use autocut_cli::{Cli, Commands, run_color, run_duration, run_open, run_track};
use autocut_core::MessageLog;
use clap::Parser;
use log::debug;
use std::process;

fn main() {
    let cli = Cli::parse();

    logging::init(cli.debug, logging::should_use_color(cli.no_color));
    debug!("Parsed arguments: {cli:?}");

    let quiet = matches!(&cli.command, Commands::Track(args) if args.quiet);
    let log = MessageLog::new(cli.debug, quiet);

    let result = match &cli.command {
        Commands::Track(args) => run_track(args, &log),
        Commands::Color(args) => run_color(args, &log),
        Commands::Duration(args) => run_duration(args, &log),
        Commands::Open(args) => run_open(args, &log),
    };

    if let Err(e) = result {
        // MessageLog has already printed reported errors.
        if !is_reported(&e) {
            eprintln!("Error! {e}");
        }
        process::exit(FAILURE_EXIT_CODE);
    }
}
