// ============================================================================
// autocut-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and error helpers for the commands
//
// KEY COMPONENTS:
// - CliResult: commands return CoreError like the core library
// - CliErrorContext: prefixes a failure with what the command was doing
// - is_reported: errors MessageLog has already printed
//
// main() prints every error that is not already reported and exits with
// FAILURE_EXIT_CODE.

use autocut_core::{CoreError, CoreResult};
use std::fmt;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Adds the failing step to an error, e.g.
/// `Failed to read progress input from stdin: IO error: ...`.
pub trait CliErrorContext<T> {
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| match e.into() {
            // Reported errors keep the text already printed.
            reported @ (CoreError::Reported(_) | CoreError::Bug(_)) => reported,
            other => CoreError::OperationFailed(format!("{context}: {other}")),
        })
    }
}

/// Whether the error was already printed to the console by a MessageLog.
pub fn is_reported(error: &CoreError) -> bool {
    matches!(error, CoreError::Reported(_) | CoreError::Bug(_))
}
