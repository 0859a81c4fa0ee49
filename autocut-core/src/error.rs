// ============================================================================
// autocut-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the core library
//
// KEY COMPONENTS:
// - CoreError: errors surfaced to callers of the library
// - RenderError: failures reported by an output sink
// - LocaleLookupError: failures of the host clock-format query
//
// The progress reporter absorbs RenderError and LocaleLookupError internally;
// only CoreError ever crosses the public API as a Result.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the fallible parts of the core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid hex code: {0}")]
    InvalidHexColor(String),

    /// An error that has already been printed to the console and whose
    /// temp directory has been cleaned up.
    #[error("{0}")]
    Reported(String),

    /// An internal invariant was violated; already printed with the bug
    /// report trailer.
    #[error("Internal error: {0}")]
    Bug(String),

    #[error("Could not open {}", .0.display())]
    OpenFailed(PathBuf),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Failure reported by an `OutputSink` write.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The sink cannot represent the characters it was asked to write.
    #[error("output cannot encode {0:?}")]
    Encoding(String),

    #[error("output write failed: {0}")]
    Io(#[from] io::Error),
}

impl RenderError {
    /// Whether the failure is caused by the character set rather than the
    /// underlying stream.
    #[must_use]
    pub fn is_encoding(&self) -> bool {
        matches!(self, RenderError::Encoding(_))
    }
}

/// Failure to determine the host's 12/24-hour clock preference.
#[derive(Error, Debug)]
pub enum LocaleLookupError {
    #[error("clock format lookup is not available on this platform")]
    Unavailable,

    #[error("clock format lookup failed: {0}")]
    CommandFailed(String),

    #[error("clock format lookup returned unreadable output")]
    Malformed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_classification() {
        assert!(RenderError::Encoding("⏳".to_string()).is_encoding());
        let io_err = RenderError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(!io_err.is_encoding());
    }

    #[test]
    fn test_hex_error_message() {
        let err = CoreError::InvalidHexColor("#12".to_string());
        assert_eq!(err.to_string(), "Invalid hex code: #12");
    }
}
