// ============================================================================
// autocut-core/src/session.rs
// ============================================================================
//
// CONSOLE MESSAGES: User-facing messages with temp-directory cleanup
//
// MessageLog is the console voice of a run. It prints ordinary messages,
// warnings and errors according to the quiet/debug flags, and it owns the
// run's scratch directory so that reporting a fatal error also removes it.
//
// Fatal errors are not turned into a process exit here. `error` and `bug`
// print the message, clean up and hand back a CoreError that the caller
// propagates; the binary decides the exit status.

use crate::config::{FALLBACK_COLUMNS, LINE_MARGIN};
use crate::error::CoreError;
use console::Term;
use log::debug;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Where users are asked to file bug reports.
pub const ISSUES_URL: &str = "https://github.com/autocut/autocut/issues/";

/// Pause before the single retry of a temp-directory removal.
const CLEANUP_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Console message sink for one run.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    show_debug: bool,
    quiet: bool,
    temp_dir: Option<PathBuf>,
}

impl MessageLog {
    pub fn new(show_debug: bool, quiet: bool) -> Self {
        Self {
            show_debug,
            quiet,
            temp_dir: None,
        }
    }

    /// Attaches a scratch directory that `cleanup` will remove.
    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(temp_dir.into());
        self
    }

    pub fn temp_dir(&self) -> Option<&Path> {
        self.temp_dir.as_deref()
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn debug(&self, message: &str) {
        if self.show_debug {
            debug!("{message}");
        }
    }

    pub fn print(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("Warning! {message}");
        }
    }

    /// Overwrites the current console line with `message`.
    pub fn conwrite(&self, message: &str) {
        if self.quiet {
            return;
        }
        let columns = Term::stdout()
            .size_checked()
            .map(|(_rows, cols)| usize::from(cols))
            .unwrap_or(FALLBACK_COLUMNS);
        print!("{}\r", conwrite_line(message, columns));
        let _ = io::stdout().flush();
    }

    /// Removes the scratch directory, retrying once if it is still locked.
    /// Failures are only reported at debug level.
    pub fn cleanup(&self) {
        let Some(temp_dir) = self.temp_dir.as_deref() else {
            return;
        };

        match remove_dir_with_retry(temp_dir) {
            Ok(()) => self.debug("Removed Temp Directory."),
            Err(e) => self.debug(&format!("Failed to delete temp dir: {e}")),
        }
    }

    /// Prints a fatal error, cleans up and returns the error to propagate.
    pub fn error(&self, message: &str) -> CoreError {
        self.conwrite("");
        let message = message.replace('\t', "    ");
        eprintln!("Error! {message}");
        self.cleanup();
        CoreError::Reported(message)
    }

    /// Like `error`, for conditions that indicate a defect in the program.
    pub fn bug(&self, message: &str, report_kind: &str) -> CoreError {
        self.conwrite("");
        eprintln!("{}", bug_report(message, report_kind));
        self.cleanup();
        CoreError::Bug(message.to_string())
    }
}

/// `  {message}` padded so it covers everything up to the line margin.
pub fn conwrite_line(message: &str, columns: usize) -> String {
    let padding = columns.saturating_sub(message.width() + LINE_MARGIN + 1);
    format!("  {message}{}", " ".repeat(padding))
}

/// Text printed for internal errors.
pub fn bug_report(message: &str, report_kind: &str) -> String {
    format!(
        "Error! {message}\n\n\
         This is not a normal error.\n\
         This message will only show up if there's something definitely wrong with the program.\n\
         Create a {report_kind} at:\n  {ISSUES_URL}"
    )
}

fn remove_dir_with_retry(dir: &Path) -> io::Result<()> {
    match fs::remove_dir_all(dir) {
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            thread::sleep(CLEANUP_RETRY_DELAY);
            fs::remove_dir_all(dir)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cleanup_removes_temp_dir() {
        let parent = tempdir().unwrap();
        let scratch = parent.path().join("scratch");
        fs::create_dir_all(scratch.join("nested")).unwrap();
        fs::write(scratch.join("nested").join("clip.txt"), "data").unwrap();

        let log = MessageLog::new(false, true).with_temp_dir(&scratch);
        log.cleanup();

        assert!(!scratch.exists());
    }

    #[test]
    fn test_cleanup_without_temp_dir_is_noop() {
        MessageLog::new(true, true).cleanup();
    }

    #[test]
    fn test_cleanup_missing_dir_is_silent() {
        let parent = tempdir().unwrap();
        let log = MessageLog::new(false, true).with_temp_dir(parent.path().join("gone"));
        log.cleanup();
    }

    #[test]
    fn test_error_cleans_up_and_returns_reported() {
        let parent = tempdir().unwrap();
        let scratch = parent.path().join("scratch");
        fs::create_dir_all(&scratch).unwrap();

        let log = MessageLog::new(false, true).with_temp_dir(&scratch);
        let err = log.error("bad\tinput");

        assert!(!scratch.exists());
        assert!(matches!(err, CoreError::Reported(ref m) if m == "bad    input"));
    }

    #[test]
    fn test_bug_returns_bug_error() {
        let log = MessageLog::new(false, true);
        assert!(matches!(log.bug("impossible", "bug report"), CoreError::Bug(_)));
    }

    #[test]
    fn test_console_output_when_not_quiet() {
        let log = MessageLog::new(true, false);
        assert!(!log.is_quiet());
        log.print("Cutting clip");
        log.warning("Clip is shorter than the margin.");
        log.conwrite("Analyzing audio");
        log.debug("debug output is routed through the log facade");
    }

    #[test]
    fn test_error_without_temp_dir_still_reports() {
        let log = MessageLog::new(false, false);
        assert!(log.temp_dir().is_none());
        let err = log.error("File does not exist: clip.mp4");
        assert_eq!(err.to_string(), "File does not exist: clip.mp4");
    }

    #[test]
    fn test_conwrite_line_width() {
        let line = conwrite_line("Analyzing audio", 80);
        assert!(line.starts_with("  Analyzing audio"));
        assert_eq!(line.width(), 79);
        assert_eq!(conwrite_line("", 2), "  ");
    }

    #[test]
    fn test_bug_report_mentions_issue_tracker() {
        let text = bug_report("oops", "bug report");
        assert!(text.starts_with("Error! oops"));
        assert!(text.contains("Create a bug report at:"));
        assert!(text.contains(ISSUES_URL));
    }
}
