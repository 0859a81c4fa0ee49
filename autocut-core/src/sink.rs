//! Output sinks for rendered progress lines.
//!
//! A sink offers two write modes: overwrite the current line (carriage
//! return, no newline) or commit a line (trailing newline). Writes return a
//! `RenderError` instead of panicking so the reporter can fall back.

use crate::error::RenderError;
use crate::platform;
use console::Term;
use std::cell::{Cell, RefCell};
use std::io::Write;
use std::rc::Rc;

/// Destination for progress output.
pub trait OutputSink {
    /// Replace the current line with `line`, leaving the cursor at its start.
    fn overwrite_line(&mut self, line: &str) -> Result<(), RenderError>;

    /// Write `line` followed by a newline.
    fn commit_line(&mut self, line: &str) -> Result<(), RenderError>;
}

// ============================================================================
// TERMINAL SINK
// ============================================================================

/// Writes to stdout.
///
/// Whether glyphs are accepted is decided once, from the terminal features
/// and the locale charset. Non-ASCII text sent to a sink that does not
/// accept glyphs is rejected with `RenderError::Encoding` before anything is
/// written.
#[derive(Debug, Clone)]
pub struct TerminalSink {
    term: Term,
    accepts_unicode: bool,
}

impl TerminalSink {
    pub fn stdout() -> Self {
        let term = Term::stdout();
        let accepts_unicode =
            platform::locale_accepts_utf8() && (!term.is_term() || term.features().wants_emoji());
        Self {
            term,
            accepts_unicode,
        }
    }

    #[must_use]
    pub fn accepts_unicode(&self) -> bool {
        self.accepts_unicode
    }

    fn check_encoding(&self, line: &str) -> Result<(), RenderError> {
        if self.accepts_unicode || line.is_ascii() {
            Ok(())
        } else {
            Err(RenderError::Encoding(line.to_string()))
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl OutputSink for TerminalSink {
    fn overwrite_line(&mut self, line: &str) -> Result<(), RenderError> {
        self.check_encoding(line)?;
        self.term.write_all(line.as_bytes())?;
        self.term.write_all(b"\r")?;
        self.term.flush()?;
        Ok(())
    }

    fn commit_line(&mut self, line: &str) -> Result<(), RenderError> {
        self.check_encoding(line)?;
        self.term.write_line(line)?;
        Ok(())
    }
}

// ============================================================================
// MEMORY SINK
// ============================================================================

/// How a line was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkWrite {
    Overwrite(String),
    Commit(String),
}

impl SinkWrite {
    pub fn text(&self) -> &str {
        match self {
            SinkWrite::Overwrite(text) | SinkWrite::Commit(text) => text,
        }
    }
}

/// Records writes in memory.
///
/// Clones share the record. Every attempt is kept in `attempts`, while
/// `writes` only holds the ones that were accepted. The sink can be told to
/// reject the next N non-ASCII writes to simulate an output stream without
/// glyph support.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    attempts: Rc<RefCell<Vec<SinkWrite>>>,
    writes: Rc<RefCell<Vec<SinkWrite>>>,
    reject_unicode: Rc<Cell<usize>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next `count` writes that contain non-ASCII text.
    pub fn reject_unicode_writes(&self, count: usize) {
        self.reject_unicode.set(count);
    }

    /// Reject every non-ASCII write from now on.
    pub fn reject_all_unicode(&self) {
        self.reject_unicode.set(usize::MAX);
    }

    pub fn attempts(&self) -> Vec<SinkWrite> {
        self.attempts.borrow().clone()
    }

    pub fn writes(&self) -> Vec<SinkWrite> {
        self.writes.borrow().clone()
    }

    pub fn last_write(&self) -> Option<SinkWrite> {
        self.writes.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.attempts.borrow_mut().clear();
        self.writes.borrow_mut().clear();
    }

    fn record(&self, write: SinkWrite) -> Result<(), RenderError> {
        self.attempts.borrow_mut().push(write.clone());

        let remaining = self.reject_unicode.get();
        if remaining > 0 && !write.text().is_ascii() {
            if remaining != usize::MAX {
                self.reject_unicode.set(remaining - 1);
            }
            return Err(RenderError::Encoding(write.text().to_string()));
        }

        self.writes.borrow_mut().push(write);
        Ok(())
    }
}

impl OutputSink for MemorySink {
    fn overwrite_line(&mut self, line: &str) -> Result<(), RenderError> {
        self.record(SinkWrite::Overwrite(line.to_string()))
    }

    fn commit_line(&mut self, line: &str) -> Result<(), RenderError> {
        self.record(SinkWrite::Commit(line.to_string()))
    }
}
