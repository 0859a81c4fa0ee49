// ============================================================================
// autocut-core/src/terminal.rs
// ============================================================================
//
// TERMINAL INFO: Display width and clock-format queries
//
// The progress reporter never reads terminal state directly. It asks a
// TerminalInfo for the current width on every render (so resizes are picked
// up) and for the host clock format once at construction.
//
// KEY COMPONENTS:
// - TerminalInfo: the query interface
// - SystemTerminal: backed by the `console` crate and platform lookups
// - FixedTerminal: a settable stand-in for tests and non-interactive callers

use crate::config::FALLBACK_COLUMNS;
use crate::error::LocaleLookupError;
use crate::platform;
use console::Term;
use std::cell::Cell;
use std::rc::Rc;

/// Source of terminal facts needed for rendering.
pub trait TerminalInfo {
    /// Current display width in columns.
    fn columns(&self) -> usize;

    /// `Ok(true)` when the host prefers a 12-hour clock.
    fn clock_format_preference(&self) -> Result<bool, LocaleLookupError>;
}

/// The terminal attached to stdout.
#[derive(Debug, Clone)]
pub struct SystemTerminal {
    term: Term,
}

impl SystemTerminal {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for SystemTerminal {
    fn default() -> Self {
        Self::stdout()
    }
}

impl TerminalInfo for SystemTerminal {
    fn columns(&self) -> usize {
        self.term
            .size_checked()
            .map(|(_rows, cols)| usize::from(cols))
            .filter(|cols| *cols > 0)
            .unwrap_or(FALLBACK_COLUMNS)
    }

    fn clock_format_preference(&self) -> Result<bool, LocaleLookupError> {
        platform::clock_format_preference()
    }
}

/// A terminal with a caller-controlled width and clock preference.
///
/// Clones share the width, so a test can resize the terminal after handing
/// it to a reporter.
#[derive(Debug, Clone)]
pub struct FixedTerminal {
    columns: Rc<Cell<usize>>,
    twelve_hour: Option<bool>,
}

impl FixedTerminal {
    /// A terminal whose clock-format lookup fails.
    pub fn new(columns: usize) -> Self {
        Self {
            columns: Rc::new(Cell::new(columns)),
            twelve_hour: None,
        }
    }

    pub fn with_clock_preference(mut self, twelve_hour: bool) -> Self {
        self.twelve_hour = Some(twelve_hour);
        self
    }

    pub fn resize(&self, columns: usize) {
        self.columns.set(columns);
    }
}

impl TerminalInfo for FixedTerminal {
    fn columns(&self) -> usize {
        self.columns.get()
    }

    fn clock_format_preference(&self) -> Result<bool, LocaleLookupError> {
        self.twelve_hour.ok_or(LocaleLookupError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_terminal_resize_is_shared() {
        let terminal = FixedTerminal::new(80);
        let handle = terminal.clone();
        handle.resize(120);
        assert_eq!(terminal.columns(), 120);
    }

    #[test]
    fn test_fixed_terminal_clock_preference() {
        assert!(FixedTerminal::new(80).clock_format_preference().is_err());
        assert!(
            !FixedTerminal::new(80)
                .with_clock_preference(false)
                .clock_format_preference()
                .unwrap()
        );
    }

    #[test]
    fn test_system_terminal_reports_usable_width() {
        assert!(SystemTerminal::stdout().columns() > 0);
    }
}
