// ============================================================================
// autocut-core/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: Terminal progress bar with adaptive ETA
//
// This module provides the ProgressReporter, which tracks a long-running task
// through repeated `update(index)` calls and renders either a Unicode bar for
// people or a delimited record for a wrapping process.
//
// KEY COMPONENTS:
// - ProgressReporter: owns the task's start time and rendering state
// - Estimate: percent done, seconds per percent and ETA for one index
// - percent_done: the clamped, one-decimal completion percentage
//
// FAILURE MODEL:
// Reporting must never abort the task it reports on. Clock-format lookup
// failures fall back to a 12-hour clock. A sink that rejects non-ASCII text
// permanently switches the reporter to plain lines, or to ASCII titles in
// machine records. Any other write failure is logged at debug level and
// dropped.

use crate::clock::{Clock, SystemClock};
use crate::config::ProgressConfig;
use crate::error::RenderError;
use crate::render;
use crate::sink::{OutputSink, TerminalSink};
use crate::terminal::{SystemTerminal, TerminalInfo};
use crate::time_format::format_time;
use chrono::{DateTime, Duration, Local, Utc};
use log::debug;

/// Completion percentage after `index` (zero-based) of `total` units,
/// rounded to one decimal and clamped to `[0, 100]`.
///
/// A zero `total` has nothing left to do and reports 100.
#[must_use]
pub fn percent_done(index: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    let raw = index.saturating_add(1) as f64 / total as f64 * 100.0;
    ((raw * 10.0).round() / 10.0).clamp(0.0, 100.0)
}

/// Snapshot of the progress computation for one index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Completion percentage in `[0, 100]`.
    pub percent: f64,
    /// Elapsed seconds per percent of progress; zero before any progress.
    pub seconds_per_percent: f64,
    /// Projected completion time.
    pub eta: DateTime<Utc>,
    /// Units completed, clamped to the total.
    pub reported_index: u64,
}

/// Renders progress for one task.
///
/// The default type parameters talk to the real terminal; tests and
/// embedders supply their own services through `with_services`.
pub struct ProgressReporter<C = SystemClock, T = SystemTerminal, S = TerminalSink>
where
    C: Clock,
    T: TerminalInfo,
    S: OutputSink,
{
    total: u64,
    title: String,
    machine_mode: bool,
    hidden: bool,
    start_time: DateTime<Utc>,
    unicode_capable: bool,
    am_pm: bool,
    clock: C,
    terminal: T,
    sink: S,
}

impl ProgressReporter {
    /// Creates a reporter writing to stdout and renders its first line.
    pub fn new(config: ProgressConfig) -> Self {
        Self::with_services(
            config,
            SystemClock,
            SystemTerminal::stdout(),
            TerminalSink::stdout(),
        )
    }
}

impl<C, T, S> ProgressReporter<C, T, S>
where
    C: Clock,
    T: TerminalInfo,
    S: OutputSink,
{
    /// Creates a reporter with explicit services and renders index 0.
    ///
    /// Never fails: an unreadable clock preference defaults to 12-hour time,
    /// and a sink that rejects glyphs switches the reporter to plain output.
    pub fn with_services(config: ProgressConfig, clock: C, terminal: T, sink: S) -> Self {
        let start_time = clock.now();

        // Machine records carry raw timestamps, so only people need the lookup.
        let am_pm = if config.machine_readable {
            true
        } else {
            match terminal.clock_format_preference() {
                Ok(twelve_hour) => twelve_hour,
                Err(e) => {
                    debug!("Clock format lookup failed, using 12-hour time: {e}");
                    true
                }
            }
        };

        let mut reporter = Self {
            total: config.total,
            title: config.title,
            machine_mode: config.machine_readable,
            hidden: config.hidden,
            start_time,
            unicode_capable: true,
            am_pm,
            clock,
            terminal,
            sink,
        };
        reporter.update(0);
        reporter
    }

    /// Computes percent, rate and ETA for `index` at the clock's current time.
    pub fn estimate(&self, index: u64) -> Estimate {
        let percent = percent_done(index, self.total);
        let elapsed = (self.clock.now() - self.start_time)
            .num_microseconds()
            .unwrap_or(i64::MAX)
            .max(0) as f64
            / 1_000_000.0;

        let seconds_per_percent = if percent > 0.0 {
            elapsed / percent
        } else {
            0.0
        };
        let projected =
            Duration::microseconds((seconds_per_percent * 100.0 * 1_000_000.0).round() as i64);

        Estimate {
            percent,
            seconds_per_percent,
            eta: self
                .start_time
                .checked_add_signed(projected)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            reported_index: index.saturating_add(1).min(self.total),
        }
    }

    /// Reports that the unit at `index` (zero-based) has been processed.
    pub fn update(&mut self, index: u64) {
        if self.hidden {
            return;
        }

        let estimate = self.estimate(index);

        if self.machine_mode {
            self.report_record(&estimate);
            return;
        }

        let eta = format_time(&estimate.eta.with_timezone(&Local), self.am_pm);

        if self.unicode_capable {
            match self.render_bar(estimate.percent, &eta) {
                Ok(()) => return,
                Err(e) if e.is_encoding() => {
                    debug!("Output rejected progress glyphs, switching to plain lines: {e}");
                    self.unicode_capable = false;
                }
                Err(e) => debug!("Progress bar write failed, using plain line: {e}"),
            }
        }

        let line = render::fallback_line(estimate.percent, &eta);
        if let Err(e) = self.sink.commit_line(&line) {
            debug!("Dropped progress line: {e}");
        }
    }

    /// Writes the machine record, retrying with an ASCII title when the sink
    /// rejects the original one.
    fn report_record(&mut self, estimate: &Estimate) {
        if self.unicode_capable {
            let record = render::machine_record(
                &self.title,
                estimate.reported_index,
                self.total,
                &self.start_time,
                &estimate.eta,
            );
            match self.sink.overwrite_line(&record) {
                Ok(()) => return,
                Err(e) if e.is_encoding() => {
                    debug!("Output rejected the record title, switching to ASCII: {e}");
                    self.unicode_capable = false;
                }
                Err(e) => {
                    debug!("Dropped machine progress record: {e}");
                    return;
                }
            }
        }

        let record = render::machine_record(
            &render::ascii_title(&self.title),
            estimate.reported_index,
            self.total,
            &self.start_time,
            &estimate.eta,
        );
        if let Err(e) = self.sink.overwrite_line(&record) {
            debug!("Dropped machine progress record: {e}");
        }
    }

    fn render_bar(&mut self, percent: f64, eta: &str) -> Result<(), RenderError> {
        let line = render::bar_line(&self.title, percent, eta, self.terminal.columns());
        self.sink.overwrite_line(&line)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// `false` once the sink has rejected non-ASCII output.
    pub fn is_unicode_capable(&self) -> bool {
        self.unicode_capable
    }

    pub fn uses_am_pm(&self) -> bool {
        self.am_pm
    }
}
