//! Wall-time measurement for a whole run.

use crate::time_format::format_clock;
use std::time::Instant;

/// Elapsed time reported by `Timer::stop`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerReport {
    /// Elapsed seconds rounded to two decimal places.
    pub seconds: f64,
}

impl TimerReport {
    /// `Finished. took 65.23 seconds (0:01:05)`
    pub fn summary(&self) -> String {
        format!(
            "Finished. took {} seconds ({})",
            self.seconds_text(),
            format_clock(self.seconds)
        )
    }

    // Whole seconds keep one decimal place: `3.0`, not `3`.
    fn seconds_text(&self) -> String {
        if self.seconds.fract() == 0.0 {
            format!("{:.1}", self.seconds)
        } else {
            self.seconds.to_string()
        }
    }
}

/// Measures the time between `start` and `stop`.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    started: Instant,
    quiet: bool,
}

impl Timer {
    pub fn start(quiet: bool) -> Self {
        Self {
            started: Instant::now(),
            quiet,
        }
    }

    /// Stops the timer and prints the summary unless quiet.
    pub fn stop(self) -> TimerReport {
        let elapsed = self.started.elapsed().as_secs_f64();
        let report = TimerReport {
            seconds: (elapsed * 100.0).round() / 100.0,
        };
        if !self.quiet {
            println!("{}", report.summary());
        }
        report
    }
}
