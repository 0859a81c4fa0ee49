// ============================================================================
// autocut-cli/src/commands/track.rs
// ============================================================================
//
// TRACK COMMAND: progress bar for a task of known size
//
// Without --delay-ms every line read from stdin counts as one processed unit,
// which makes `autocut track` usable as a line-counting pipe meter:
//
//     some-task | autocut track --total 1200 --title "Cutting"
//
// With --delay-ms the command simulates the task itself.

use crate::cli::TrackArgs;
use crate::error::{CliErrorContext, CliResult};
use autocut_core::{
    Clock, MessageLog, OutputSink, ProgressConfig, ProgressReporter, TerminalInfo, Timer,
};
use log::debug;
use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

/// Executes `autocut track`.
pub fn run_track(args: &TrackArgs, log: &MessageLog) -> CliResult<()> {
    let timer = Timer::start(args.quiet || args.machine_readable);
    debug!("Tracking {} units as {:?}", args.total, args.title);

    let config = ProgressConfig::new(args.total)
        .with_title(args.title.clone())
        .machine_readable(args.machine_readable)
        .hidden(args.quiet);
    let mut progress = ProgressReporter::new(config);

    let processed = match args.delay_ms {
        Some(delay_ms) => {
            simulate(&mut progress, args.total, Duration::from_millis(delay_ms))
        }
        None => count_lines(&mut progress, io::stdin().lock())
            .cli_context("Failed to read progress input from stdin")?,
    };

    // The bar overwrites its own line; move past it before printing more.
    if !args.machine_readable && progress.is_unicode_capable() {
        log.print("");
    }

    if processed < args.total {
        log.warning(&format!(
            "Input ended after {processed} of {} units.",
            args.total
        ));
    }

    log.debug(&format!("Processed {processed} units"));
    timer.stop();
    Ok(())
}

/// Reports one unit per line of `reader`. Returns the number of lines read.
///
/// Lines are split on `\n` bytes and never decoded, so any input counts.
pub fn count_lines<C, T, S, R>(
    progress: &mut ProgressReporter<C, T, S>,
    reader: R,
) -> io::Result<u64>
where
    C: Clock,
    T: TerminalInfo,
    S: OutputSink,
    R: BufRead,
{
    let mut processed = 0_u64;
    for line in reader.split(b'\n') {
        line?;
        progress.update(processed);
        processed += 1;
    }
    Ok(processed)
}

/// Reports `total` units spaced `delay` apart. Returns `total`.
pub fn simulate<C, T, S>(
    progress: &mut ProgressReporter<C, T, S>,
    total: u64,
    delay: Duration,
) -> u64
where
    C: Clock,
    T: TerminalInfo,
    S: OutputSink,
{
    for index in 0..total {
        thread::sleep(delay);
        progress.update(index);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use autocut_core::{FixedTerminal, ManualClock, MemorySink, SinkWrite};
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;

    fn machine_reporter(
        total: u64,
    ) -> (ProgressReporter<ManualClock, FixedTerminal, MemorySink>, MemorySink) {
        let sink = MemorySink::new();
        let progress = ProgressReporter::with_services(
            ProgressConfig::new(total).with_title("Lines").machine_readable(true),
            ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
            FixedTerminal::new(80),
            sink.clone(),
        );
        (progress, sink)
    }

    #[test]
    fn test_count_lines_updates_once_per_line() {
        let (mut progress, sink) = machine_reporter(3);
        let processed = count_lines(&mut progress, Cursor::new("a\nb\nc\n")).unwrap();

        assert_eq!(processed, 3);
        // One initial render plus one per line.
        assert_eq!(sink.writes().len(), 4);
        let last = sink.last_write().unwrap();
        assert!(matches!(&last, SinkWrite::Overwrite(text) if text.starts_with("Lines~3~3~")));
    }

    #[test]
    fn test_count_lines_past_total_stays_clamped() {
        let (mut progress, sink) = machine_reporter(2);
        let processed = count_lines(&mut progress, Cursor::new("1\n2\n3\n4\n")).unwrap();

        assert_eq!(processed, 4);
        assert!(sink.last_write().unwrap().text().starts_with("Lines~2~2~"));
    }

    #[test]
    fn test_count_lines_ignores_invalid_utf8() {
        let (mut progress, sink) = machine_reporter(3);
        let input: &[u8] = b"a\n\xff\xfe\nc";
        let processed = count_lines(&mut progress, Cursor::new(input)).unwrap();

        assert_eq!(processed, 3);
        assert!(sink.last_write().unwrap().text().starts_with("Lines~3~3~"));
    }

    #[test]
    fn test_simulate_reports_every_unit() {
        let (mut progress, sink) = machine_reporter(4);
        assert_eq!(simulate(&mut progress, 4, Duration::ZERO), 4);
        assert_eq!(sink.writes().len(), 5);
    }
}
