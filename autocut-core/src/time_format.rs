//! Time formatting helpers.
//!
//! Wall-clock rendering for ETAs, elapsed-time clocks for the run timer and a
//! coarse human-readable duration used in summaries.

use chrono::{DateTime, TimeZone, Timelike};

/// Formats the hour and minute of `timestamp` as `HH:MM AM`/`HH:MM PM` or as
/// 24-hour `HH:MM`.
///
/// The hour is taken in whatever zone `timestamp` carries; the progress
/// reporter passes local time.
pub fn format_time<Tz: TimeZone>(timestamp: &DateTime<Tz>, am_pm: bool) -> String {
    let hour = timestamp.hour();
    let minute = timestamp.minute();

    if am_pm {
        let display_hour = match hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        let suffix = if hour < 12 { "AM" } else { "PM" };
        format!("{display_hour:02}:{minute:02} {suffix}")
    } else {
        format!("{hour:02}:{minute:02}")
    }
}

/// Formats seconds as `H:MM:SS` after rounding to whole seconds
/// (e.g., 3725.4 -> "1:02:05"). Negative or non-finite input renders as zero.
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}

/// Describes a duration in the largest fitting unit
/// (e.g., 90.0 -> "1.5 minutes", 7200.0 -> "2 hours").
#[must_use]
pub fn human_readable_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0 seconds".to_string();
    }

    if seconds >= 3600.0 {
        let hours = round_tenth(seconds / 3600.0);
        format!("{} hours", trim_number(hours))
    } else if seconds >= 60.0 {
        let minutes = round_tenth(seconds / 60.0);
        if minutes >= 10.0 {
            format!("{} minutes", minutes.round() as u64)
        } else {
            format!("{} minutes", trim_number(minutes))
        }
    } else {
        format!("{} seconds", trim_number(round_tenth(seconds)))
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// Whole numbers print without a decimal part.
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as u64)
    } else {
        format!("{value:.1}")
    }
}
