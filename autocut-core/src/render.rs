//! Line composition for the progress reporter.
//!
//! Everything here is pure: it turns numbers and text into the exact line
//! that will be written. Widths are display columns, not bytes, so wide
//! glyphs such as the hourglass are measured correctly.

use crate::config::{
    BAR_LAYOUT_RESERVE, DONE_GLYPH, HOURGLASS_GLYPH, LINE_MARGIN, MACHINE_FIELD_DELIMITER,
    REMAINING_GLYPH,
};
use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of glyphs in the bar for a title of `title_width` columns.
#[must_use]
pub fn bar_length(columns: usize, title_width: usize) -> usize {
    columns
        .saturating_sub(title_width + BAR_LAYOUT_RESERVE)
        .max(1)
}

/// Number of solid glyphs for `percent` of a `bar_len` bar.
///
/// Nearest-integer rounding; the count can differ by one glyph around
/// half-step boundaries.
#[must_use]
pub fn done_glyphs(percent: f64, bar_len: usize) -> usize {
    let done = (percent.clamp(0.0, 100.0) * bar_len as f64 / 100.0).round() as usize;
    done.min(bar_len)
}

/// Composes and fits the Unicode bar line for a terminal `columns` wide.
pub fn bar_line(title: &str, percent: f64, eta: &str, columns: usize) -> String {
    let bar_len = bar_length(columns, title.width());
    let done = done_glyphs(percent, bar_len);

    let done_str: String = std::iter::repeat_n(DONE_GLYPH, done).collect();
    let remaining_str: String = std::iter::repeat_n(REMAINING_GLYPH, bar_len - done).collect();

    let line = format!(
        "  {HOURGLASS_GLYPH}{title}: [{done_str}{remaining_str}] {}% done ETA {eta}",
        format_percent(percent)
    );
    fit_to_width(&line, columns.saturating_sub(LINE_MARGIN))
}

/// Plain ASCII progress line used when glyphs cannot be written.
pub fn fallback_line(percent: f64, eta: &str) -> String {
    format!("   {}% done ETA {eta}", format_percent(percent))
}

/// One decimal place, except a finished task which reads `100`.
pub fn format_percent(percent: f64) -> String {
    if percent >= 100.0 {
        "100".to_string()
    } else {
        format!("{percent:.1}")
    }
}

/// `title` with every non-ASCII character replaced by `?`.
pub fn ascii_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect()
}

/// `title~index~total~start~eta` record for a wrapping process.
///
/// `start` is fractional Unix seconds, `eta` whole Unix seconds.
pub fn machine_record(
    title: &str,
    index: u64,
    total: u64,
    start: &DateTime<Utc>,
    eta: &DateTime<Utc>,
) -> String {
    let d = MACHINE_FIELD_DELIMITER;
    format!(
        "{title}{d}{index}{d}{total}{d}{:.6}{d}{}",
        unix_seconds(start),
        eta.timestamp()
    )
}

fn unix_seconds(instant: &DateTime<Utc>) -> f64 {
    instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_micros()) / 1_000_000.0
}

/// Truncates `line` to at most `width` display columns, then right-pads it
/// with spaces to exactly `width` so a shorter line fully covers a longer
/// one written before it.
pub fn fit_to_width(line: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(line.len() + width);
    let mut used = 0;

    for c in line.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > width {
            break;
        }
        fitted.push(c);
        used += char_width;
    }

    fitted.extend(std::iter::repeat_n(' ', width - used));
    fitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_bar_length_never_zero() {
        assert_eq!(bar_length(120, 10), 60);
        assert_eq!(bar_length(40, 10), 1);
        assert_eq!(bar_length(0, 0), 1);
    }

    #[test]
    fn test_done_glyphs() {
        assert_eq!(done_glyphs(0.0, 20), 0);
        assert_eq!(done_glyphs(50.0, 20), 10);
        assert_eq!(done_glyphs(100.0, 20), 20);
        assert_eq!(done_glyphs(250.0, 20), 20);
    }

    #[test]
    fn test_fit_pads_short_lines() {
        assert_eq!(fit_to_width("abc", 6), "abc   ");
    }

    #[test]
    fn test_fit_truncates_long_lines() {
        assert_eq!(fit_to_width("abcdef", 4), "abcd");
        assert_eq!(fit_to_width("abcdef", 0), "");
    }

    #[test]
    fn test_fit_never_splits_wide_glyph() {
        // The hourglass is two columns wide.
        let fitted = fit_to_width("a⏳b", 2);
        assert_eq!(fitted, "a ");
        assert_eq!(fitted.width(), 2);
    }

    #[test]
    fn test_bar_line_full_width_and_content() {
        let line = bar_line("Render", 100.0, "01:00 PM", 100);
        assert_eq!(line.width(), 98);
        assert!(line.starts_with("  ⏳Render: ["));
        assert!(line.contains(" 100% done ETA 01:00 PM"));
        assert!(!line.contains(REMAINING_GLYPH));
    }

    #[test]
    fn test_bar_line_narrow_terminal_truncates() {
        let line = bar_line("A long title for a small screen", 42.0, "13:00", 30);
        assert_eq!(line.width(), 28);
    }

    #[test]
    fn test_fallback_line() {
        assert_eq!(fallback_line(42.5, "13:05"), "   42.5% done ETA 13:05");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.0");
        assert_eq!(format_percent(42.5), "42.5");
        assert_eq!(format_percent(99.9), "99.9");
        assert_eq!(format_percent(100.0), "100");
        assert_eq!(fallback_line(100.0, "13:05"), "   100% done ETA 13:05");
    }

    #[test]
    fn test_ascii_title_replaces_each_char() {
        assert_eq!(ascii_title("Découpe"), "D?coupe");
        assert_eq!(ascii_title("編集"), "??");
        assert_eq!(ascii_title("Plain"), "Plain");
    }

    #[test]
    fn test_machine_record_fields() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let eta = start + chrono::Duration::milliseconds(10_700);
        let record = machine_record("Cutting", 5, 10, &start, &eta);
        let fields: Vec<&str> = record.split(MACHINE_FIELD_DELIMITER).collect();

        assert_eq!(fields[0], "Cutting");
        assert_eq!(fields[1], "5");
        assert_eq!(fields[2], "10");
        assert_eq!(fields[3], format!("{}.000000", start.timestamp()));
        assert_eq!(fields[4], (start.timestamp() + 10).to_string());
    }
}
