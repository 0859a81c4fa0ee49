// ============================================================================
// autocut-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Progress reporter settings and rendering constants
//
// KEY COMPONENTS:
// - ProgressConfig: the settings a caller hands to ProgressReporter
// - Default constants: title, field delimiter, layout reserves
//
// USAGE:
// Instances of ProgressConfig are created by consumers of the library (like
// autocut-cli) from their own flags and passed to ProgressReporter::new.

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Title shown when the caller does not provide one.
pub const DEFAULT_TITLE: &str = "Please wait";

/// Separator between the fields of a machine-readable record.
/// Titles are expected not to contain it.
pub const MACHINE_FIELD_DELIMITER: char = '~';

/// Columns reserved around the bar for the title, percentage and ETA text.
pub const BAR_LAYOUT_RESERVE: usize = 50;

/// Columns kept free at the right edge of the terminal.
pub const LINE_MARGIN: usize = 2;

/// Terminal width assumed when the real width cannot be determined.
pub const FALLBACK_COLUMNS: usize = 80;

/// Glyph for the completed part of the bar.
pub const DONE_GLYPH: char = '█';

/// Glyph for the remaining part of the bar.
pub const REMAINING_GLYPH: char = '░';

/// Prefix glyph of the human-readable bar line.
pub const HOURGLASS_GLYPH: char = '⏳';

// ============================================================================
// PROGRESS CONFIGURATION
// ============================================================================

/// Settings for a single `ProgressReporter`.
///
/// ```rust
/// use autocut_core::config::ProgressConfig;
///
/// let config = ProgressConfig::new(200)
///     .with_title("Cutting silence")
///     .machine_readable(true);
///
/// assert_eq!(config.total, 200);
/// assert!(config.machine_readable);
/// assert!(!config.hidden);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Number of units the task will report.
    pub total: u64,
    /// Label rendered in front of the bar.
    pub title: String,
    /// Emit `~`-delimited records for a wrapping process instead of a bar.
    pub machine_readable: bool,
    /// Suppress all output.
    pub hidden: bool,
}

impl ProgressConfig {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            title: DEFAULT_TITLE.to_string(),
            machine_readable: false,
            hidden: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn machine_readable(mut self, enabled: bool) -> Self {
        self.machine_readable = enabled;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
