//! Core library for terminal progress reporting and console support.
//!
//! The centre of the crate is [`ProgressReporter`], a single-line progress
//! bar with a linear ETA that can also emit machine-readable records for a
//! wrapping process. Around it sit the console helpers a long-running CLI
//! task needs: a message log that cleans up its scratch directory on fatal
//! errors, a run timer, time formatting and a couple of small parsers.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use autocut_core::{ProgressConfig, ProgressReporter};
//!
//! let frames = 1_500;
//! let mut progress = ProgressReporter::new(
//!     ProgressConfig::new(frames).with_title("Cutting silence"),
//! );
//! for index in 0..frames {
//!     // ... process one frame ...
//!     progress.update(index);
//! }
//! ```

pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod platform;
pub mod progress;
pub mod render;
pub mod session;
pub mod sink;
pub mod terminal;
pub mod time_format;
pub mod timer;
pub mod utils;

// Re-exports for public API
pub use clock::{Clock, ManualClock, SystemClock};
pub use color::{Bgr, parse_hex_color};
pub use config::ProgressConfig;
pub use error::{CoreError, CoreResult, LocaleLookupError, RenderError};
pub use platform::open_with_system_default;
pub use progress::{Estimate, ProgressReporter, percent_done};
pub use session::MessageLog;
pub use sink::{MemorySink, OutputSink, SinkWrite, TerminalSink};
pub use terminal::{FixedTerminal, SystemTerminal, TerminalInfo};
pub use time_format::{format_clock, format_time, human_readable_time};
pub use timer::{Timer, TimerReport};
pub use utils::{clean_list, is_unset};
