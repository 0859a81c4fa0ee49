//! Host platform integration.
//!
//! Platform detection, the macOS clock-format lookup, locale charset checks
//! and opening files with the system's default application.

use crate::error::{CoreError, CoreResult, LocaleLookupError};
use log::debug;
use std::env;
use std::path::Path;
use std::process::{Command, Stdio};

/// Checks if the current platform is macOS.
#[must_use]
pub fn is_macos() -> bool {
    env::consts::OS == "macos"
}

/// Checks if the current platform is Windows.
#[must_use]
pub fn is_windows() -> bool {
    env::consts::OS == "windows"
}

/// Asks the host whether its menu-bar clock shows 12-hour time.
///
/// Only macOS exposes this setting; every other platform reports
/// `LocaleLookupError::Unavailable`.
pub fn clock_format_preference() -> Result<bool, LocaleLookupError> {
    if !is_macos() {
        return Err(LocaleLookupError::Unavailable);
    }

    let output = Command::new("defaults")
        .args(["read", "com.apple.menuextra.clock", "DateFormat"])
        .stderr(Stdio::null())
        .output()
        .map_err(|e| LocaleLookupError::CommandFailed(e.to_string()))?;

    if !output.status.success() {
        return Err(LocaleLookupError::CommandFailed(format!(
            "defaults exited with {}",
            output.status
        )));
    }

    let format = String::from_utf8(output.stdout).map_err(|_| LocaleLookupError::Malformed)?;
    parse_clock_format(&format)
}

/// Interprets a date format pattern such as `"EEE h:mm a"`.
/// The `a` field is the AM/PM marker.
pub fn parse_clock_format(pattern: &str) -> Result<bool, LocaleLookupError> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Err(LocaleLookupError::Malformed);
    }
    Ok(pattern.contains('a'))
}

/// Whether the locale charset from the environment can carry UTF-8 text.
///
/// Unset variables and charset-less locales (`C`, `POSIX`) count as UTF-8.
#[must_use]
pub fn locale_accepts_utf8() -> bool {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty());

    match locale {
        Some(value) => charset_is_utf8(&value),
        None => true,
    }
}

fn charset_is_utf8(locale: &str) -> bool {
    match locale.split_once('.') {
        Some((_, charset)) => {
            let charset = charset.split('@').next().unwrap_or(charset).to_ascii_lowercase();
            charset == "utf-8" || charset == "utf8"
        }
        None => true,
    }
}

/// Opens `path` with the system's default application.
///
/// Tries each opener the platform may provide in turn and succeeds with the
/// first one that exits cleanly.
pub fn open_with_system_default(path: &Path) -> CoreResult<()> {
    for (program, args) in opener_chain() {
        match Command::new(program)
            .args(args)
            .arg(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) if status.success() => {
                debug!("Opened {} with {}", path.display(), program);
                return Ok(());
            }
            Ok(status) => debug!("{program} exited with {status}"),
            Err(e) => debug!("Could not run {program}: {e}"),
        }
    }

    Err(CoreError::OpenFailed(path.to_path_buf()))
}

const NO_ARGS: &[&str] = &[];
// `start` treats its first quoted argument as a window title.
const START_ARGS: &[&str] = &["/C", "start", ""];

fn opener_chain() -> Vec<(&'static str, &'static [&'static str])> {
    if is_windows() {
        vec![("cmd", START_ARGS)]
    } else if is_macos() {
        vec![("open", NO_ARGS)]
    } else {
        // cmd.exe covers WSL, where xdg-open is often missing.
        vec![("xdg-open", NO_ARGS), ("cmd.exe", START_ARGS)]
    }
}
