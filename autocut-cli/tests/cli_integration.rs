use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use tempfile::tempdir;

fn autocut_cmd() -> Command {
    let mut cmd = Command::cargo_bin("autocut").expect("Failed to find autocut binary");
    for var in [
        "AUTOCUT_TITLE",
        "AUTOCUT_MACHINE_READABLE",
        "AUTOCUT_QUIET",
        "AUTOCUT_DEBUG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_color_short_hex() {
    autocut_cmd()
        .args(["color", "#fff"])
        .assert()
        .success()
        .stdout("255 255 255\n");
}

#[test]
fn test_color_long_hex_is_bgr() {
    autocut_cmd()
        .args(["color", "#ff8000"])
        .assert()
        .success()
        .stdout("0 128 255\n");
}

#[test]
fn test_color_invalid_hex_fails() {
    autocut_cmd()
        .args(["color", "#12"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid hex code"));
}

#[test]
fn test_error_clears_progress_line() {
    // Without a terminal the line is cleared across the 80 column fallback.
    let cleared = format!("  {}\r", " ".repeat(77));
    autocut_cmd()
        .args(["color", "not-a-colour"])
        .assert()
        .failure()
        .stdout(cleared)
        .stderr(contains("Error! Invalid hex code: not-a-colour"));
}

#[test]
fn test_duration_hours() {
    autocut_cmd()
        .args(["duration", "5400"])
        .assert()
        .success()
        .stdout("1.5 hours\n");
}

#[test]
fn test_track_machine_readable_counts_stdin_lines() {
    autocut_cmd()
        .args(["track", "--total", "3", "--machine-readable"])
        .write_stdin("one\ntwo\nthree\n")
        .assert()
        .success()
        .stdout(contains("Please wait~1~3~").and(contains("Please wait~3~3~")));
}

#[test]
fn test_track_counts_lines_that_are_not_utf8() {
    autocut_cmd()
        .args(["track", "--total", "3", "--machine-readable"])
        .write_stdin(b"a\n\xff\xfe\nc\n".to_vec())
        .assert()
        .success()
        .stdout(contains("Please wait~3~3~"));
}

#[test]
fn test_track_reads_piped_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("units.txt");
    fs::write(&input, "a\nb\nc\nd\n")?;

    autocut_cmd()
        .args(["track", "-n", "4", "--machine-readable", "--title", "Cut"])
        .pipe_stdin(&input)?
        .assert()
        .success()
        .stdout(contains("Cut~4~4~"));
    Ok(())
}

#[test]
fn test_track_quiet_prints_nothing() {
    autocut_cmd()
        .args(["track", "--total", "3", "--quiet"])
        .write_stdin("a\nb\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_track_simulated_task() {
    autocut_cmd()
        .args([
            "track",
            "--total",
            "3",
            "--delay-ms",
            "1",
            "--title",
            "Render",
            "--machine-readable",
        ])
        .assert()
        .success()
        .stdout(contains("Render~3~3~"));
}

#[test]
fn test_track_human_output_finishes() {
    autocut_cmd()
        .args(["track", "--total", "2", "--delay-ms", "1"])
        .assert()
        .success()
        .stdout(contains(" 100% done").and(contains("Finished. took")));
}

#[test]
fn test_track_short_input_warns() {
    autocut_cmd()
        .args(["track", "--total", "5", "--machine-readable"])
        .write_stdin("a\n")
        .assert()
        .success()
        .stderr(contains("Input ended after 1 of 5 units."));
}

#[test]
fn test_open_missing_file_fails() {
    autocut_cmd()
        .args(["open", "surely/this/does/not/exist/clip.mp4"])
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}

#[test]
fn test_track_requires_total() {
    autocut_cmd().arg("track").assert().failure();
}
