//! Integration tests for the castedit CLI

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use castedit::{CastFile, EventKind};

use crate::helpers::{castedit, fixture, load_fixture, max_gap, parse_output, times};

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn help_lists_commands() {
    castedit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("keep"))
        .stdout(predicate::str::contains("excise"))
        .stdout(predicate::str::contains("delete-word"));
}

#[test]
fn missing_input_is_a_usage_error() {
    castedit()
        .arg("keep")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<INPUT>"));
}

#[test]
fn malformed_range_is_a_usage_error() {
    castedit()
        .args(["excise"])
        .arg(fixture("session.cast"))
        .args(["--range", "five,six"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("START,END"));
}

// ============================================================================
// Edits
// ============================================================================

#[test]
fn quantize_with_large_delay_roundtrips() {
    let output = castedit()
        .arg("quantize")
        .arg(fixture("session.cast"))
        .args(["--delay", "1000"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let original = CastFile::parse_str(&load_fixture("session.cast")).unwrap();
    assert_eq!(parse_output(&output.stdout), original);
}

#[test]
fn quantize_default_delay_caps_gaps() {
    let output = castedit()
        .arg("quantize")
        .arg(fixture("session.cast"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let cast = parse_output(&output.stdout);
    assert!(max_gap(&cast) <= 1.0 + 1e-9);
    assert_eq!(cast.events.len(), 21);
}

#[test]
fn quantize_delay_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[edit]\nmax_delay = 0.25\n").unwrap();

    let output = castedit()
        .arg("quantize")
        .arg(fixture("session.cast"))
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(max_gap(&parse_output(&output.stdout)) <= 0.25 + 1e-9);
}

#[test]
fn keep_start_end_includes_boundary_event() {
    let output = castedit()
        .arg("keep")
        .arg(fixture("session.cast"))
        .args(["--start", "1.0", "--end", "1.8"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let cast = parse_output(&output.stdout);
    assert_eq!(cast.events.len(), 9);
    assert_eq!(cast.events[0].time, 0.0);
    assert_eq!(cast.events[8].data, "[sudo] password: ");
}

#[test]
fn keep_rejects_multiple_ranges() {
    castedit()
        .arg("keep")
        .arg(fixture("session.cast"))
        .args(["--range", "1,2", "--range", "3,4"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("exactly one range"));
}

#[test]
fn excise_removes_ranges() {
    let output = castedit()
        .arg("excise")
        .arg(fixture("session.cast"))
        .args(["--range", "3,3.8", "--range", "1,1.8"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let cast = parse_output(&output.stdout);
    let data: Vec<&str> = cast.events.iter().map(|e| e.data.as_str()).collect();
    assert_eq!(
        data,
        vec![
            "$ ",
            "[sudo] password: ",
            "\r\nfile.txt\r\n$ ",
            "still here\r\n",
            "end"
        ]
    );
    assert_eq!(cast.events[0].time, 0.0);
    assert!(max_gap(&cast) <= 1.0 + 1e-9);
}

#[test]
fn speed_factor_one_changes_nothing() {
    let output = castedit()
        .arg("speed")
        .arg(fixture("session.cast"))
        .args(["--range", "0,10", "--factor", "1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let original = CastFile::parse_str(&load_fixture("session.cast")).unwrap();
    assert_eq!(times(&parse_output(&output.stdout)), times(&original));
}

#[test]
fn speed_doubles_by_default() {
    let output = castedit()
        .arg("speed")
        .arg(fixture("sample.cast"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let cast = parse_output(&output.stdout);
    assert_eq!(times(&cast), vec![1.0, 1.5, 2.0, 2.05, 2.1, 2.5]);
}

#[test]
fn speed_rejects_zero_factor() {
    castedit()
        .arg("speed")
        .arg(fixture("sample.cast"))
        .args(["--factor", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("speed factor"));
}

#[test]
fn smush_collapses_leading_events() {
    let output = castedit()
        .arg("smush")
        .arg(fixture("session.cast"))
        .args(["--start", "15"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let cast = parse_output(&output.stdout);
    assert_eq!(cast.events.len(), 21);
    assert_eq!(cast.events[18].time, 0.0);
    assert_eq!(cast.events[19].time, 1.0);
    assert_eq!(cast.events[20].time, 1.5);
}

#[test]
fn delete_word_removes_password_keystrokes() {
    let output = castedit()
        .arg("delete-word")
        .arg(fixture("session.cast"))
        .arg("hunter2")
        .output()
        .unwrap();

    assert!(output.status.success());
    let cast = parse_output(&output.stdout);
    assert_eq!(cast.events.len(), 14);
    assert!(!cast
        .events
        .iter()
        .any(|e| e.kind == EventKind::Input && e.data == "h"));
    assert_eq!(cast.events.last().unwrap().kind, EventKind::Marker);
}

#[test]
fn delete_missing_word_keeps_recording() {
    let output = castedit()
        .arg("delete-word")
        .arg(fixture("sample.cast"))
        .arg("nothere")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(parse_output(&output.stdout).events.len(), 6);
}

#[test]
fn print_stdin_lists_typed_words() {
    castedit()
        .arg("print-stdin")
        .arg(fixture("session.cast"))
        .assert()
        .success()
        .stdout("1.0: sudo\n1.5: ls\n3.0: hunter2\n");
}

#[test]
fn reads_from_stdin() {
    let output = castedit()
        .args(["delete-word", "-", "del"])
        .write_stdin(load_fixture("sample.cast"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let cast = parse_output(&output.stdout);
    assert_eq!(cast.events.len(), 3);
    assert_eq!(cast.events[2].data, "three");
}

// ============================================================================
// Output handling
// ============================================================================

#[test]
fn writes_to_out_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("clean.cast");

    castedit()
        .arg("delete-word")
        .arg(fixture("sample.cast"))
        .arg("del")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(
        written,
        format!(
            "{}\n[1.0,\"o\",\"one\"]\n[2.0,\"o\",\"two\"]\n[4.0,\"o\",\"three\"]\n",
            load_fixture("sample.cast").lines().next().unwrap()
        )
    );
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("never.cast");

    castedit()
        .arg("quantize")
        .arg(fixture("session.cast"))
        .arg("--dry-run")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!out.exists());
}

#[test]
fn debug_logging_goes_to_stderr() {
    castedit()
        .arg("-vv")
        .arg("--dry-run")
        .arg("excise")
        .arg(fixture("session.cast"))
        .args(["--range", "5,14"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("recording header"))
        .stderr(predicate::str::contains("excised ranges"));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn nonexistent_input_fails() {
    castedit()
        .args(["quantize", "nonexistent.cast"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nonexistent.cast"));
}

#[test]
fn malformed_input_fails_before_writing() {
    castedit()
        .arg("quantize")
        .arg(fixture("malformed.cast"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn unsorted_input_is_rejected() {
    castedit()
        .arg("quantize")
        .arg(fixture("unsorted.cast"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("chronological"));
}

#[test]
fn missing_explicit_config_fails() {
    castedit()
        .arg("quantize")
        .arg(fixture("sample.cast"))
        .args(["--config", "/no/such/castedit.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

// ============================================================================
// Auxiliary commands
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    castedit()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[edit]"))
        .stdout(predicate::str::contains("max_delay = 1.0"))
        .stdout(predicate::str::contains("speed_factor = 2.0"));
}

#[test]
fn completions_for_bash() {
    castedit()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("castedit"));
}
