//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run with ZEN75_DIR pointed at a
//! temporary log directory, and verify outputs.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command against the given log directory and return output.
fn run_cli(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "zen75-cli", "--"])
        .args(args)
        .env("ZEN75_DIR", dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run a CLI command with the given stdin content.
fn run_cli_with_input(dir: &Path, args: &[&str], input: &str) -> (String, i32) {
    let mut child = Command::new("cargo")
        .args(["run", "-p", "zen75-cli", "--"])
        .args(args)
        .env("ZEN75_DIR", dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn CLI command");

    child
        .stdin
        .as_mut()
        .expect("stdin not piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, code)
}

#[test]
fn test_status_shows_checklist_and_streak() {
    let tmp = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(tmp.path(), &["status"]);
    assert_eq!(code, 0, "status failed");
    assert!(stdout.contains("75 Zen"));
    assert!(stdout.contains("Progress:"));
    assert!(stdout.contains("Current Streak:"));
    assert!(stdout.contains("Best Streak:"));
}

#[test]
fn test_status_creates_day_files_on_first_use() {
    let tmp = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(tmp.path(), &["status"]);
    assert_eq!(code, 0, "status failed");
    assert!(tmp.path().join("streak.json").exists());
}

#[test]
fn test_check_toggles_item() {
    let tmp = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(tmp.path(), &["check", "4"]);
    assert_eq!(code, 0, "check failed");
    assert!(stdout.contains("Completed"));

    let (stdout, _, code) = run_cli(tmp.path(), &["check", "4"]);
    assert_eq!(code, 0, "second check failed");
    assert!(stdout.contains("Unchecked"));
}

#[test]
fn test_check_rejects_out_of_range_item() {
    let tmp = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(tmp.path(), &["check", "9"]);
    assert_ne!(code, 0, "check 9 unexpectedly succeeded");
    assert!(stderr.contains("error:"));
}

#[test]
fn test_reset_day_clears_checks() {
    let tmp = tempfile::tempdir().unwrap();
    let _ = run_cli(tmp.path(), &["check", "1"]);

    let (stdout, _, code) = run_cli(tmp.path(), &["reset_day"]);
    assert_eq!(code, 0, "reset_day failed");
    assert!(stdout.contains("reset"));

    let (stdout, _, code) = run_cli(tmp.path(), &["status"]);
    assert_eq!(code, 0, "status failed");
    assert!(stdout.contains("0/7") || stdout.contains("(0%)"));
}

#[test]
fn test_force_reset_cancelled_on_no() {
    let tmp = tempfile::tempdir().unwrap();
    let (stdout, code) = run_cli_with_input(tmp.path(), &["force_reset"], "n\n");
    assert_eq!(code, 0, "force_reset failed");
    assert!(stdout.contains("cancelled"));
}

#[test]
fn test_force_reset_confirmed() {
    let tmp = tempfile::tempdir().unwrap();
    let (stdout, code) = run_cli_with_input(tmp.path(), &["force_reset"], "y\n");
    assert_eq!(code, 0, "force_reset failed");
    assert!(stdout.contains("reset to 0"));
}

#[test]
fn test_morning_records_state_and_focus() {
    let tmp = tempfile::tempdir().unwrap();
    let (stdout, code) =
        run_cli_with_input(tmp.path(), &["morning"], "7\nship the release\n");
    assert_eq!(code, 0, "morning failed");
    assert!(stdout.contains("Set"));

    // A second run shows the stored values instead of prompting.
    let (stdout, code) = run_cli_with_input(tmp.path(), &["morning"], "");
    assert_eq!(code, 0, "second morning failed");
    assert!(stdout.contains("State: 7/10"));
    assert!(stdout.contains("ship the release"));
}

#[test]
fn test_review_locks_on_low_clarity() {
    let tmp = tempfile::tempdir().unwrap();
    // Clarity 2 is below the coherence threshold; the trailing newline
    // answers "press Enter when ready".
    let (stdout, code) = run_cli_with_input(tmp.path(), &["review"], "2\n\n");
    assert_eq!(code, 0, "review failed");
    assert!(stdout.contains("GATE LOCKED"));
    assert!(!stdout.contains("Entry recorded"));
}

#[test]
fn test_review_records_gated_entry() {
    let tmp = tempfile::tempdir().unwrap();
    let input = concat!(
        "8\n",                                           // gate 1 clarity
        "the streak module refactor end to end\n",       // attention
        "rewrote the update rule with tests\n",          // action
        "all streak tests pass on the first run\n",      // result
        "y\n",                                           // traceability
        "7\n",                                           // edge (no gate 3)
        "start with the failing test each morning\n",    // tiny change
        "y\n",                                           // concreteness
        "write the day store docs\n",                    // tomorrow
    );
    let (stdout, code) = run_cli_with_input(tmp.path(), &["review"], input);
    assert_eq!(code, 0, "review failed");
    assert!(stdout.contains("GATE PASSED"));
    assert!(stdout.contains("Entry recorded"));
}

#[test]
fn test_completions_generate() {
    let tmp = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(tmp.path(), &["completions", "bash"]);
    assert_eq!(code, 0, "completions failed");
    assert!(stdout.contains("75z"));
}
