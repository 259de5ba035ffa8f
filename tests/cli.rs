//! Integration tests for the bridge binary.
//!
//! These only exercise paths that terminate before privilege elevation:
//! a successful end-to-end run needs the setuid bit and the deployed
//! provisioner, neither of which exists in a test environment. The
//! elevate-and-invoke half is covered by unit tests against the port traits.

use std::process::Command;

fn run_bridge(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_task-bridge");
    Command::new(bin).args(args).output().expect("failed to run task-bridge binary")
}

#[test]
fn no_arguments_is_a_usage_error() {
    let output = run_bridge(&[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Usage"));
}

#[test]
fn two_arguments_is_a_usage_error() {
    let output = run_bridge(&["nightly-db", "0 2 * * *"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("PRUNE_SCHEDULE"));
}

#[test]
fn four_arguments_is_a_usage_error() {
    let output = run_bridge(&["nightly-db", "0 2 * * *", "0 3 * * 0", "extra"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn injection_attempt_in_name_is_rejected() {
    let output = run_bridge(&["nightly-db; rm -rf /", "0 2 * * *", "0 3 * * 0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("invalid NAME"));
    // The rejected value itself must not be echoed back.
    assert!(!stderr.contains("rm -rf"));
}

#[test]
fn malformed_schedule_is_rejected() {
    let output = run_bridge(&["nightly-db", "every night", "0 3 * * 0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("invalid SCHEDULE"));
}

#[test]
fn malformed_prune_schedule_is_rejected() {
    let output = run_bridge(&["nightly-db", "0 2 * * *", "0 3 * *"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("invalid PRUNE_SCHEDULE"));
}

#[test]
fn help_prints_the_three_parameters() {
    let output = run_bridge(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("NAME"));
    assert!(stdout.contains("SCHEDULE"));
    assert!(stdout.contains("PRUNE_SCHEDULE"));
}
