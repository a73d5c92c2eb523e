#![cfg(feature = "minimal")]
#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
//! Reports of a crate built with the `minimal` feature.

mod common;

use common::{aborted_stderr, is_child, run_child, AFTER_CHECK};

#[test]
fn test_mode_is_minimal() {
    assert_eq!(tripwire::MODE, tripwire::Mode::Minimal);
}

#[test]
fn scenario_assert() {
    if !is_child() {
        return;
    }
    let x = 3;
    tripwire::assert_always!(x == 4, "numbers differ", x);
    eprintln!("{AFTER_CHECK}");
}

#[test]
fn test_always_check_prints_site_and_note() {
    let stderr = aborted_stderr(&run_child("scenario_assert"));

    assert!(stderr.contains("tests/minimal.rs:"), "{stderr}");
    assert!(stderr.contains(" - numbers differ"), "{stderr}");
    assert!(stderr.contains(tripwire::MINIMAL_NOTE), "{stderr}");
    assert!(!stderr.contains("Stacktrace"), "{stderr}");
    assert!(!stderr.contains("(0) x"), "{stderr}");
}

#[test]
fn scenario_eq() {
    if !is_child() {
        return;
    }
    let len = 2;
    tripwire::assert_always_eq!(len, 3, "length mismatch");
    eprintln!("{AFTER_CHECK}");
}

#[test]
fn test_always_eq_prints_note_only() {
    let stderr = aborted_stderr(&run_child("scenario_eq"));

    assert!(stderr.contains(" - length mismatch"), "{stderr}");
    assert!(stderr.contains(tripwire::MINIMAL_NOTE), "{stderr}");
    assert!(!stderr.contains("Left value"), "{stderr}");
}

#[test]
fn scenario_dbg() {
    if !is_child() {
        return;
    }
    let depth = 9;
    tripwire::assert_dbg!(depth < 4, "too deep", depth);
    eprintln!("{AFTER_CHECK}");
}

#[test]
fn test_dbg_check_aborts_silently() {
    let stderr = aborted_stderr(&run_child("scenario_dbg"));
    assert!(!stderr.contains("too deep"), "{stderr}");
    assert!(!stderr.contains(tripwire::MINIMAL_NOTE), "{stderr}");
}

#[test]
fn scenario_debug_print() {
    if !is_child() {
        return;
    }
    let retries = 3;
    tripwire::debug_print!(retries);
}

#[test]
fn test_debug_print_is_silent() {
    let output = run_child("scenario_debug_print");
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stderr), "");
}
