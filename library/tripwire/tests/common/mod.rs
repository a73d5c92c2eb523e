//! Child-process harness.
//!
//! A tripped check aborts the whole process, so each scenario runs as a
//! single test of this same binary in a child process. Scenario tests
//! return immediately unless [`CHILD_ENV`] is set.

use std::env;
use std::process::{Command, Output};

pub const CHILD_ENV: &str = "TRIPWIRE_CHILD";

/// Written by a scenario after the check; must never show up in output.
pub const AFTER_CHECK: &str = "execution continued past the check";

pub fn is_child() -> bool {
    env::var_os(CHILD_ENV).is_some()
}

/// Run the test named `name` of the current binary in a child process.
pub fn run_child(name: &str) -> Output {
    let exe = env::current_exe().unwrap();
    Command::new(exe)
        .args([name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap()
}

/// Child stderr as text, after asserting it terminated abnormally.
pub fn aborted_stderr(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    assert!(
        !output.status.success(),
        "child exited cleanly: {:?}\n{stderr}",
        output.status
    );
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(output.status.signal(), Some(6), "expected SIGABRT\n{stderr}");
    }
    assert!(!stderr.contains(AFTER_CHECK), "{stderr}");
    stderr
}
