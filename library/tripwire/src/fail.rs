//! Failure Orchestrator
//!
//! Entry points called by the check macros. Each failing entry point renders
//! its report to stderr and aborts the process; none of them return.
//!
//! Every report is written while holding the stderr lock. Two threads
//! tripping at the same time still race for that lock and the loser may
//! never get to print, since the winner aborts the process.

use std::io::Write;
use std::process;

use crate::render::{CallSite, Comparison, Operand, Renderer};
use crate::trace::{StackTrace, TraceLimits};

/// Printed by minimal-mode builds in place of the full report.
pub const MINIMAL_NOTE: &str = "Compiled without debug assertions. Terminating...";

/// The kind of check that tripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure<'a> {
    /// `fail_*!`: reached a path that must not be reached.
    Explicit,
    /// `assert_*!`: a condition was false.
    Assertion { condition: &'a str },
    /// `assert_*_eq!` / `assert_*_ne!`.
    Comparison {
        kind: Comparison,
        left: Operand<'a>,
        right: Operand<'a>,
    },
}

/// Everything a diagnostic-mode report shows.
#[derive(Clone, Debug)]
pub struct Report<'a> {
    pub site: CallSite,
    pub message: &'a str,
    pub failure: Failure<'a>,
    /// Source text of the extra arguments, comma separated.
    pub expressions: &'a str,
    /// Rendered extra arguments, one per expression.
    pub values: &'a [String],
}

impl Report<'_> {
    /// Stack trace, header, failure details, then the captured values.
    pub fn render<W: Write>(&self, renderer: &mut Renderer<W>, trace: &StackTrace) {
        renderer.stack_trace(trace, TraceLimits::default());
        renderer.header(self.site, self.message);
        match &self.failure {
            Failure::Explicit => {}
            Failure::Assertion { condition } => renderer.condition(condition),
            Failure::Comparison { kind, left, right } => renderer.comparison(*kind, left, right),
        }
        renderer.values(self.expressions, self.values);
    }
}

/// Print the header and captured values without terminating.
pub fn print_debug(site: CallSite, expressions: &str, values: &[String]) {
    let mut renderer = Renderer::stderr();
    renderer.header(site, "");
    renderer.values(expressions, values);
    renderer.flush();
}

#[cold]
#[inline(never)]
pub fn fail(site: CallSite, message: &str, expressions: &str, values: &[String]) -> ! {
    trip(&Report {
        site,
        message,
        failure: Failure::Explicit,
        expressions,
        values,
    })
}

#[cold]
#[inline(never)]
pub fn fail_assert(
    site: CallSite,
    message: &str,
    condition: &str,
    expressions: &str,
    values: &[String],
) -> ! {
    trip(&Report {
        site,
        message,
        failure: Failure::Assertion { condition },
        expressions,
        values,
    })
}

#[cold]
#[inline(never)]
pub fn fail_eq(
    site: CallSite,
    message: &str,
    left: Operand<'_>,
    right: Operand<'_>,
    expressions: &str,
    values: &[String],
) -> ! {
    trip(&Report {
        site,
        message,
        failure: Failure::Comparison {
            kind: Comparison::Equal,
            left,
            right,
        },
        expressions,
        values,
    })
}

#[cold]
#[inline(never)]
pub fn fail_ne(
    site: CallSite,
    message: &str,
    left: Operand<'_>,
    right: Operand<'_>,
    expressions: &str,
    values: &[String],
) -> ! {
    trip(&Report {
        site,
        message,
        failure: Failure::Comparison {
            kind: Comparison::Different,
            left,
            right,
        },
        expressions,
        values,
    })
}

/// Minimal-mode report: location and message only.
#[cold]
#[inline(never)]
pub fn fail_note(site: CallSite, message: &str) -> ! {
    let mut renderer = Renderer::stderr();
    renderer.header(site, message);
    renderer.note(MINIMAL_NOTE);
    terminate(renderer)
}

/// Minimal-mode stand-in for a `_dbg` check that tripped: terminates at
/// once without output.
#[cold]
#[inline(never)]
pub fn unreachable() -> ! {
    process::abort()
}

/// Capture the stack from here, so the fixed top skip covers exactly this
/// function and the public entry point that called it.
#[inline(never)]
fn trip(report: &Report<'_>) -> ! {
    tracing::debug!(site = %report.site, failure = ?report.failure, "check tripped");
    let trace = StackTrace::capture();
    let mut renderer = Renderer::stderr();
    report.render(&mut renderer, &trace);
    terminate(renderer)
}

/// Trailing blank line, flush, then abort. Never `exit`: core dumps and
/// crash reporters must see an abnormal termination.
fn terminate<W: Write>(mut renderer: Renderer<W>) -> ! {
    renderer.blank_line();
    renderer.flush();
    drop(renderer);
    process::abort()
}
