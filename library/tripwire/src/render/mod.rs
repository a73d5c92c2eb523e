//! Report Renderer
//!
//! Writes the human-readable parts of a report: the location header, the
//! left/right comparison block and the enumerated expression/value listing.
//! Output always carries ANSI colors; reports are meant for a terminal.
//!
//! Write errors are ignored. A report is produced on the way to an abort
//! and there is nobody left to hand an error to.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::context::print_source_context;
use crate::split::split_expressions;
use crate::trace::{StackTrace, TraceLimits};

/// ANSI color codes for terminal output.
pub(crate) mod colors {
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const RED: &str = "\x1b[31m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Shown in place of an expression when the captured text has fewer
/// segments than there are values.
pub const UNKNOWN_EXPRESSION: &str = "<unknown>";

/// Source location of a tripped check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        CallSite { file, line }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One side of a comparison: its source text and rendered value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operand<'a> {
    pub expression: &'a str,
    pub value: String,
}

impl<'a> Operand<'a> {
    pub fn new(expression: &'a str, value: String) -> Self {
        Operand { expression, value }
    }
}

/// What a comparison expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// `assert_*_eq!`: the operands differed.
    Equal,
    /// `assert_*_ne!`: the operands were equal.
    Different,
}

impl Comparison {
    fn headline(self) -> &'static str {
        match self {
            Comparison::Equal => "Should be equal, but was different:",
            Comparison::Different => "Should be different, but was equal:",
        }
    }
}

/// Writes report sections to any sink.
pub struct Renderer<W: Write> {
    writer: W,
}

impl Renderer<io::StderrLock<'static>> {
    /// Renderer holding the stderr lock for its whole lifetime, so one
    /// report is never interleaved with output from other threads.
    pub fn stderr() -> Self {
        Renderer::new(io::stderr().lock())
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(writer: W) -> Self {
        Renderer { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// `<file>:<line>[ - <message>]` in bold red.
    pub fn header(&mut self, site: CallSite, message: &str) {
        let _ = write!(self.writer, "{}{}{site}", colors::RED, colors::BOLD);
        if !message.is_empty() {
            let _ = write!(self.writer, " - {message}");
        }
        let _ = writeln!(self.writer, "{}", colors::RESET);
    }

    pub fn condition(&mut self, condition: &str) {
        let _ = writeln!(self.writer, "Expected true, but was false: {condition}");
    }

    pub fn comparison(&mut self, kind: Comparison, left: &Operand<'_>, right: &Operand<'_>) {
        let w = &mut self.writer;
        let _ = writeln!(w, "   {}", kind.headline());
        let _ = writeln!(w, "   Left value:  {}", left.expression);
        let _ = writeln!(w, "           is:  {}", left.value);
        let _ = writeln!(w, "   Right value: {}", right.expression);
        let _ = writeln!(w, "            is: {}", right.value);
    }

    /// `\t(i) <expression> = <value>` for every captured value.
    ///
    /// Values are paired with the top-level segments of `expressions` by
    /// position. Missing segments show as [`UNKNOWN_EXPRESSION`]; surplus
    /// segments are ignored.
    pub fn values(&mut self, expressions: &str, values: &[String]) {
        let segments = split_expressions(expressions);
        if segments.len() < values.len() {
            tracing::trace!(
                segments = segments.len(),
                values = values.len(),
                "fewer expressions than values"
            );
        }
        for (i, value) in values.iter().enumerate() {
            let expression = segments.get(i).copied().unwrap_or(UNKNOWN_EXPRESSION);
            let _ = writeln!(self.writer, "\t({i}) {expression} = {value}");
        }
    }

    /// Captured call stack, most recent call last, each frame with context.
    pub fn stack_trace(&mut self, trace: &StackTrace, limits: TraceLimits) {
        let _ = writeln!(self.writer);
        let _ = writeln!(
            self.writer,
            "{}{}Stacktrace (most recent call last):{}",
            colors::YELLOW,
            colors::BOLD,
            colors::RESET
        );
        for frame in trace.visible(limits) {
            let _ = writeln!(
                self.writer,
                "{} #{} {}{}",
                colors::YELLOW,
                frame.index,
                frame.display_name(),
                colors::RESET
            );
            let _ = writeln!(self.writer, "\tat {}", frame.location());
            if let (Some(file), Some(line)) = (frame.file.as_deref(), frame.line) {
                self.source_context(file, line as usize);
            }
        }
        let _ = writeln!(self.writer);
    }

    pub fn source_context(&mut self, path: &Path, line: usize) {
        print_source_context(&mut self.writer, path, line);
    }

    /// Free-form line, used by minimal mode.
    pub fn note(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{text}");
    }

    pub fn blank_line(&mut self) {
        let _ = writeln!(self.writer);
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
