//! Stack Trace Printer support
//!
//! Captures the current call stack through the `backtrace` crate and flattens
//! it into [`StackFrame`]s, one per resolved symbol so inlined calls get their
//! own entry. The renderer walks the frames innermost-last and drops a fixed
//! number at each end: the reporting path at the top and the runtime entry
//! frames at the bottom.

use std::fmt;
use std::path::{Path, PathBuf};

/// Frames hidden at each end of a captured stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceLimits {
    /// Innermost frames dropped (the reporting path down to the entry point).
    pub skip_top: usize,
    /// Outermost frames dropped (runtime start-up).
    pub skip_bottom: usize,
}

impl Default for TraceLimits {
    fn default() -> Self {
        TraceLimits {
            skip_top: 2,
            skip_bottom: 3,
        }
    }
}

/// One entry of a captured call stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackFrame {
    /// Position in the captured stack, 0 = innermost.
    pub index: usize,
    /// Demangled symbol name.
    pub name: Option<String>,
    pub file: Option<PathBuf>,
    pub line: Option<u32>,
    pub address: usize,
}

impl StackFrame {
    /// A frame carrying neither a symbol nor a source file has nothing worth
    /// printing.
    pub fn is_resolved(&self) -> bool {
        self.address != 0 && (self.name.is_some() || self.file.is_some())
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }

    /// `<file>:<line> at <address>`.
    pub fn location(&self) -> Location<'_> {
        Location(self)
    }
}

/// Display adapter for [`StackFrame::location`].
pub struct Location<'a>(&'a StackFrame);

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.0;
        match &frame.file {
            Some(file) => write!(f, "{}", file.display())?,
            None => f.write_str("<unknown>")?,
        }
        if let Some(line) = frame.line {
            write!(f, ":{line}")?;
        }
        write!(f, " at {:#x}", frame.address)
    }
}

/// A captured call stack.
#[derive(Clone, Debug, Default)]
pub struct StackTrace {
    frames: Vec<StackFrame>,
}

impl StackTrace {
    /// Capture and symbolize the calling thread's stack.
    ///
    /// Frames of the capture machinery itself are dropped, so index 0 is the
    /// function that called `capture`.
    pub fn capture() -> Self {
        let backtrace = backtrace::Backtrace::new();
        let mut raw = Vec::new();

        for frame in backtrace.frames() {
            let ip = frame.ip() as usize;
            let symbols = frame.symbols();
            if symbols.is_empty() {
                raw.push(StackFrame {
                    index: 0,
                    name: None,
                    file: None,
                    line: None,
                    address: ip,
                });
                continue;
            }
            for symbol in symbols {
                raw.push(StackFrame {
                    index: 0,
                    // `{:#}` drops the trailing symbol hash.
                    name: symbol.name().map(|name| format!("{name:#}")),
                    file: symbol.filename().map(Path::to_path_buf),
                    line: symbol.lineno(),
                    address: symbol.addr().map_or(ip, |addr| addr as usize),
                });
            }
        }

        let trace = Self::from_frames(raw.into_iter().skip_while(is_capture_machinery));
        tracing::trace!(frames = trace.len(), "captured stack");
        trace
    }

    /// Build a trace from already-resolved frames. Indices are reassigned.
    pub fn from_frames(frames: impl IntoIterator<Item = StackFrame>) -> Self {
        let frames = frames
            .into_iter()
            .enumerate()
            .map(|(index, frame)| StackFrame { index, ..frame })
            .collect();
        StackTrace { frames }
    }

    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames to print, outermost first, with `limits` applied and
    /// unresolved frames left out.
    pub fn visible(&self, limits: TraceLimits) -> impl Iterator<Item = &StackFrame> {
        let range = match self.frames.len().checked_sub(limits.skip_bottom + 1) {
            Some(last) if last >= limits.skip_top => limits.skip_top..last + 1,
            _ => 0..0,
        };
        self.frames[range].iter().rev().filter(|frame| {
            let keep = frame.is_resolved();
            if !keep {
                tracing::trace!(index = frame.index, "skipping unresolved frame");
            }
            keep
        })
    }
}

fn is_capture_machinery(frame: &StackFrame) -> bool {
    frame.name.as_deref().is_some_and(|name| {
        name.starts_with("backtrace::") || name.contains("tripwire::trace::StackTrace")
    })
}
