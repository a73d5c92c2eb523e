//! Source-Context Printer
//!
//! Shows the lines around a location so a report can be read without
//! opening an editor:
//!
//! ```text
//!          3 |	    let total = parts.iter().sum::<u32>();
//!          4 |	    let mean = total / parts.len() as u32;
//!        > 5 |	    tripwire::assert_always!(mean > 0, "mean underflow", parts);
//!          6 |	    mean
//!          7 |	}
//! ```
//!
//! Reading is best-effort. A missing or unreadable file yields no lines and
//! no error; the report goes on without context.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::render::colors;

/// Width the line-number column is padded to.
const NUMBER_WIDTH: usize = 10;

/// Why a [`SourceWindow`] could not be built.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("line numbers start at 1")]
    NoLine,
    #[error("cannot open `{}`", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A few consecutive lines of a source file around a target line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceWindow {
    /// 1-based number of `lines[0]`.
    first: usize,
    /// 1-based number of the highlighted line.
    target: usize,
    lines: Vec<String>,
}

impl SourceWindow {
    /// Lines shown before the target.
    pub const BEFORE: usize = 2;
    /// Lines shown after the target.
    pub const AFTER: usize = 2;

    /// Load the default window around `target` (1-based).
    pub fn load(path: &Path, target: usize) -> Result<Self, ContextError> {
        Self::load_with(path, target, Self::BEFORE, Self::AFTER)
    }

    /// Load `before` lines before and `after` lines after `target`.
    ///
    /// The window is clamped at line 1 and cut short at end of file. Invalid
    /// UTF-8 is replaced rather than rejected.
    pub fn load_with(
        path: &Path,
        target: usize,
        before: usize,
        after: usize,
    ) -> Result<Self, ContextError> {
        if target == 0 {
            return Err(ContextError::NoLine);
        }
        let file = File::open(path).map_err(|source| ContextError::Open {
            path: path.to_owned(),
            source,
        })?;
        let read_err = |source| ContextError::Read {
            path: path.to_owned(),
            source,
        };

        let first = target.saturating_sub(before).max(1);
        let last = target.saturating_add(after);
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();

        for _ in 1..first {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(read_err)? == 0 {
                break;
            }
        }

        let mut lines = Vec::new();
        for _ in first..=last {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(read_err)? == 0 {
                break;
            }
            while matches!(buf.last(), Some(b'\n' | b'\r')) {
                buf.pop();
            }
            lines.push(String::from_utf8_lossy(&buf).into_owned());
        }

        Ok(SourceWindow {
            first,
            target,
            lines,
        })
    }

    /// The highlighted line number.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Number of lines in the window.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the window holds no lines (target past end of file).
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// `(line number, text)` pairs in file order.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(move |(i, text)| (self.first + i, text.as_str()))
    }

    /// Write the window with a numbered gutter, highlighting the target.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) {
        for (number, text) in self.lines() {
            let pad = NUMBER_WIDTH.saturating_sub(count_digits(number));
            let _ = write!(writer, "{:pad$}", "");
            if number == self.target {
                let _ = writeln!(
                    writer,
                    "{}> {number} |\t{text}{}",
                    colors::BLUE,
                    colors::RESET
                );
            } else {
                let _ = writeln!(writer, "  {number} |\t{text}");
            }
        }
    }
}

fn count_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Print the default window around `path:line`, or nothing if unavailable.
pub fn print_source_context<W: Write + ?Sized>(writer: &mut W, path: &Path, line: usize) {
    match SourceWindow::load(path, line) {
        Ok(window) => window.write_to(writer),
        Err(err) => {
            tracing::debug!(path = %path.display(), line, error = %err, "no source context");
        }
    }
}

#[cfg(test)]
mod tests;
