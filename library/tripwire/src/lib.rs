//! Debug assertions that print a readable crash report before aborting.
//!
//! A tripped check writes, in order:
//!
//! - the call stack, outermost frame first, each frame followed by a few
//!   lines of its source;
//! - the check's file, line and message;
//! - for comparisons, both operands with their source text and values;
//! - every extra expression passed to the macro next to its value.
//!
//! The process then aborts. Reports go to stderr with ANSI colors.
//!
//! ```text
//! let hosts = vec!["a", "b"];
//! tripwire::assert_always_eq!(hosts.len(), 3, "missing host", hosts);
//! ```
//!
//! # Modes
//!
//! The default build is diagnostic. Enabling the `minimal` feature shrinks
//! every report to the call site, the message and a one-line note, turns
//! `_dbg` checks into unreachable hints and silences [`debug_print!`].
//! See [`MODE`].

mod context;
mod fail;
mod macros;
mod mode;
mod render;
mod split;
mod stack;
mod trace;
pub mod value;

pub use context::{print_source_context, ContextError, SourceWindow};
pub use fail::{
    fail, fail_assert, fail_eq, fail_ne, fail_note, print_debug, unreachable, Failure, Report,
    MINIMAL_NOTE,
};
pub use mode::{Mode, MODE};
pub use render::{CallSite, Comparison, Operand, Renderer, UNKNOWN_EXPRESSION};
pub use split::split_expressions;
pub use trace::{Location, StackFrame, StackTrace, TraceLimits};
pub use value::{Stringify, NOT_PRINTABLE};
