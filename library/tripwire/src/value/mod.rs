//! Value Stringifier
//!
//! Turns captured values into the text shown next to their expressions in a
//! report. Rendering depends on what a value *is*, checked in this order:
//!
//! 1. Byte-sized integers (`u8`, `i8`) render as a character: a control
//!    mnemonic for 0..=31 and 127, the glyph itself for 32..=126, followed by
//!    the numeric value and its signedness.
//! 2. Booleans render as `` `true` `` / `` `false` ``.
//! 3. Scalars with a textual form render that text in backticks.
//! 4. Collections render each element recursively: `{a, b, c}`.
//! 5. Anything else renders as `not printable`.
//!
//! Tiers 1-4 for known types are the [`Stringify`] trait. Call-site macros
//! additionally reach arbitrary user types through a dispatch step that
//! falls back to `Display`, then to by-reference iteration (rendering each
//! element by the same rules), then to the opaque marker.

#[doc(hidden)]
pub mod dispatch;

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::fmt::{self, Write};
use std::rc::Rc;
use std::sync::Arc;

use crate::stack::with_stack_headroom;

/// Rendering of a value with no usable textual form.
pub const NOT_PRINTABLE: &str = "not printable";

/// Mnemonics for the ASCII control range 0..=31.
const CONTROL_NAMES: [&str; 32] = [
    "\\0", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "\\a", "\\b", "\\t", "\\n", "\\v", "\\f",
    "\\r", "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", "CAN", "EM",
    "SUB", "ESC", "FS", "GS", "RS", "US",
];

const DEL: u8 = 0x7f;

/// A value that knows how to render itself into a report.
///
/// Implement this for your own types when they should render inside
/// collections; for `Display` types [`impl_stringify_via_display!`] does it
/// in one line.
///
/// [`impl_stringify_via_display!`]: crate::impl_stringify_via_display
pub trait Stringify {
    /// Append the rendering of `self` to `out`.
    fn stringify_into(&self, out: &mut String);

    /// Render `self` into a fresh string.
    fn stringify(&self) -> String {
        let mut out = String::new();
        self.stringify_into(&mut out);
        out
    }
}

/// Render a byte as a character followed by its numeric value.
///
/// `byte` selects the glyph; `numeric` is what the source type actually
/// holds, so `-1i8` shows as `-1` rather than `255`. Bytes above 127 have
/// no glyph and render as ` numeric: ...` alone.
fn write_byte(out: &mut String, byte: u8, numeric: impl fmt::Display, signed: bool) {
    if let Some(name) = CONTROL_NAMES.get(usize::from(byte)) {
        let _ = write!(out, "`{name}`");
    } else if byte == DEL {
        out.push_str("`DEL`");
    } else if byte < DEL {
        let _ = write!(out, "`{}`", char::from(byte));
    }

    let signedness = if signed { "signed" } else { "unsigned" };
    let _ = write!(out, " numeric: {numeric} ({signedness})");
}

/// Render any `Display` value in backticks.
pub(crate) fn write_display(out: &mut String, value: &(impl fmt::Display + ?Sized)) {
    let _ = write!(out, "`{value}`");
}

/// Render a sequence as `{e0, e1, ...}`, each element by `write_item`.
pub(crate) fn write_braced<I: IntoIterator>(
    out: &mut String,
    items: I,
    mut write_item: impl FnMut(&mut String, I::Item),
) {
    out.push('{');
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_item(out, item);
    }
    out.push('}');
}

/// Render a sequence of [`Stringify`] elements, recursing into each.
pub(crate) fn write_sequence<I>(out: &mut String, items: I)
where
    I: IntoIterator,
    I::Item: Stringify,
{
    write_braced(out, items, |out, item| {
        with_stack_headroom(|| item.stringify_into(out));
    });
}

impl Stringify for u8 {
    fn stringify_into(&self, out: &mut String) {
        write_byte(out, *self, *self, false);
    }
}

impl Stringify for i8 {
    fn stringify_into(&self, out: &mut String) {
        write_byte(out, u8::from_ne_bytes(self.to_ne_bytes()), *self, true);
    }
}

impl Stringify for bool {
    fn stringify_into(&self, out: &mut String) {
        out.push_str(if *self { "`true`" } else { "`false`" });
    }
}

impl Stringify for str {
    fn stringify_into(&self, out: &mut String) {
        write_display(out, self);
    }
}

/// Implement [`Stringify`] for types whose `Display` output is their rendering.
///
/// ```
/// use std::fmt;
/// use tripwire::Stringify;
///
/// struct Celsius(f32);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}°C", self.0)
///     }
/// }
///
/// tripwire::impl_stringify_via_display!(Celsius);
///
/// assert_eq!(vec![Celsius(1.5)].stringify(), "{`1.5°C`}");
/// ```
#[macro_export]
macro_rules! impl_stringify_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Stringify for $ty {
                fn stringify_into(&self, out: &mut ::std::string::String) {
                    use ::std::fmt::Write as _;
                    let _ = ::std::write!(out, "`{}`", self);
                }
            }
        )+
    };
}

impl_stringify_via_display!(
    u16, u32, u64, u128, usize, i16, i32, i64, i128, isize, f32, f64, char, String,
);

impl Stringify for Cow<'_, str> {
    fn stringify_into(&self, out: &mut String) {
        write_display(out, self.as_ref());
    }
}

impl<T: Stringify + ?Sized> Stringify for &T {
    fn stringify_into(&self, out: &mut String) {
        (**self).stringify_into(out);
    }
}

impl<T: Stringify + ?Sized> Stringify for &mut T {
    fn stringify_into(&self, out: &mut String) {
        (**self).stringify_into(out);
    }
}

impl<T: Stringify + ?Sized> Stringify for Box<T> {
    fn stringify_into(&self, out: &mut String) {
        (**self).stringify_into(out);
    }
}

impl<T: Stringify + ?Sized> Stringify for Rc<T> {
    fn stringify_into(&self, out: &mut String) {
        (**self).stringify_into(out);
    }
}

impl<T: Stringify + ?Sized> Stringify for Arc<T> {
    fn stringify_into(&self, out: &mut String) {
        (**self).stringify_into(out);
    }
}

impl<T: Stringify> Stringify for [T] {
    fn stringify_into(&self, out: &mut String) {
        write_sequence(out, self);
    }
}

impl<T: Stringify, const N: usize> Stringify for [T; N] {
    fn stringify_into(&self, out: &mut String) {
        write_sequence(out, self);
    }
}

impl<T: Stringify> Stringify for Vec<T> {
    fn stringify_into(&self, out: &mut String) {
        write_sequence(out, self);
    }
}

impl<T: Stringify> Stringify for VecDeque<T> {
    fn stringify_into(&self, out: &mut String) {
        write_sequence(out, self);
    }
}

impl<T: Stringify> Stringify for LinkedList<T> {
    fn stringify_into(&self, out: &mut String) {
        write_sequence(out, self);
    }
}

impl<T: Stringify> Stringify for BTreeSet<T> {
    fn stringify_into(&self, out: &mut String) {
        write_sequence(out, self);
    }
}

impl<T: Stringify, S> Stringify for HashSet<T, S> {
    fn stringify_into(&self, out: &mut String) {
        write_sequence(out, self);
    }
}
