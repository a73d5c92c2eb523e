//! Call-site dispatch for values of arbitrary type.
//!
//! Macros cannot name a value's type, and stable Rust has no specialization,
//! so the priority order is encoded in method resolution instead. Each tier
//! is a trait implemented for `Subject` behind a different number of
//! references; calling the method on `&&&&&&Subject(&value)` picks the impl
//! that needs the fewest auto-derefs, i.e. the highest tier whose bounds
//! hold:
//!
//! | Receiver | Trait | Bound | Rendering |
//! |---|---|---|---|
//! | `&&&&&Subject` | [`ViaStringify`] | `T: Stringify` | its own |
//! | `&&&&Subject` | [`ViaDisplay`] | `T: Display` | `` `text` `` |
//! | `&&&Subject` | [`ViaIterable`] | items `Stringify` | `{e0, e1}` |
//! | `&&Subject` | [`ViaDisplayItems`] | items `Display` | `` {`e0`, `e1`} `` |
//! | `&Subject` | [`ViaOpaqueItems`] | `&T: IntoIterator` | `{not printable, ...}` |
//! | `Subject` | [`ViaOpaque`] | none | `not printable` |
//!
//! The method-resolution trick only works when the concrete type is known,
//! which is why it lives at the macro boundary and not inside [`Stringify`].

use std::fmt;

use super::{write_braced, write_display, write_sequence, Stringify, NOT_PRINTABLE};

/// Borrowed value awaiting dispatch.
pub struct Subject<'a, T: ?Sized>(pub &'a T);

/// Tier 1: the value implements [`Stringify`].
pub trait ViaStringify {
    fn tripwire_render(&self) -> String;
}

impl<T: Stringify + ?Sized> ViaStringify for &&&&&Subject<'_, T> {
    fn tripwire_render(&self) -> String {
        self.0.stringify()
    }
}

/// Tier 2: the value implements `Display`.
pub trait ViaDisplay {
    fn tripwire_render(&self) -> String;
}

impl<T: fmt::Display + ?Sized> ViaDisplay for &&&&Subject<'_, T> {
    fn tripwire_render(&self) -> String {
        let mut out = String::new();
        write_display(&mut out, self.0);
        out
    }
}

/// Tier 3: iterable by reference, elements implement [`Stringify`].
pub trait ViaIterable {
    fn tripwire_render(&self) -> String;
}

impl<T: ?Sized> ViaIterable for &&&Subject<'_, T>
where
    for<'b> &'b T: IntoIterator,
    for<'b> <&'b T as IntoIterator>::Item: Stringify,
{
    fn tripwire_render(&self) -> String {
        let mut out = String::new();
        write_sequence(&mut out, self.0);
        out
    }
}

/// Tier 4: iterable by reference, elements implement `Display`.
pub trait ViaDisplayItems {
    fn tripwire_render(&self) -> String;
}

impl<T: ?Sized> ViaDisplayItems for &&Subject<'_, T>
where
    for<'b> &'b T: IntoIterator,
    for<'b> <&'b T as IntoIterator>::Item: fmt::Display,
{
    fn tripwire_render(&self) -> String {
        let mut out = String::new();
        write_braced(&mut out, self.0, |out, item| write_display(out, &item));
        out
    }
}

/// Tier 5: iterable by reference, elements have no textual form.
pub trait ViaOpaqueItems {
    fn tripwire_render(&self) -> String;
}

impl<T: ?Sized> ViaOpaqueItems for &Subject<'_, T>
where
    for<'b> &'b T: IntoIterator,
{
    fn tripwire_render(&self) -> String {
        let mut out = String::new();
        write_braced(&mut out, self.0, |out, _| out.push_str(NOT_PRINTABLE));
        out
    }
}

/// Tier 6: nothing applies.
pub trait ViaOpaque {
    fn tripwire_render(&self) -> String;
}

impl<T: ?Sized> ViaOpaque for Subject<'_, T> {
    fn tripwire_render(&self) -> String {
        NOT_PRINTABLE.to_owned()
    }
}

/// Stringify one value of any type, choosing the highest applicable tier.
#[doc(hidden)]
#[macro_export]
macro_rules! __stringify_value {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::value::dispatch::{
            ViaDisplay as _, ViaDisplayItems as _, ViaIterable as _, ViaOpaque as _,
            ViaOpaqueItems as _, ViaStringify as _,
        };
        (&&&&&&$crate::value::dispatch::Subject(&$value)).tripwire_render()
    }};
}
