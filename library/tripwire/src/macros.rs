//! Check macros.
//!
//! Every macro takes an optional list of extra expressions after the
//! message. Their values are rendered next to their source text in the
//! report:
//!
//! ```text
//! src/queue.rs:88 - head ran past tail
//! Expected true, but was false: head <= tail
//!     (0) head = `12`
//!     (1) self.slots.len() = `8`
//! ```
//!
//! `_always` checks run in every build. `_dbg` checks behave the same in
//! diagnostic builds and turn into a silent abort under the `minimal`
//! feature. Extras are only evaluated when a report is actually rendered.

/// Site of the macro invocation.
#[doc(hidden)]
#[macro_export]
macro_rules! __call_site {
    () => {
        $crate::CallSite::new(::std::file!(), ::std::line!())
    };
}

/// Abort with a report if `cond` is false.
///
/// ```no_run
/// let queue = vec![1, 2];
/// tripwire::assert_always!(queue.len() > 2, "queue too short", queue);
/// ```
#[macro_export]
macro_rules! assert_always {
    ($cond:expr, $msg:expr $(, $extra:expr)* $(,)?) => {
        if !$cond {
            if $crate::MODE.is_diagnostic() {
                $crate::fail_assert(
                    $crate::__call_site!(),
                    &$msg,
                    ::std::stringify!($cond),
                    ::std::stringify!($($extra),*),
                    &[$($crate::__stringify_value!($extra)),*],
                )
            } else {
                $crate::fail_note($crate::__call_site!(), &$msg)
            }
        }
    };
}

/// [`assert_always!`] in diagnostic builds, an unreachable hint otherwise.
#[macro_export]
macro_rules! assert_dbg {
    ($cond:expr, $msg:expr $(, $extra:expr)* $(,)?) => {
        if $crate::MODE.is_diagnostic() {
            $crate::assert_always!($cond, $msg $(, $extra)*);
        } else if !$cond {
            $crate::unreachable();
        }
    };
}

/// Abort with a report if `left != right`. Each operand is evaluated once.
#[macro_export]
macro_rules! assert_always_eq {
    ($left:expr, $right:expr, $msg:expr $(, $extra:expr)* $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left == *right) {
                    if $crate::MODE.is_diagnostic() {
                        $crate::fail_eq(
                            $crate::__call_site!(),
                            &$msg,
                            $crate::Operand::new(
                                ::std::stringify!($left),
                                $crate::__stringify_value!(*left),
                            ),
                            $crate::Operand::new(
                                ::std::stringify!($right),
                                $crate::__stringify_value!(*right),
                            ),
                            ::std::stringify!($($extra),*),
                            &[$($crate::__stringify_value!($extra)),*],
                        )
                    } else {
                        $crate::fail_note($crate::__call_site!(), &$msg)
                    }
                }
            }
        }
    };
}

/// [`assert_always_eq!`] in diagnostic builds, an unreachable hint otherwise.
#[macro_export]
macro_rules! assert_dbg_eq {
    ($left:expr, $right:expr, $msg:expr $(, $extra:expr)* $(,)?) => {
        if $crate::MODE.is_diagnostic() {
            $crate::assert_always_eq!($left, $right, $msg $(, $extra)*);
        } else if !($left == $right) {
            $crate::unreachable();
        }
    };
}

/// Abort with a report if `left == right`. Each operand is evaluated once.
#[macro_export]
macro_rules! assert_always_ne {
    ($left:expr, $right:expr, $msg:expr $(, $extra:expr)* $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left != *right) {
                    if $crate::MODE.is_diagnostic() {
                        $crate::fail_ne(
                            $crate::__call_site!(),
                            &$msg,
                            $crate::Operand::new(
                                ::std::stringify!($left),
                                $crate::__stringify_value!(*left),
                            ),
                            $crate::Operand::new(
                                ::std::stringify!($right),
                                $crate::__stringify_value!(*right),
                            ),
                            ::std::stringify!($($extra),*),
                            &[$($crate::__stringify_value!($extra)),*],
                        )
                    } else {
                        $crate::fail_note($crate::__call_site!(), &$msg)
                    }
                }
            }
        }
    };
}

/// [`assert_always_ne!`] in diagnostic builds, an unreachable hint otherwise.
#[macro_export]
macro_rules! assert_dbg_ne {
    ($left:expr, $right:expr, $msg:expr $(, $extra:expr)* $(,)?) => {
        if $crate::MODE.is_diagnostic() {
            $crate::assert_always_ne!($left, $right, $msg $(, $extra)*);
        } else if !($left != $right) {
            $crate::unreachable();
        }
    };
}

/// Abort with a report unconditionally. Usable wherever any type is
/// expected.
#[macro_export]
macro_rules! fail_always {
    ($msg:expr $(, $extra:expr)* $(,)?) => {
        if $crate::MODE.is_diagnostic() {
            $crate::fail(
                $crate::__call_site!(),
                &$msg,
                ::std::stringify!($($extra),*),
                &[$($crate::__stringify_value!($extra)),*],
            )
        } else {
            $crate::fail_note($crate::__call_site!(), &$msg)
        }
    };
}

/// [`fail_always!`] in diagnostic builds, an unreachable hint otherwise.
#[macro_export]
macro_rules! fail_dbg {
    ($msg:expr $(, $extra:expr)* $(,)?) => {
        if $crate::MODE.is_diagnostic() {
            $crate::fail_always!($msg $(, $extra)*)
        } else {
            $crate::unreachable()
        }
    };
}

/// Print the call site and the given values to stderr and carry on.
///
/// Does nothing under the `minimal` feature.
///
/// ```
/// let retries = 3;
/// let hosts = ["a", "b"];
/// tripwire::debug_print!(retries, hosts);
/// ```
#[macro_export]
macro_rules! debug_print {
    ($($extra:expr),* $(,)?) => {
        if $crate::MODE.is_diagnostic() {
            $crate::print_debug(
                $crate::__call_site!(),
                ::std::stringify!($($extra),*),
                &[$($crate::__stringify_value!($extra)),*],
            );
        }
    };
}
