//! Build-time reporting mode.

/// How much a tripped check reports before terminating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Stack trace, header, comparison block and captured values.
    Diagnostic,
    /// File, line and message only; `_dbg` checks become unreachable hints
    /// and `debug_print!` does nothing.
    Minimal,
}

impl Mode {
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Mode::Diagnostic)
    }
}

/// The mode this crate was built with, chosen by the `minimal` feature.
pub const MODE: Mode = if cfg!(feature = "minimal") {
    Mode::Minimal
} else {
    Mode::Diagnostic
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_follows_feature() {
        assert_eq!(MODE.is_diagnostic(), !cfg!(feature = "minimal"));
    }

    #[test]
    fn test_is_diagnostic() {
        assert!(Mode::Diagnostic.is_diagnostic());
        assert!(!Mode::Minimal.is_diagnostic());
    }
}
