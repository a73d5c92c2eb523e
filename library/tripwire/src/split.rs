//! Expression Splitter
//!
//! The call-site macros capture the text of all extra arguments as one
//! string. This recovers the individual expressions so they can be paired
//! with their values.
//!
//! The split is textual: parentheses are the only nesting understood. Commas
//! inside string literals, closures' parameter lists, generic arguments or
//! brackets are treated as separators.

/// Split a comma-separated argument list at top-level commas.
///
/// Each segment is trimmed. Empty input yields no segments; a trailing comma
/// does not produce an empty final segment.
///
/// ```
/// use tripwire::split_expressions;
///
/// assert_eq!(split_expressions("a, f(b, c), d"), ["a", "f(b, c)", "d"]);
/// ```
pub fn split_expressions(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;

    for (i, byte) in text.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                segments.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if start < text.len() {
        segments.push(text[start..].trim());
    }
    segments
}
