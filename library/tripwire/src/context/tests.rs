#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::io::Write as _;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use super::*;

fn ten_line_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for i in 1..=10 {
        writeln!(file, "line {i}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn render(path: &Path, line: usize) -> String {
    let mut out = Vec::new();
    print_source_context(&mut out, path, line);
    String::from_utf8(out).unwrap()
}

#[test]
fn test_window_around_middle_line() {
    let file = ten_line_file();
    let window = SourceWindow::load(file.path(), 5).unwrap();

    assert_eq!(window.len(), 5);
    assert_eq!(window.target(), 5);
    assert_eq!(
        window.lines().collect::<Vec<_>>(),
        vec![
            (3, "line 3"),
            (4, "line 4"),
            (5, "line 5"),
            (6, "line 6"),
            (7, "line 7"),
        ]
    );
}

#[test]
fn test_printed_window_highlights_only_target() {
    let file = ten_line_file();
    let text = render(file.path(), 5);

    let expected = format!(
        "           3 |\tline 3\n\
         \x20          4 |\tline 4\n\
         \x20        {blue}> 5 |\tline 5{reset}\n\
         \x20          6 |\tline 6\n\
         \x20          7 |\tline 7\n",
        blue = colors::BLUE,
        reset = colors::RESET,
    );
    assert_eq!(text, expected);
    assert_eq!(text.lines().count(), 5);
    assert_eq!(text.matches(colors::BLUE).count(), 1);
}

#[test]
fn test_window_clamped_at_start() {
    let file = ten_line_file();
    let window = SourceWindow::load(file.path(), 1).unwrap();
    let numbers: Vec<_> = window.lines().map(|(n, _)| n).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let text = render(file.path(), 1);
    let highlighted: Vec<_> = text.lines().filter(|l| l.contains(colors::BLUE)).collect();
    assert_eq!(highlighted.len(), 1);
    assert!(highlighted[0].contains("> 1 |\tline 1"));
}

#[test]
fn test_window_cut_at_end_of_file() {
    let file = ten_line_file();
    let window = SourceWindow::load(file.path(), 10).unwrap();
    let numbers: Vec<_> = window.lines().map(|(n, _)| n).collect();
    assert_eq!(numbers, vec![8, 9, 10]);
}

#[test]
fn test_target_past_end_of_file() {
    let file = ten_line_file();
    let window = SourceWindow::load(file.path(), 40).unwrap();
    assert!(window.is_empty());
    assert_eq!(render(file.path(), 40), "");
}

#[test]
fn test_wide_line_numbers_shrink_padding() {
    let mut file = NamedTempFile::new().unwrap();
    for i in 1..=12 {
        writeln!(file, "{i}").unwrap();
    }
    file.flush().unwrap();

    let text = render(file.path(), 10);
    let first = text.lines().next().unwrap();
    assert_eq!(first, "           8 |\t8");
    assert!(text.contains(&format!("        {}> 10 |\t10", colors::BLUE)));
}

#[test]
fn test_custom_window_size() {
    let file = ten_line_file();
    let window = SourceWindow::load_with(file.path(), 5, 0, 1).unwrap();
    assert_eq!(
        window.lines().collect::<Vec<_>>(),
        vec![(5, "line 5"), (6, "line 6")]
    );
}

#[test]
fn test_missing_file_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.rs");

    let err = SourceWindow::load(&path, 3).unwrap_err();
    assert!(matches!(err, ContextError::Open { .. }));
    assert!(err.to_string().contains("gone.rs"));
    assert_eq!(render(&path, 3), "");
}

#[test]
fn test_line_zero_is_rejected() {
    let file = ten_line_file();
    assert!(matches!(
        SourceWindow::load(file.path(), 0),
        Err(ContextError::NoLine)
    ));
    assert_eq!(render(file.path(), 0), "");
}

#[test]
fn test_crlf_and_invalid_utf8() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"first\r\nbad \xff byte\r\nlast").unwrap();
    file.flush().unwrap();

    let window = SourceWindow::load(file.path(), 2).unwrap();
    assert_eq!(
        window.lines().collect::<Vec<_>>(),
        vec![(1, "first"), (2, "bad \u{fffd} byte"), (3, "last")]
    );
}

#[test]
fn test_huge_window_reads_to_end_of_file() {
    let file = ten_line_file();

    let window = SourceWindow::load_with(file.path(), 1, 0, usize::MAX).unwrap();
    assert_eq!(window.len(), 10);
    assert_eq!(window.lines().next(), Some((1, "line 1")));

    let window = SourceWindow::load_with(file.path(), 4, usize::MAX, usize::MAX).unwrap();
    assert_eq!(window.len(), 10);
    assert_eq!(window.target(), 4);
}

#[test]
fn test_target_near_usize_max() {
    let file = ten_line_file();
    let window = SourceWindow::load(file.path(), usize::MAX).unwrap();
    assert!(window.is_empty());
}
