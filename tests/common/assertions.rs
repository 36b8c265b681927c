//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Assert that `text` is a grid of `height` lines with `width` tokens each,
/// every line ending in a single trailing space
pub fn assert_grid_shape(text: &str, width: usize, height: usize) {
    if width == 0 || height == 0 {
        assert_eq!(text, "", "Empty image should produce no output");
        return;
    }

    assert!(text.ends_with('\n'), "Grid should end with a line break");
    let lines: Vec<&str> = text.split_terminator('\n').collect();
    assert_eq!(lines.len(), height, "Expected {height} lines in {text:?}");

    for (y, line) in lines.iter().enumerate() {
        assert!(
            line.ends_with(' ') && !line.ends_with("  "),
            "Line {y} should end with exactly one space: {line:?}"
        );
        assert_eq!(
            line.split(' ').filter(|t| !t.is_empty()).count(),
            width,
            "Line {y} should have {width} tokens: {line:?}"
        );
    }
}

/// Tokens of each line
pub fn grid_tokens(text: &str) -> Vec<Vec<&str>> {
    text.split_terminator('\n')
        .map(|line| line.split_whitespace().collect())
        .collect()
}
