//! Comment matchers.
//!
//! Comments are emitted as tokens rather than skipped, so the scanner's
//! output still covers every byte of the input.

use estok_util::rest_of_line;

/// `//` to the end of the line.
pub(super) fn line_comment(text: &str) -> Option<usize> {
    text.starts_with("//").then(|| rest_of_line(text).len())
}

/// `/* ... */`, possibly spanning lines. The first `*/` closes it.
pub(super) fn block_comment(text: &str) -> Option<usize> {
    let body = text.strip_prefix("/*")?;
    body.find("*/").map(|end| 2 + end + 2)
}

/// `/*` with no closing `*/`. Reported from the opener to the end of its
/// line.
pub(super) fn unterminated_block_comment(text: &str) -> Option<usize> {
    text.starts_with("/*").then(|| rest_of_line(text).len())
}

/// `-->` to the end of the line. Only recognized at the start of a line.
pub(super) fn html_close_comment(text: &str) -> Option<usize> {
    text.starts_with("-->").then(|| rest_of_line(text).len())
}

/// `<!--` to the end of the line.
pub(super) fn html_open_comment(text: &str) -> Option<usize> {
    text.starts_with("<!--").then(|| rest_of_line(text).len())
}
