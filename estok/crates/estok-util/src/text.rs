//! Line terminator helpers.
//!
//! Two notions of "end of line" are in play when scanning ECMAScript:
//!
//! - A *line terminator* (`\n`, `\r`, or the pair `\r\n`) advances the line
//!   counter. This is what [`line_breaks`] counts.
//! - A *line break character* additionally includes U+2028 and U+2029. A
//!   match that runs "to the end of the line" (line comments, unterminated
//!   literal diagnostics) stops at any of these, see [`rest_of_line`].

/// Returns true for `\n` and `\r`.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Returns true for `\n`, `\r`, U+2028 and U+2029.
#[inline]
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// The prefix of `text` that stops before the first line break character.
///
/// # Examples
///
/// ```
/// use estok_util::text::rest_of_line;
///
/// assert_eq!(rest_of_line("// note\nnext"), "// note");
/// assert_eq!(rest_of_line("a\u{2028}b"), "a");
/// assert_eq!(rest_of_line("no break"), "no break");
/// ```
pub fn rest_of_line(text: &str) -> &str {
    match text.find(is_line_break) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// The prefix of `text` that stops before the first line terminator.
///
/// Used to echo the offending line back in "couldn't understand" errors.
pub fn first_line(text: &str) -> &str {
    match text.find(is_line_terminator) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Line terminators found inside a piece of matched text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineBreaks<'a> {
    /// Number of terminators; `\r\n` counts once.
    pub count: u32,
    /// Text after the last terminator, or `None` when `count` is zero.
    pub tail: Option<&'a str>,
}

/// Counts the line terminators in `text`.
///
/// # Examples
///
/// ```
/// use estok_util::text::line_breaks;
///
/// let breaks = line_breaks("a\r\nbc\nxyz");
/// assert_eq!(breaks.count, 2);
/// assert_eq!(breaks.tail, Some("xyz"));
///
/// assert_eq!(line_breaks("plain").count, 0);
/// ```
pub fn line_breaks(text: &str) -> LineBreaks<'_> {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut tail_start = None;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                count += 1;
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                tail_start = Some(i);
            }
            b'\n' => {
                count += 1;
                i += 1;
                tail_start = Some(i);
            }
            _ => i += 1,
        }
    }

    LineBreaks {
        count,
        tail: tail_start.map(|start| &text[start..]),
    }
}
