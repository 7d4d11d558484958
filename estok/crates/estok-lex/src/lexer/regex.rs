//! Regular expression literal matchers.
//!
//! These rules only run in operand position; the expression flag keeps
//! `a / b / c` from being read as a regular expression.

use estok_util::{is_line_break, is_line_terminator, rest_of_line};

use crate::chars::{char_at, prefix_len};

/// A backslash and the character it escapes, which may not be a line
/// break. Returns the byte length of both.
fn escape_len(text: &str, at: usize) -> Option<usize> {
    let escaped = char_at(text, at + 1).filter(|&c| !is_line_break(c))?;
    Some(1 + escaped.len_utf8())
}

/// A `[...]` class at the start of `text`. Inside it, `/` is an ordinary
/// character.
fn class_len(text: &str) -> Option<usize> {
    let mut i = 1;
    while let Some(c) = char_at(text, i) {
        match c {
            '\\' => i += escape_len(text, i)?,
            ']' => return Some(i + 1),
            c if is_line_terminator(c) => return None,
            c => i += c.len_utf8(),
        }
    }
    None
}

/// `/body/flags` with a non-empty body.
///
/// A `[` that never closes on its line is taken as an ordinary body
/// character.
pub(super) fn regex_literal(text: &str) -> Option<usize> {
    if !text.starts_with('/') {
        return None;
    }

    let mut i = 1;
    loop {
        match char_at(text, i)? {
            '\\' => i += escape_len(text, i)?,
            '[' => i += class_len(&text[i..]).unwrap_or(1),
            '/' if i > 1 => break,
            '/' => return None,
            c if is_line_terminator(c) => return None,
            c => i += c.len_utf8(),
        }
    }

    let closed = i + 1;
    Some(closed + prefix_len(&text[closed..], |c| c.is_ascii_alphabetic()))
}

/// A `/` in operand position that does not form a regular expression,
/// reported to the end of its line.
pub(super) fn unterminated_regex(text: &str) -> Option<usize> {
    text.starts_with('/').then(|| rest_of_line(text).len())
}
