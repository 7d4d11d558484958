//! String and template literal matchers.
//!
//! Escapes are recognized only so that an escaped delimiter does not end
//! the literal; nothing is decoded.

use estok_util::rest_of_line;

use crate::chars::char_at;

/// A quoted string: `'...'` or `"..."`.
///
/// A backslash escapes any following character, and a backslash before
/// `\r\n` escapes the pair. An unescaped line terminator ends the match
/// unsuccessfully.
pub(super) fn string_literal(text: &str) -> Option<usize> {
    let quote = text.chars().next().filter(|c| matches!(c, '"' | '\''))?;
    let mut chars = text.char_indices().skip(1).peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                let (_, escaped) = chars.next()?;
                if escaped == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
                    chars.next();
                }
            }
            '\n' | '\r' => return None,
            c if c == quote => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// An opening quote and the rest of its line.
pub(super) fn unterminated_string(text: &str) -> Option<usize> {
    text.starts_with(['"', '\'']).then(|| rest_of_line(text).len())
}

/// Where a run of template characters stopped.
#[derive(Debug, PartialEq, Eq)]
enum TemplateStop {
    /// At a closing backtick, at this byte offset
    Backtick(usize),
    /// At the `$` of a `${`, at this byte offset
    Interpolation(usize),
}

/// Walks template characters starting at byte offset `from`.
///
/// Returns `None` when the input ends first.
fn template_chars(text: &str, from: usize) -> Option<TemplateStop> {
    let bytes = text.as_bytes();
    let mut i = from;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1 + char_at(text, i + 1)?.len_utf8(),
            b'`' => return Some(TemplateStop::Backtick(i)),
            b'$' if bytes.get(i + 1) == Some(&b'{') => return Some(TemplateStop::Interpolation(i)),
            // Multi-byte chars never contain ASCII bytes, so stepping a
            // byte at a time is safe here.
            _ => i += 1,
        }
    }
    None
}

/// Matches `open` + template characters + a backtick.
fn up_to_backtick(text: &str, open: char) -> Option<usize> {
    if !text.starts_with(open) {
        return None;
    }
    match template_chars(text, 1)? {
        TemplateStop::Backtick(i) => Some(i + 1),
        TemplateStop::Interpolation(_) => None,
    }
}

/// Matches `open` + template characters + `${`.
fn up_to_interpolation(text: &str, open: char) -> Option<usize> {
    if !text.starts_with(open) {
        return None;
    }
    match template_chars(text, 1)? {
        TemplateStop::Interpolation(i) => Some(i + 2),
        TemplateStop::Backtick(_) => None,
    }
}

/// `` `...` `` with no interpolation.
pub(super) fn template_literal(text: &str) -> Option<usize> {
    up_to_backtick(text, '`')
}

/// `` `...${ ``
pub(super) fn template_head(text: &str) -> Option<usize> {
    up_to_interpolation(text, '`')
}

/// A backtick and the rest of its line.
pub(super) fn unterminated_template(text: &str) -> Option<usize> {
    text.starts_with('`').then(|| rest_of_line(text).len())
}

/// `` }...` ``
pub(super) fn template_tail(text: &str) -> Option<usize> {
    up_to_backtick(text, '}')
}

/// `}...${`
pub(super) fn template_middle(text: &str) -> Option<usize> {
    up_to_interpolation(text, '}')
}

/// A `}` and the rest of its line.
pub(super) fn unterminated_template_section(text: &str) -> Option<usize> {
    text.starts_with('}').then(|| rest_of_line(text).len())
}
