//! Identifier, keyword and fixed literal matchers.
//!
//! Word-like rules compare the *whole* run of identifier characters against
//! their word list, so `instanceof` is never split into `in` + `stanceof`
//! and `nullable` is an identifier, not `null` + `able`.

use crate::chars::{is_ident_part, is_ident_start, prefix_len};

/// `true`, `false`, `null`, `this`.
const FIXED_LITERALS: &[&str] = &["false", "true", "null", "this"];

/// Reserved words of the base edition.
const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "return",
    "super",
    "switch",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
];

/// Words reserved only from ES2015 on, and only in some positions.
const CONTEXTUAL_KEYWORDS: &[&str] = &["await", "let", "static", "yield"];

/// Byte length of an escape unit: `\u00XY`.
const ESCAPE_LEN: usize = 6;

/// Length of the plain identifier-character run at the start of `text`.
fn word_len(text: &str) -> usize {
    prefix_len(text, is_ident_part)
}

/// Matches a whole word from `words`.
fn word_in(text: &str, words: &[&str]) -> Option<usize> {
    let len = word_len(text);
    words.contains(&&text[..len]).then_some(len)
}

pub(super) fn fixed_literal(text: &str) -> Option<usize> {
    word_in(text, FIXED_LITERALS)
}

pub(super) fn keyword(text: &str) -> Option<usize> {
    word_in(text, KEYWORDS)
}

pub(super) fn contextual_keyword(text: &str) -> Option<usize> {
    word_in(text, CONTEXTUAL_KEYWORDS)
}

/// Decodes the two hex digits of a `\u00XY` escape at the start of `text`.
fn escape_code(text: &str) -> Option<u8> {
    let digits = text.strip_prefix("\\u00")?.get(..2)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

/// Whether an escape naming `code` may start an identifier.
fn escape_starts(code: u8) -> bool {
    code.is_ascii_alphabetic() || code == b'$' || code == b'_'
}

/// Whether an escape naming `code` may continue an identifier.
fn escape_continues(code: u8) -> bool {
    escape_starts(code) || code.is_ascii_digit()
}

/// Length of one identifier unit at the start of `text`: a single
/// character accepted by `plain`, or an escape accepted by `escaped`.
fn unit(text: &str, plain: fn(char) -> bool, escaped: fn(u8) -> bool) -> Option<usize> {
    match text.chars().next()? {
        '\\' => escape_code(text).filter(|&code| escaped(code)).map(|_| ESCAPE_LEN),
        c if plain(c) => Some(1),
        _ => None,
    }
}

/// An identifier name: ASCII letters, digits, `_`, `$`, and `\u00XY`
/// escapes of those characters. A digit cannot come first.
///
/// Only the escapes that name `[A-Za-z0-9_$]` are accepted; anything else
/// (including `\u{...}` and non-ASCII letters) ends the match.
pub(super) fn identifier(text: &str) -> Option<usize> {
    let mut len = unit(text, is_ident_start, escape_starts)?;
    while let Some(next) = unit(&text[len..], is_ident_part, escape_continues) {
        len += next;
    }
    Some(len)
}
