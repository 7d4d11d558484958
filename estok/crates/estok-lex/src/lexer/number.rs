//! Numeric literal matchers.
//!
//! Each matcher is anchored at the start of its input and returns the byte
//! length it matched. Success matchers only accept a literal that is *not*
//! followed by an identifier character; the error matchers that sit right
//! after them in the rule table accept exactly the malformed remainder, so
//! `0xFFg` is diagnosed as one bad literal instead of a number and a name.
//!
//! # Number Formats
//!
//! - Binary: `0b1010` (ES2015)
//! - Octal: `0o777` (ES2015)
//! - Legacy octal: `0777`, and by extension any `0` followed by digits
//! - Hexadecimal: `0xFF`
//! - Decimal: `42`, `3.14`, `.5`, `5.`, `1e10`, `2.5E-3`

use crate::chars::{is_digit_in_base, is_ident_part, is_ident_start, next_is, prefix_len};

/// `0` + `marker` (either case) + at least one digit of `base`.
fn prefixed(text: &str, marker: u8, base: u32) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' || !bytes[1].eq_ignore_ascii_case(&marker) {
        return None;
    }
    let digits = prefix_len(&text[2..], |c| is_digit_in_base(c, base));
    (digits > 0).then_some(2 + digits)
}

/// `0` followed by at least one decimal digit.
fn legacy_octal(text: &str) -> Option<usize> {
    if !text.starts_with('0') {
        return None;
    }
    let digits = prefix_len(&text[1..], |c| c.is_ascii_digit());
    (digits > 0).then_some(1 + digits)
}

/// Just the two-character radix prefix.
fn bare_prefix(text: &str, marker: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    (bytes.len() >= 2 && bytes[0] == b'0' && bytes[1].eq_ignore_ascii_case(&marker)).then_some(2)
}

/// Longest decimal mantissa: `\d+\.\d*` or `\.\d+` or `\d+`.
fn mantissa(text: &str) -> Option<usize> {
    let int = prefix_len(text, |c| c.is_ascii_digit());
    if text[int..].starts_with('.') {
        let frac = prefix_len(&text[int + 1..], |c| c.is_ascii_digit());
        return (int > 0 || frac > 0).then_some(int + 1 + frac);
    }
    (int > 0).then_some(int)
}

/// Mantissa + `e` + optional sign + at least one digit.
fn scientific(text: &str) -> Option<usize> {
    let m = mantissa(text)?;
    let rest = &text[m..];
    if !rest.starts_with(['e', 'E']) {
        return None;
    }
    let sign = usize::from(rest[1..].starts_with(['+', '-']));
    let digits = prefix_len(&rest[1 + sign..], |c| c.is_ascii_digit());
    (digits > 0).then_some(m + 1 + sign + digits)
}

/// Accepts `len` only if no identifier character follows.
fn standalone(text: &str, len: Option<usize>) -> Option<usize> {
    len.filter(|&n| !next_is(text, n, is_ident_part))
}

/// Accepts `len` only if `pred` holds for the next character, and extends
/// the match over that character.
fn abutting(text: &str, len: Option<usize>, pred: fn(char) -> bool) -> Option<usize> {
    // Every character `pred` accepts is ASCII.
    len.filter(|&n| next_is(text, n, pred)).map(|n| n + 1)
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn binary(text: &str) -> Option<usize> {
    prefixed(text, b'b', 2)
}

fn octal(text: &str) -> Option<usize> {
    prefixed(text, b'o', 8)
}

fn hex(text: &str) -> Option<usize> {
    prefixed(text, b'x', 16)
}

fn binary_or_octal(text: &str) -> Option<usize> {
    binary(text).or_else(|| octal(text))
}

fn legacy_or_hex(text: &str) -> Option<usize> {
    legacy_octal(text).or_else(|| hex(text))
}

pub(super) fn binary_literal(text: &str) -> Option<usize> {
    standalone(text, binary(text))
}

pub(super) fn octal_literal(text: &str) -> Option<usize> {
    standalone(text, octal(text))
}

pub(super) fn legacy_octal_literal(text: &str) -> Option<usize> {
    standalone(text, legacy_octal(text))
}

pub(super) fn hex_literal(text: &str) -> Option<usize> {
    standalone(text, hex(text))
}

pub(super) fn binary_or_octal_then_identifier(text: &str) -> Option<usize> {
    abutting(text, binary_or_octal(text), is_ident_start)
}

pub(super) fn legacy_or_hex_then_identifier(text: &str) -> Option<usize> {
    abutting(text, legacy_or_hex(text), is_ident_start)
}

pub(super) fn binary_or_octal_then_digit(text: &str) -> Option<usize> {
    abutting(text, binary_or_octal(text), is_digit)
}

pub(super) fn legacy_or_hex_then_digit(text: &str) -> Option<usize> {
    abutting(text, legacy_or_hex(text), is_digit)
}

pub(super) fn binary_prefix(text: &str) -> Option<usize> {
    bare_prefix(text, b'b')
}

pub(super) fn octal_prefix(text: &str) -> Option<usize> {
    bare_prefix(text, b'o')
}

pub(super) fn hex_prefix(text: &str) -> Option<usize> {
    bare_prefix(text, b'x')
}

pub(super) fn scientific_literal(text: &str) -> Option<usize> {
    standalone(text, scientific(text))
}

pub(super) fn scientific_then_identifier(text: &str) -> Option<usize> {
    abutting(text, scientific(text), is_ident_part)
}

pub(super) fn missing_exponent(text: &str) -> Option<usize> {
    let m = mantissa(text)?;
    text[m..].starts_with(['e', 'E']).then_some(m + 1)
}

pub(super) fn decimal_literal(text: &str) -> Option<usize> {
    standalone(text, mantissa(text))
}

pub(super) fn decimal_then_identifier(text: &str) -> Option<usize> {
    abutting(text, mantissa(text), is_ident_part)
}
